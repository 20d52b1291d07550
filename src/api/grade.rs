//! Grade API handlers

use crate::api::{Json, MessageResponse};
use crate::domain::GradeInput;
use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::server::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// Record a grade for an enrollment
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<GradeInput>,
) -> Result<impl IntoResponse> {
    let grade = state.grade_service.add(&auth, &input).await?;
    Ok((StatusCode::CREATED, Json(grade)))
}

/// List grades visible to the caller
pub async fn list(State(state): State<AppState>, auth: AuthUser) -> Result<impl IntoResponse> {
    let grades = state.grade_service.list(&auth).await?;
    Ok(Json(grades))
}

/// Get grade by id
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let grade = state.grade_service.get(&auth, id).await?;
    Ok(Json(grade))
}

/// Update grade
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(input): Json<GradeInput>,
) -> Result<impl IntoResponse> {
    let grade = state.grade_service.update(&auth, id, &input).await?;
    Ok(Json(grade))
}

/// Delete grade
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.grade_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Grade deleted")))
}
