//! Course API handlers

use crate::api::{Json, MessageResponse};
use crate::domain::CourseInput;
use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::server::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// Create course
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CourseInput>,
) -> Result<impl IntoResponse> {
    let course = state.course_service.create(&auth, &input).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// List courses
pub async fn list(State(state): State<AppState>, auth: AuthUser) -> Result<impl IntoResponse> {
    let courses = state.course_service.list(&auth).await?;
    Ok(Json(courses))
}

/// Get course by id
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let course = state.course_service.get(&auth, id).await?;
    Ok(Json(course))
}

/// Update course
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(input): Json<CourseInput>,
) -> Result<impl IntoResponse> {
    let course = state.course_service.update(&auth, id, &input).await?;
    Ok(Json(course))
}

/// Delete course
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.course_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Course deleted")))
}
