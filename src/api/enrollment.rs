//! Enrollment API handlers

use crate::api::{Json, MessageResponse};
use crate::domain::EnrollStudentInput;
use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::server::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListEnrollmentsQuery {
    pub student_id: Option<i64>,
}

/// Enroll a student in a course
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<EnrollStudentInput>,
) -> Result<impl IntoResponse> {
    let enrollment = state.enrollment_service.enroll(&auth, &input).await?;
    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// List enrollments, optionally filtered by student
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListEnrollmentsQuery>,
) -> Result<impl IntoResponse> {
    let enrollments = state
        .enrollment_service
        .list(&auth, query.student_id)
        .await?;
    Ok(Json(enrollments))
}

/// Get enrollment by id
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let enrollment = state.enrollment_service.get(&auth, id).await?;
    Ok(Json(enrollment))
}

/// Delete enrollment
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.enrollment_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Enrollment deleted")))
}
