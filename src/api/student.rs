//! Student API handlers
//!
//! All routes require authentication; the extracted caller is passed
//! through to the service layer, which enforces role policy.

use crate::api::{Json, MessageResponse};
use crate::domain::{CreateStudentInput, UpdateStudentInput};
use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::server::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// Create student
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateStudentInput>,
) -> Result<impl IntoResponse> {
    let student = state.student_service.create(&auth, &input).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// List students
pub async fn list(State(state): State<AppState>, auth: AuthUser) -> Result<impl IntoResponse> {
    let students = state.student_service.list(&auth).await?;
    Ok(Json(students))
}

/// Get student by id
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let student = state.student_service.get(&auth, id).await?;
    Ok(Json(student))
}

/// Update student
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(input): Json<UpdateStudentInput>,
) -> Result<impl IntoResponse> {
    let student = state.student_service.update(&auth, id, &input).await?;
    Ok(Json(student))
}

/// Delete student
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.student_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Student deleted")))
}

/// Get a student's transcript
pub async fn transcript(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let transcript = state.transcript_service.transcript(&auth, id).await?;
    Ok(Json(transcript))
}

/// Get a student's GPA
pub async fn gpa(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let summary = state.transcript_service.gpa(&auth, id).await?;
    Ok(Json(summary))
}
