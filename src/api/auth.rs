//! Login API handler

use crate::api::Json;
use crate::domain::LoginRequest;
use crate::error::Result;
use crate::server::AppState;
use axum::{extract::State, response::IntoResponse};

/// Authenticate an id/password pair and issue a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    let response = state.auth_service.login(&input).await?;
    Ok(Json(response))
}
