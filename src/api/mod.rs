//! HTTP API handlers

pub mod auth;
pub mod course;
pub mod enrollment;
pub mod grade;
pub mod health;
pub mod student;

use crate::error::AppError;
use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// JSON extractor whose rejection is an `AppError`, so a malformed body
/// produces the same `{"error": message}` shape as every other failure.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Message response (for delete, etc.)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
