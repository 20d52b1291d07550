//! Course domain model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Course entity
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub credits: i32,
}

/// Input for creating or replacing a course.
///
/// PUT is a full-field update, so create and update share one input shape.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CourseInput {
    #[validate(length(min = 1, max = 32, message = "Course code is required"))]
    pub code: String,
    #[validate(length(min = 1, max = 255, message = "Course title is required"))]
    pub title: String,
    #[validate(range(min = 1, message = "Course credits must be positive"))]
    pub credits: i32,
}
