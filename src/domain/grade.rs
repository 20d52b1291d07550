//! Grade domain model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Grade entity. The numeric grade is optional: an enrollment may be
/// recorded for a semester before a grade is assigned.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Grade {
    pub id: i64,
    pub enrollment_id: i64,
    pub grade: Option<f64>,
    pub semester: String,
}

/// Input for adding or replacing a grade
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GradeInput {
    #[validate(range(min = 1, message = "Enrollment ID is required"))]
    pub enrollment_id: i64,
    #[validate(range(min = 0.0, max = 4.0, message = "Grade must be between 0.0 and 4.0"))]
    pub grade: Option<f64>,
    #[validate(length(min = 1, max = 32, message = "Semester is required"))]
    pub semester: String,
}
