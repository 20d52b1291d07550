//! Derived views: transcript and GPA

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One joined row of the transcript query: enrollment -> course (inner)
/// -> grade (left). Grade and semester are NULL for ungraded enrollments.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct TranscriptRow {
    pub course_code: String,
    pub course_title: String,
    pub credits: i32,
    pub grade: Option<f64>,
    pub semester: Option<String>,
}

/// Transcript entry as rendered to clients. Unknown grade/semester are
/// explicit nulls, never elided or replaced with sentinels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub course_code: String,
    pub course_title: String,
    pub credits: i32,
    pub grade: Option<f64>,
    pub semester: Option<String>,
}

impl From<TranscriptRow> for TranscriptEntry {
    fn from(row: TranscriptRow) -> Self {
        Self {
            course_code: row.course_code,
            course_title: row.course_title,
            credits: row.credits,
            grade: row.grade,
            semester: row.semester,
        }
    }
}

/// A student's transcript (derived, not stored)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub student_id: i64,
    pub student_name: String,
    pub courses: Vec<TranscriptEntry>,
}

/// Credit-weighted GPA over graded enrollments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpaSummary {
    pub student_id: i64,
    pub gpa: f64,
}
