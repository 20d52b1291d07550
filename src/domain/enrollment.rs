//! Enrollment domain model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Enrollment entity. `enrollment_date` is set by the database at insert.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub enrollment_date: NaiveDate,
}

impl Default for Enrollment {
    fn default() -> Self {
        Self {
            id: 0,
            student_id: 0,
            course_id: 0,
            enrollment_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }
}

/// Input for enrolling a student in a course
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EnrollStudentInput {
    #[validate(range(min = 1, message = "Student ID is required"))]
    pub student_id: i64,
    #[validate(range(min = 1, message = "Course ID is required"))]
    pub course_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enroll_input_requires_ids() {
        let input = EnrollStudentInput {
            student_id: 0,
            course_id: 9,
        };
        assert!(input.validate().is_err());

        let input = EnrollStudentInput {
            student_id: 5,
            course_id: 0,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_enroll_input_valid() {
        let input = EnrollStudentInput {
            student_id: 5,
            course_id: 9,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_enrollment_date_serialization() {
        let enrollment = Enrollment {
            id: 1,
            student_id: 5,
            course_id: 9,
            enrollment_date: NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
        };
        let json = serde_json::to_string(&enrollment).unwrap();
        assert!(json.contains("\"enrollment_date\":\"2026-08-25\""));
    }
}
