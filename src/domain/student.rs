//! Student domain model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Student entity
///
/// The credential hash is loaded for authentication but never serialized
/// into a response body.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub program: Option<String>,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
}

impl Default for Student {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            address: None,
            contact: None,
            program: None,
            password_hash: String::new(),
        }
    }
}

/// Input for creating a new student
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStudentInput {
    #[validate(length(min = 1, max = 255, message = "Student name is required"))]
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub program: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Input for updating a student (full-field replacement)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStudentInput {
    #[validate(length(min = 1, max = 255, message = "Student name is required"))]
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub program: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_never_serialized() {
        let student = Student {
            id: 1,
            name: "Ada".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&student).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2"));
        assert!(json.contains("\"name\":\"Ada\""));
    }

    #[test]
    fn test_create_input_requires_name() {
        let input = CreateStudentInput {
            name: String::new(),
            date_of_birth: NaiveDate::from_ymd_opt(2001, 5, 14).unwrap(),
            address: None,
            contact: None,
            program: None,
            password: "correct-horse".to_string(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_input_requires_password_length() {
        let input = CreateStudentInput {
            name: "Ada".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2001, 5, 14).unwrap(),
            address: None,
            contact: None,
            program: None,
            password: "short".to_string(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_update_input_valid() {
        let input = UpdateStudentInput {
            name: "Ada Lovelace".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2001, 5, 14).unwrap(),
            address: Some("12 Analytical St".to_string()),
            contact: None,
            program: Some("Mathematics".to_string()),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_student_deserialize_without_hash() {
        let json = r#"{
            "id": 3,
            "name": "Grace",
            "date_of_birth": "2002-12-09",
            "address": null,
            "contact": "grace@example.edu",
            "program": "CS"
        }"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.id, 3);
        assert!(student.password_hash.is_empty());
    }
}
