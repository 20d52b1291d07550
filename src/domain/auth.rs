//! Authentication domain types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Caller role carried in the signed token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Faculty,
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "faculty" => Ok(Role::Faculty),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Faculty => write!(f, "faculty"),
        }
    }
}

/// Login request body
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i64,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    pub role: Role,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub role: Role,
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str() {
        assert_eq!("student".parse::<Role>().unwrap(), Role::Student);
        assert_eq!("Faculty".parse::<Role>().unwrap(), Role::Faculty);
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_display_roundtrip() {
        for role in [Role::Student, Role::Faculty] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Faculty).unwrap(), "\"faculty\"");
        let role: Role = serde_json::from_str("\"student\"").unwrap();
        assert_eq!(role, Role::Student);
    }

    #[test]
    fn test_login_request_validation() {
        let req = LoginRequest {
            id: 0,
            password: String::new(),
            role: Role::Student,
        };
        assert!(req.validate().is_err());

        let req = LoginRequest {
            id: 7,
            password: "hunter2".to_string(),
            role: Role::Faculty,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_login_request_rejects_unknown_role() {
        let result: std::result::Result<LoginRequest, _> =
            serde_json::from_str(r#"{"id": 1, "password": "pw", "role": "admin"}"#);
        assert!(result.is_err());
    }
}
