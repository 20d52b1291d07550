//! Centralized authorization policy for HTTP handlers.
//!
//! Role branching is resolved once per request into a capability set;
//! handlers and services check capabilities instead of comparing role
//! strings inline.

use crate::domain::Role;
use crate::error::AppError;
use crate::middleware::auth::AuthUser;

pub type PolicyResult<T> = std::result::Result<T, AppError>;

/// What a caller is allowed to do, resolved from its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// May read any student's records
    pub view_all: bool,
    /// May create, update, or delete records
    pub mutate: bool,
}

impl Capabilities {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Faculty => Self {
                view_all: true,
                mutate: true,
            },
            Role::Student => Self {
                view_all: false,
                mutate: false,
            },
        }
    }
}

/// Require mutation capability (faculty-only operations).
pub fn ensure_can_mutate(auth: &AuthUser) -> PolicyResult<()> {
    if auth.caps.mutate {
        Ok(())
    } else {
        Err(AppError::Forbidden("Faculty access required".to_string()))
    }
}

/// Require read access to a specific student's records: either the caller
/// can view everything, or the records are its own.
pub fn ensure_can_view_student(auth: &AuthUser, student_id: i64) -> PolicyResult<()> {
    if auth.caps.view_all || auth.id == student_id {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Access to another student's records is not permitted".to_string(),
        ))
    }
}
