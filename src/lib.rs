//! Registrar Core - Student Records Service
//!
//! This crate provides a role-gated REST API over student records:
//! students, the course catalog, enrollments, grades, and the derived
//! transcript and GPA views.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod policy;
pub mod repository;
pub mod server;
pub mod service;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
