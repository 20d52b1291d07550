//! Course catalog business logic

use crate::domain::{Course, CourseInput};
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::policy::ensure_can_mutate;
use crate::repository::CourseRepository;
use std::sync::Arc;
use validator::Validate;

pub struct CourseService<R: CourseRepository> {
    repo: Arc<R>,
}

impl<R: CourseRepository> CourseService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, auth: &AuthUser, input: &CourseInput) -> Result<Course> {
        ensure_can_mutate(auth)?;
        input.validate()?;

        if self.repo.find_by_code(&input.code).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Course with code '{}' already exists",
                input.code
            )));
        }

        self.repo.create(input).await
    }

    /// The catalog is readable by any authenticated caller.
    pub async fn list(&self, _auth: &AuthUser) -> Result<Vec<Course>> {
        self.repo.list().await
    }

    pub async fn get(&self, _auth: &AuthUser, id: i64) -> Result<Course> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course {} not found", id)))
    }

    pub async fn update(&self, auth: &AuthUser, id: i64, input: &CourseInput) -> Result<Course> {
        ensure_can_mutate(auth)?;
        input.validate()?;

        // A code may move to this course only if no other course holds it.
        if let Some(existing) = self.repo.find_by_code(&input.code).await? {
            if existing.id != id {
                return Err(AppError::Conflict(format!(
                    "Course with code '{}' already exists",
                    input.code
                )));
            }
        }

        self.repo.update(id, input).await
    }

    pub async fn delete(&self, auth: &AuthUser, id: i64) -> Result<()> {
        ensure_can_mutate(auth)?;
        self.repo.delete(id).await
    }
}
