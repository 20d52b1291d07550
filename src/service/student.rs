//! Student business logic

use crate::domain::{CreateStudentInput, Student, UpdateStudentInput};
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::policy::{ensure_can_mutate, ensure_can_view_student};
use crate::repository::StudentRepository;
use crate::service::auth::hash_password;
use std::sync::Arc;
use validator::Validate;

pub struct StudentService<R: StudentRepository> {
    repo: Arc<R>,
}

impl<R: StudentRepository> StudentService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, auth: &AuthUser, input: &CreateStudentInput) -> Result<Student> {
        ensure_can_mutate(auth)?;
        input.validate()?;

        let password_hash = hash_password(&input.password)?;
        self.repo.create(input, &password_hash).await
    }

    /// Full roster for callers with view-all access; a student sees only
    /// their own record.
    pub async fn list(&self, auth: &AuthUser) -> Result<Vec<Student>> {
        if auth.caps.view_all {
            return self.repo.list().await;
        }

        match self.repo.find_by_id(auth.id).await? {
            Some(student) => Ok(vec![student]),
            None => Ok(Vec::new()),
        }
    }

    pub async fn get(&self, auth: &AuthUser, id: i64) -> Result<Student> {
        // Authorization is checked before existence so a student probing
        // another id learns nothing from the status code.
        ensure_can_view_student(auth, id)?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student {} not found", id)))
    }

    pub async fn update(
        &self,
        auth: &AuthUser,
        id: i64,
        input: &UpdateStudentInput,
    ) -> Result<Student> {
        ensure_can_mutate(auth)?;
        input.validate()?;

        self.repo.update(id, input).await
    }

    pub async fn delete(&self, auth: &AuthUser, id: i64) -> Result<()> {
        ensure_can_mutate(auth)?;
        self.repo.delete(id).await
    }
}
