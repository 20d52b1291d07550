//! Grade business logic

use crate::domain::{Grade, GradeInput};
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::policy::ensure_can_mutate;
use crate::repository::{EnrollmentRepository, GradeRepository};
use std::sync::Arc;
use validator::Validate;

pub struct GradeService<GR, ER>
where
    GR: GradeRepository,
    ER: EnrollmentRepository,
{
    repo: Arc<GR>,
    enrollment_repo: Arc<ER>,
}

impl<GR, ER> GradeService<GR, ER>
where
    GR: GradeRepository,
    ER: EnrollmentRepository,
{
    pub fn new(repo: Arc<GR>, enrollment_repo: Arc<ER>) -> Self {
        Self {
            repo,
            enrollment_repo,
        }
    }

    pub async fn add(&self, auth: &AuthUser, input: &GradeInput) -> Result<Grade> {
        ensure_can_mutate(auth)?;
        input.validate()?;

        self.ensure_enrollment_exists(input.enrollment_id).await?;

        if self
            .repo
            .find_by_enrollment_and_semester(input.enrollment_id, &input.semester)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "A grade for enrollment {} in semester '{}' already exists",
                input.enrollment_id, input.semester
            )));
        }

        self.repo.create(input).await
    }

    pub async fn list(&self, auth: &AuthUser) -> Result<Vec<Grade>> {
        if auth.caps.view_all {
            self.repo.list().await
        } else {
            self.repo.list_by_student(auth.id).await
        }
    }

    pub async fn get(&self, auth: &AuthUser, id: i64) -> Result<Grade> {
        let grade = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Grade {} not found", id)))?;

        if !auth.caps.view_all {
            let enrollment = self
                .enrollment_repo
                .find_by_id(grade.enrollment_id)
                .await?
                .ok_or_else(|| {
                    AppError::Internal(anyhow::anyhow!(
                        "Grade {} references missing enrollment {}",
                        grade.id,
                        grade.enrollment_id
                    ))
                })?;

            // Another student's grade is reported as missing, so the
            // caller cannot tell a foreign id from a nonexistent one.
            if enrollment.student_id != auth.id {
                return Err(AppError::NotFound(format!("Grade {} not found", id)));
            }
        }

        Ok(grade)
    }

    pub async fn update(&self, auth: &AuthUser, id: i64, input: &GradeInput) -> Result<Grade> {
        ensure_can_mutate(auth)?;
        input.validate()?;

        self.ensure_enrollment_exists(input.enrollment_id).await?;

        // The (enrollment, semester) slot may be taken only by this row.
        if let Some(existing) = self
            .repo
            .find_by_enrollment_and_semester(input.enrollment_id, &input.semester)
            .await?
        {
            if existing.id != id {
                return Err(AppError::Conflict(format!(
                    "A grade for enrollment {} in semester '{}' already exists",
                    input.enrollment_id, input.semester
                )));
            }
        }

        self.repo.update(id, input).await
    }

    pub async fn delete(&self, auth: &AuthUser, id: i64) -> Result<()> {
        ensure_can_mutate(auth)?;
        self.repo.delete(id).await
    }

    async fn ensure_enrollment_exists(&self, enrollment_id: i64) -> Result<()> {
        if self
            .enrollment_repo
            .find_by_id(enrollment_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Enrollment {} does not exist",
                enrollment_id
            )));
        }

        Ok(())
    }
}
