//! Enrollment business logic

use crate::domain::{EnrollStudentInput, Enrollment};
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::policy::ensure_can_mutate;
use crate::repository::{CourseRepository, EnrollmentRepository, StudentRepository};
use std::sync::Arc;
use validator::Validate;

pub struct EnrollmentService<ER, SR, CR>
where
    ER: EnrollmentRepository,
    SR: StudentRepository,
    CR: CourseRepository,
{
    repo: Arc<ER>,
    student_repo: Arc<SR>,
    course_repo: Arc<CR>,
}

impl<ER, SR, CR> EnrollmentService<ER, SR, CR>
where
    ER: EnrollmentRepository,
    SR: StudentRepository,
    CR: CourseRepository,
{
    pub fn new(repo: Arc<ER>, student_repo: Arc<SR>, course_repo: Arc<CR>) -> Self {
        Self {
            repo,
            student_repo,
            course_repo,
        }
    }

    pub async fn enroll(&self, auth: &AuthUser, input: &EnrollStudentInput) -> Result<Enrollment> {
        ensure_can_mutate(auth)?;
        input.validate()?;

        // Both referenced rows must exist; a dangling id is a caller
        // mistake, not a missing resource.
        if self
            .student_repo
            .find_by_id(input.student_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Student {} does not exist",
                input.student_id
            )));
        }

        if self
            .course_repo
            .find_by_id(input.course_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Course {} does not exist",
                input.course_id
            )));
        }

        if self
            .repo
            .find_by_student_and_course(input.student_id, input.course_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "Student {} is already enrolled in course {}",
                input.student_id, input.course_id
            )));
        }

        self.repo.create(input.student_id, input.course_id).await
    }

    /// Callers with view-all access may pass a student filter; everyone
    /// else is scoped to their own enrollments regardless of the filter.
    pub async fn list(&self, auth: &AuthUser, student_id: Option<i64>) -> Result<Vec<Enrollment>> {
        if auth.caps.view_all {
            return match student_id {
                Some(id) => self.repo.list_by_student(id).await,
                None => self.repo.list().await,
            };
        }

        self.repo.list_by_student(auth.id).await
    }

    pub async fn get(&self, auth: &AuthUser, id: i64) -> Result<Enrollment> {
        let enrollment = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Enrollment {} not found", id)))?;

        // Ownership is only known after the fetch, so another student's
        // enrollment is reported as missing: the caller cannot tell a
        // foreign id from a nonexistent one.
        if !auth.caps.view_all && enrollment.student_id != auth.id {
            return Err(AppError::NotFound(format!("Enrollment {} not found", id)));
        }

        Ok(enrollment)
    }

    pub async fn delete(&self, auth: &AuthUser, id: i64) -> Result<()> {
        ensure_can_mutate(auth)?;
        self.repo.delete(id).await
    }
}
