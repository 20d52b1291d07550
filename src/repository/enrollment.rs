//! Enrollment repository

use crate::domain::Enrollment;
use crate::error::{is_duplicate_entry, AppError, Result};
use async_trait::async_trait;
use sqlx::MySqlPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn create(&self, student_id: i64, course_id: i64) -> Result<Enrollment>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Enrollment>>;
    async fn find_by_student_and_course(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>>;
    async fn list(&self) -> Result<Vec<Enrollment>>;
    async fn list_by_student(&self, student_id: i64) -> Result<Vec<Enrollment>>;
    async fn delete(&self, id: i64) -> Result<()>;
}

pub struct EnrollmentRepositoryImpl {
    pool: MySqlPool,
}

impl EnrollmentRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentRepository for EnrollmentRepositoryImpl {
    async fn create(&self, student_id: i64, course_id: i64) -> Result<Enrollment> {
        // enrollment_date is set by the schema at insert time
        let result = sqlx::query(
            r#"
            INSERT INTO enrollments (student_id, course_id, enrollment_date)
            VALUES (?, ?, CURRENT_DATE)
            "#,
        )
        .bind(student_id)
        .bind(course_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_duplicate_entry(&e) {
                AppError::Conflict(format!(
                    "Student {} is already enrolled in course {}",
                    student_id, course_id
                ))
            } else {
                AppError::Database(e)
            }
        })?;

        let id = result.last_insert_id() as i64;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to create enrollment")))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Enrollment>> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            r#"
            SELECT id, student_id, course_id, enrollment_date
            FROM enrollments
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(enrollment)
    }

    async fn find_by_student_and_course(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            r#"
            SELECT id, student_id, course_id, enrollment_date
            FROM enrollments
            WHERE student_id = ? AND course_id = ?
            "#,
        )
        .bind(student_id)
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(enrollment)
    }

    async fn list(&self) -> Result<Vec<Enrollment>> {
        let enrollments = sqlx::query_as::<_, Enrollment>(
            r#"
            SELECT id, student_id, course_id, enrollment_date
            FROM enrollments
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(enrollments)
    }

    async fn list_by_student(&self, student_id: i64) -> Result<Vec<Enrollment>> {
        let enrollments = sqlx::query_as::<_, Enrollment>(
            r#"
            SELECT id, student_id, course_id, enrollment_date
            FROM enrollments
            WHERE student_id = ?
            ORDER BY id
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(enrollments)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM enrollments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Enrollment {} not found", id)));
        }

        Ok(())
    }
}
