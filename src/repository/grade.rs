//! Grade repository

use crate::domain::{Grade, GradeInput};
use crate::error::{is_duplicate_entry, AppError, Result};
use async_trait::async_trait;
use sqlx::MySqlPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GradeRepository: Send + Sync {
    async fn create(&self, input: &GradeInput) -> Result<Grade>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Grade>>;
    async fn find_by_enrollment_and_semester(
        &self,
        enrollment_id: i64,
        semester: &str,
    ) -> Result<Option<Grade>>;
    async fn list(&self) -> Result<Vec<Grade>>;
    async fn list_by_student(&self, student_id: i64) -> Result<Vec<Grade>>;
    async fn update(&self, id: i64, input: &GradeInput) -> Result<Grade>;
    async fn delete(&self, id: i64) -> Result<()>;
}

pub struct GradeRepositoryImpl {
    pool: MySqlPool,
}

impl GradeRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

fn conflict_on_duplicate(err: sqlx::Error, enrollment_id: i64, semester: &str) -> AppError {
    if is_duplicate_entry(&err) {
        AppError::Conflict(format!(
            "A grade for enrollment {} in semester '{}' already exists",
            enrollment_id, semester
        ))
    } else {
        AppError::Database(err)
    }
}

#[async_trait]
impl GradeRepository for GradeRepositoryImpl {
    async fn create(&self, input: &GradeInput) -> Result<Grade> {
        let result = sqlx::query(
            r#"
            INSERT INTO grades (enrollment_id, grade, semester)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(input.enrollment_id)
        .bind(input.grade)
        .bind(&input.semester)
        .execute(&self.pool)
        .await
        .map_err(|e| conflict_on_duplicate(e, input.enrollment_id, &input.semester))?;

        let id = result.last_insert_id() as i64;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to add grade")))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Grade>> {
        let grade = sqlx::query_as::<_, Grade>(
            "SELECT id, enrollment_id, grade, semester FROM grades WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(grade)
    }

    async fn find_by_enrollment_and_semester(
        &self,
        enrollment_id: i64,
        semester: &str,
    ) -> Result<Option<Grade>> {
        let grade = sqlx::query_as::<_, Grade>(
            r#"
            SELECT id, enrollment_id, grade, semester
            FROM grades
            WHERE enrollment_id = ? AND semester = ?
            "#,
        )
        .bind(enrollment_id)
        .bind(semester)
        .fetch_optional(&self.pool)
        .await?;

        Ok(grade)
    }

    async fn list(&self) -> Result<Vec<Grade>> {
        let grades = sqlx::query_as::<_, Grade>(
            "SELECT id, enrollment_id, grade, semester FROM grades ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(grades)
    }

    async fn list_by_student(&self, student_id: i64) -> Result<Vec<Grade>> {
        let grades = sqlx::query_as::<_, Grade>(
            r#"
            SELECT g.id, g.enrollment_id, g.grade, g.semester
            FROM grades g
            JOIN enrollments e ON g.enrollment_id = e.id
            WHERE e.student_id = ?
            ORDER BY g.id
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(grades)
    }

    async fn update(&self, id: i64, input: &GradeInput) -> Result<Grade> {
        let result = sqlx::query(
            r#"
            UPDATE grades
            SET enrollment_id = ?, grade = ?, semester = ?
            WHERE id = ?
            "#,
        )
        .bind(input.enrollment_id)
        .bind(input.grade)
        .bind(&input.semester)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| conflict_on_duplicate(e, input.enrollment_id, &input.semester))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Grade {} not found", id)));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to update grade")))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM grades WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Grade {} not found", id)));
        }

        Ok(())
    }
}
