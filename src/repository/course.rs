//! Course repository

use crate::domain::{Course, CourseInput};
use crate::error::{is_duplicate_entry, AppError, Result};
use async_trait::async_trait;
use sqlx::MySqlPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, input: &CourseInput) -> Result<Course>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>>;
    async fn find_by_code(&self, code: &str) -> Result<Option<Course>>;
    async fn list(&self) -> Result<Vec<Course>>;
    async fn update(&self, id: i64, input: &CourseInput) -> Result<Course>;
    async fn delete(&self, id: i64) -> Result<()>;
}

pub struct CourseRepositoryImpl {
    pool: MySqlPool,
}

impl CourseRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

// The `code` column carries a unique index; duplicate-key failures are
// translated to Conflict here so a racing insert cannot surface as a 500.
fn conflict_on_duplicate(err: sqlx::Error, code: &str) -> AppError {
    if is_duplicate_entry(&err) {
        AppError::Conflict(format!("Course with code '{}' already exists", code))
    } else {
        AppError::Database(err)
    }
}

#[async_trait]
impl CourseRepository for CourseRepositoryImpl {
    async fn create(&self, input: &CourseInput) -> Result<Course> {
        let result = sqlx::query(
            r#"
            INSERT INTO courses (code, title, credits)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&input.code)
        .bind(&input.title)
        .bind(input.credits)
        .execute(&self.pool)
        .await
        .map_err(|e| conflict_on_duplicate(e, &input.code))?;

        let id = result.last_insert_id() as i64;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to create course")))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(
            "SELECT id, code, title, credits FROM courses WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(course)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(
            "SELECT id, code, title, credits FROM courses WHERE code = ?",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(course)
    }

    async fn list(&self) -> Result<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, code, title, credits FROM courses ORDER BY code",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(courses)
    }

    async fn update(&self, id: i64, input: &CourseInput) -> Result<Course> {
        let result = sqlx::query(
            r#"
            UPDATE courses
            SET code = ?, title = ?, credits = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.code)
        .bind(&input.title)
        .bind(input.credits)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| conflict_on_duplicate(e, &input.code))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Course {} not found", id)));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to update course")))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Course {} not found", id)));
        }

        Ok(())
    }
}
