//! Student repository

use crate::domain::{CreateStudentInput, Student, UpdateStudentInput};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use sqlx::MySqlPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn create(&self, input: &CreateStudentInput, password_hash: &str) -> Result<Student>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>>;
    async fn list(&self) -> Result<Vec<Student>>;
    async fn update(&self, id: i64, input: &UpdateStudentInput) -> Result<Student>;
    async fn delete(&self, id: i64) -> Result<()>;
}

pub struct StudentRepositoryImpl {
    pool: MySqlPool,
}

impl StudentRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for StudentRepositoryImpl {
    async fn create(&self, input: &CreateStudentInput, password_hash: &str) -> Result<Student> {
        let result = sqlx::query(
            r#"
            INSERT INTO students (name, date_of_birth, address, contact, program, password_hash)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.name)
        .bind(input.date_of_birth)
        .bind(&input.address)
        .bind(&input.contact)
        .bind(&input.program)
        .bind(password_hash)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id() as i64;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to create student")))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, name, date_of_birth, address, contact, program, password_hash
            FROM students
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    async fn list(&self) -> Result<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, name, date_of_birth, address, contact, program, password_hash
            FROM students
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }

    async fn update(&self, id: i64, input: &UpdateStudentInput) -> Result<Student> {
        let result = sqlx::query(
            r#"
            UPDATE students
            SET name = ?, date_of_birth = ?, address = ?, contact = ?, program = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.name)
        .bind(input.date_of_birth)
        .bind(&input.address)
        .bind(&input.contact)
        .bind(&input.program)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Student {} not found", id)));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to update student")))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Student {} not found", id)));
        }

        Ok(())
    }
}
