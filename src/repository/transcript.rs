//! Transcript row repository
//!
//! Carries the joined query both derived views (transcript, GPA) read
//! through: enrollments inner-joined to courses, left-joined to grades.

use crate::domain::TranscriptRow;
use crate::error::Result;
use async_trait::async_trait;
use sqlx::MySqlPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptRepository: Send + Sync {
    /// Joined course/grade rows for one student, ordered by semester then
    /// course code; ungraded rows (NULL semester) sort last.
    async fn course_rows(&self, student_id: i64) -> Result<Vec<TranscriptRow>>;
}

pub struct TranscriptRepositoryImpl {
    pool: MySqlPool,
}

impl TranscriptRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TranscriptRepository for TranscriptRepositoryImpl {
    async fn course_rows(&self, student_id: i64) -> Result<Vec<TranscriptRow>> {
        let rows = sqlx::query_as::<_, TranscriptRow>(
            r#"
            SELECT
                c.code AS course_code,
                c.title AS course_title,
                c.credits AS credits,
                g.grade AS grade,
                g.semester AS semester
            FROM enrollments e
            JOIN courses c ON e.course_id = c.id
            LEFT JOIN grades g ON e.id = g.enrollment_id
            WHERE e.student_id = ?
            ORDER BY g.semester IS NULL, g.semester, c.code
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
