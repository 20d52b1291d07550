//! Transcript and GPA derivation

use crate::domain::{GpaSummary, Transcript, TranscriptRow};
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::policy::ensure_can_view_student;
use crate::repository::{StudentRepository, TranscriptRepository};
use std::sync::Arc;

pub struct TranscriptService<SR, TR>
where
    SR: StudentRepository,
    TR: TranscriptRepository,
{
    student_repo: Arc<SR>,
    transcript_repo: Arc<TR>,
}

impl<SR, TR> TranscriptService<SR, TR>
where
    SR: StudentRepository,
    TR: TranscriptRepository,
{
    pub fn new(student_repo: Arc<SR>, transcript_repo: Arc<TR>) -> Self {
        Self {
            student_repo,
            transcript_repo,
        }
    }

    pub async fn transcript(&self, auth: &AuthUser, student_id: i64) -> Result<Transcript> {
        let (student, rows) = self.load(auth, student_id).await?;

        Ok(Transcript {
            student_id,
            student_name: student,
            courses: rows.into_iter().map(Into::into).collect(),
        })
    }

    /// Credit-weighted mean over graded courses. Ungraded enrollments do
    /// not count; a student with no graded courses has a GPA of 0.0.
    pub async fn gpa(&self, auth: &AuthUser, student_id: i64) -> Result<GpaSummary> {
        let (_, rows) = self.load(auth, student_id).await?;

        Ok(GpaSummary {
            student_id,
            gpa: compute_gpa(&rows),
        })
    }

    async fn load(&self, auth: &AuthUser, student_id: i64) -> Result<(String, Vec<TranscriptRow>)> {
        ensure_can_view_student(auth, student_id)?;

        let student = self
            .student_repo
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student {} not found", student_id)))?;

        let rows = self.transcript_repo.course_rows(student_id).await?;

        Ok((student.name, rows))
    }
}

fn compute_gpa(rows: &[TranscriptRow]) -> f64 {
    let mut weighted = 0.0;
    let mut credits = 0i64;

    for row in rows {
        if let Some(grade) = row.grade {
            weighted += grade * row.credits as f64;
            credits += row.credits as i64;
        }
    }

    if credits == 0 {
        0.0
    } else {
        weighted / credits as f64
    }
}
