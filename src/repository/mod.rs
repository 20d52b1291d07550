//! Data access layer: sqlx MySQL repositories behind mockable traits

pub mod course;
pub mod credential;
pub mod enrollment;
pub mod grade;
pub mod student;
pub mod transcript;

pub use course::{CourseRepository, CourseRepositoryImpl};
pub use credential::{CredentialRecord, CredentialRepository, CredentialRepositoryImpl};
pub use enrollment::{EnrollmentRepository, EnrollmentRepositoryImpl};
pub use grade::{GradeRepository, GradeRepositoryImpl};
pub use student::{StudentRepository, StudentRepositoryImpl};
pub use transcript::{TranscriptRepository, TranscriptRepositoryImpl};
