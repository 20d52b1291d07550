//! Domain models and validated input types

pub mod auth;
pub mod course;
pub mod enrollment;
pub mod grade;
pub mod student;
pub mod transcript;

pub use auth::{AuthResponse, LoginRequest, Role};
pub use course::{Course, CourseInput};
pub use enrollment::{Enrollment, EnrollStudentInput};
pub use grade::{Grade, GradeInput};
pub use student::{CreateStudentInput, Student, UpdateStudentInput};
pub use transcript::{GpaSummary, Transcript, TranscriptEntry, TranscriptRow};
