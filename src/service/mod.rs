//! Business logic layer
//!
//! Services are generic over repository traits so tests can substitute
//! mockall doubles. Every operation takes the authenticated caller
//! explicitly and enforces policy before touching a repository.

pub mod auth;
pub mod course;
pub mod enrollment;
pub mod grade;
pub mod student;
pub mod transcript;

pub use auth::AuthService;
pub use course::CourseService;
pub use enrollment::EnrollmentService;
pub use grade::GradeService;
pub use student::StudentService;
pub use transcript::TranscriptService;
