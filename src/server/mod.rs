//! Server initialization and routing

use crate::api;
use crate::config::Config;
use crate::jwt::JwtManager;
use crate::repository::{
    CourseRepositoryImpl, CredentialRepositoryImpl, EnrollmentRepositoryImpl, GradeRepositoryImpl,
    StudentRepositoryImpl, TranscriptRepositoryImpl,
};
use crate::service::{
    AuthService, CourseService, EnrollmentService, GradeService, StudentService, TranscriptService,
};
use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use sqlx::{mysql::MySqlPoolOptions, MySqlPool};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db_pool: MySqlPool,
    pub jwt_manager: JwtManager,
    pub auth_service: Arc<AuthService<CredentialRepositoryImpl>>,
    pub student_service: Arc<StudentService<StudentRepositoryImpl>>,
    pub course_service: Arc<CourseService<CourseRepositoryImpl>>,
    pub enrollment_service: Arc<
        EnrollmentService<EnrollmentRepositoryImpl, StudentRepositoryImpl, CourseRepositoryImpl>,
    >,
    pub grade_service: Arc<GradeService<GradeRepositoryImpl, EnrollmentRepositoryImpl>>,
    pub transcript_service: Arc<TranscriptService<StudentRepositoryImpl, TranscriptRepositoryImpl>>,
}

/// Run the server
pub async fn run(config: Config) -> Result<()> {
    let db_pool = MySqlPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await?;

    info!("Connected to database");

    sqlx::migrate!("./migrations").run(&db_pool).await?;
    info!("Migrations applied");

    let student_repo = Arc::new(StudentRepositoryImpl::new(db_pool.clone()));
    let course_repo = Arc::new(CourseRepositoryImpl::new(db_pool.clone()));
    let enrollment_repo = Arc::new(EnrollmentRepositoryImpl::new(db_pool.clone()));
    let grade_repo = Arc::new(GradeRepositoryImpl::new(db_pool.clone()));
    let transcript_repo = Arc::new(TranscriptRepositoryImpl::new(db_pool.clone()));
    let credential_repo = Arc::new(CredentialRepositoryImpl::new(db_pool.clone()));

    let jwt_manager = JwtManager::new(config.jwt.clone());

    let auth_service = Arc::new(AuthService::new(credential_repo, jwt_manager.clone()));
    let student_service = Arc::new(StudentService::new(student_repo.clone()));
    let course_service = Arc::new(CourseService::new(course_repo.clone()));
    let enrollment_service = Arc::new(EnrollmentService::new(
        enrollment_repo.clone(),
        student_repo.clone(),
        course_repo,
    ));
    let grade_service = Arc::new(GradeService::new(grade_repo, enrollment_repo));
    let transcript_service = Arc::new(TranscriptService::new(student_repo, transcript_repo));

    let http_addr = config.http_addr();
    let state = AppState {
        config: Arc::new(config),
        db_pool,
        jwt_manager,
        auth_service,
        student_service,
        course_service,
        enrollment_service,
        grade_service,
        transcript_service,
    };

    let app = build_router(state);

    let listener = TcpListener::bind(&http_addr).await?;
    info!("HTTP server started on {}", http_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the axum router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health endpoints
        .route("/health", get(api::health::health))
        .route("/ready", get(api::health::ready))
        // Login
        .route("/login", post(api::auth::login))
        // Student endpoints
        .route(
            "/students",
            get(api::student::list).post(api::student::create),
        )
        .route(
            "/students/{id}",
            get(api::student::get)
                .put(api::student::update)
                .delete(api::student::delete),
        )
        .route("/students/{id}/transcript", get(api::student::transcript))
        .route("/students/{id}/gpa", get(api::student::gpa))
        // Course endpoints
        .route("/courses", get(api::course::list).post(api::course::create))
        .route(
            "/courses/{id}",
            get(api::course::get)
                .put(api::course::update)
                .delete(api::course::delete),
        )
        // Enrollment endpoints
        .route(
            "/enrollments",
            get(api::enrollment::list).post(api::enrollment::create),
        )
        .route(
            "/enrollments/{id}",
            get(api::enrollment::get).delete(api::enrollment::delete),
        )
        // Grade endpoints
        .route("/grades", get(api::grade::list).post(api::grade::create))
        .route(
            "/grades/{id}",
            get(api::grade::get)
                .put(api::grade::update)
                .delete(api::grade::delete),
        )
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors)
        .with_state(state)
}
