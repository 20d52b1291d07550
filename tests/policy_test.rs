//! Role/capability policy matrix tests

use registrar_core::domain::Role;
use registrar_core::error::AppError;
use registrar_core::middleware::auth::AuthUser;
use registrar_core::policy::{ensure_can_mutate, ensure_can_view_student, Capabilities};

#[test]
fn test_capability_matrix() {
    let faculty = Capabilities::for_role(Role::Faculty);
    assert!(faculty.view_all);
    assert!(faculty.mutate);

    let student = Capabilities::for_role(Role::Student);
    assert!(!student.view_all);
    assert!(!student.mutate);
}

#[test]
fn test_faculty_can_mutate_and_view_anyone() {
    let auth = AuthUser::new(1, Role::Faculty);

    assert!(ensure_can_mutate(&auth).is_ok());
    assert!(ensure_can_view_student(&auth, 1).is_ok());
    assert!(ensure_can_view_student(&auth, 999).is_ok());
}

#[test]
fn test_student_cannot_mutate_even_own_records() {
    let auth = AuthUser::new(5, Role::Student);

    assert!(matches!(
        ensure_can_mutate(&auth),
        Err(AppError::Forbidden(_))
    ));
}

#[test]
fn test_student_scoped_to_own_records() {
    let auth = AuthUser::new(5, Role::Student);

    assert!(ensure_can_view_student(&auth, 5).is_ok());
    assert!(matches!(
        ensure_can_view_student(&auth, 6),
        Err(AppError::Forbidden(_))
    ));
}
