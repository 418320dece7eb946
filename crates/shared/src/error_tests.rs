use rstest::rstest;

use super::*;

#[rstest]
#[case(AppError::Unauthorized("test".into()), 401, "UNAUTHORIZED")]
#[case(AppError::Forbidden("test".into()), 403, "FORBIDDEN")]
#[case(AppError::NotFound("test".into()), 404, "NOT_FOUND")]
#[case(AppError::Validation("test".into()), 400, "VALIDATION_ERROR")]
#[case(AppError::InsufficientStock("test".into()), 422, "INSUFFICIENT_STOCK")]
#[case(AppError::Database("test".into()), 500, "DATABASE_ERROR")]
#[case(AppError::Internal("test".into()), 500, "INTERNAL_ERROR")]
fn test_status_and_code(#[case] error: AppError, #[case] status: u16, #[case] code: &str) {
    assert_eq!(error.status_code(), status);
    assert_eq!(error.error_code(), code);
}

#[test]
fn test_error_display() {
    assert_eq!(
        AppError::Unauthorized("msg".into()).to_string(),
        "Authentication failed: msg"
    );
    assert_eq!(
        AppError::Forbidden("msg".into()).to_string(),
        "Access denied: msg"
    );
    assert_eq!(
        AppError::NotFound("msg".into()).to_string(),
        "Not found: msg"
    );
    assert_eq!(
        AppError::InsufficientStock("msg".into()).to_string(),
        "Insufficient stock: msg"
    );
}

#[test]
fn test_only_server_failures_are_internal() {
    assert!(AppError::Database("x".into()).is_internal());
    assert!(AppError::Internal("x".into()).is_internal());
    assert!(!AppError::Validation("x".into()).is_internal());
    assert!(!AppError::InsufficientStock("x".into()).is_internal());
}
