//! Application-wide error types.

use thiserror::Error;

/// Application error types.
///
/// Every failure surfaced to a caller ends up here. None of them are fatal:
/// a failed operation leaves the stored state as it was.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or invalid credentials.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// The caller's role may not perform the operation.
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// Unknown product or user.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed quantity, threshold, name, or role.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An OUT movement asked for more than is on hand.
    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::InsufficientStock(_) => 422,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InsufficientStock(_) => "INSUFFICIENT_STOCK",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true for server-side failures whose detail should not leak to clients.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Internal(_))
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
