//! Catalog error types.

use stockroom_shared::AppError;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while defining or looking up products.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Product name is blank.
    #[error("Product name must not be empty")]
    EmptyName,

    /// Category is blank.
    #[error("Product category must not be empty")]
    EmptyCategory,

    /// A text field exceeds the column width.
    #[error("Product {0} is too long")]
    FieldTooLong(&'static str),

    /// Reorder threshold is negative.
    #[error("Minimum stock cannot be negative: {0}")]
    NegativeMinStock(i32),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),
}

impl CatalogError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "EMPTY_NAME",
            Self::EmptyCategory => "EMPTY_CATEGORY",
            Self::FieldTooLong(_) => "FIELD_TOO_LONG",
            Self::NegativeMinStock(_) => "NEGATIVE_MIN_STOCK",
            Self::ProductNotFound(_) => "PRODUCT_NOT_FOUND",
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::ProductNotFound(_) => Self::NotFound(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
