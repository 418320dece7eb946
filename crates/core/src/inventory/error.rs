//! Inventory error types.

use stockroom_shared::AppError;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while applying stock movements.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    /// Movement quantity was zero or negative.
    #[error("Movement quantity must be positive, got {0}")]
    NonPositiveQuantity(i64),

    /// Movement quantity does not fit the stock column.
    #[error("Movement quantity {0} is too large")]
    QuantityTooLarge(i64),

    /// Movement type was not IN or OUT.
    #[error("Movement type must be IN or OUT, got '{0}'")]
    InvalidMovementType(String),

    /// OUT movement exceeds the quantity on hand.
    #[error("Not enough stock: {available} available, {requested} requested")]
    InsufficientStock {
        /// Quantity on hand.
        available: i32,
        /// Quantity requested.
        requested: i32,
    },

    /// IN movement would push the quantity past the storable maximum.
    #[error("Stock quantity would overflow: {current} + {requested}")]
    QuantityOverflow {
        /// Quantity on hand.
        current: i32,
        /// Quantity requested.
        requested: i32,
    },

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),

    /// Product exists but has no inventory row.
    #[error("No inventory record for product {0}")]
    InventoryMissing(Uuid),
}

impl InventoryError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveQuantity(_) => "NON_POSITIVE_QUANTITY",
            Self::QuantityTooLarge(_) => "QUANTITY_TOO_LARGE",
            Self::InvalidMovementType(_) => "INVALID_MOVEMENT_TYPE",
            Self::InsufficientStock { .. } => "INSUFFICIENT_STOCK",
            Self::QuantityOverflow { .. } => "QUANTITY_OVERFLOW",
            Self::ProductNotFound(_) => "PRODUCT_NOT_FOUND",
            Self::InventoryMissing(_) => "INVENTORY_MISSING",
        }
    }
}

impl From<InventoryError> for AppError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::NonPositiveQuantity(_)
            | InventoryError::QuantityTooLarge(_)
            | InventoryError::InvalidMovementType(_)
            | InventoryError::QuantityOverflow { .. } => Self::Validation(err.to_string()),
            InventoryError::InsufficientStock { .. } => Self::InsufficientStock(err.to_string()),
            InventoryError::ProductNotFound(_) => Self::NotFound(err.to_string()),
            InventoryError::InventoryMissing(_) => Self::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_stock_maps_to_422() {
        let err = InventoryError::InsufficientStock {
            available: 15,
            requested: 20,
        };
        assert_eq!(err.error_code(), "INSUFFICIENT_STOCK");
        assert_eq!(err.to_string(), "Not enough stock: 15 available, 20 requested");
        assert_eq!(AppError::from(err).status_code(), 422);
    }

    #[test]
    fn test_app_error_mapping() {
        assert_eq!(
            AppError::from(InventoryError::NonPositiveQuantity(0)).status_code(),
            400
        );
        assert_eq!(
            AppError::from(InventoryError::ProductNotFound(Uuid::nil())).status_code(),
            404
        );
        assert_eq!(
            AppError::from(InventoryError::InventoryMissing(Uuid::nil())).status_code(),
            500
        );
    }
}
