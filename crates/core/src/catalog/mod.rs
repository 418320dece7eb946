//! Product definition rules.
//!
//! A product draft is validated here before the catalog repository writes it.

pub mod error;

pub use error::CatalogError;

use serde::{Deserialize, Serialize};

/// Longest accepted product name or category.
pub const MAX_FIELD_LEN: usize = 100;

/// Fields supplied when creating or editing a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Product name.
    pub name: String,
    /// Product category.
    pub category: String,
    /// Reorder threshold. Stock strictly below this is low.
    pub min_stock: i32,
}

/// A draft that passed validation, with text fields trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProduct {
    /// Trimmed product name.
    pub name: String,
    /// Trimmed product category.
    pub category: String,
    /// Reorder threshold, never negative.
    pub min_stock: i32,
}

impl ProductDraft {
    /// Creates a draft.
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>, min_stock: i32) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            min_stock,
        }
    }

    /// Validates the draft.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the name or category is blank or too long,
    /// or if `min_stock` is negative.
    pub fn validate(&self) -> Result<ValidProduct, CatalogError> {
        let name = self.name.trim();
        let category = self.category.trim();

        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if category.is_empty() {
            return Err(CatalogError::EmptyCategory);
        }
        if name.chars().count() > MAX_FIELD_LEN {
            return Err(CatalogError::FieldTooLong("name"));
        }
        if category.chars().count() > MAX_FIELD_LEN {
            return Err(CatalogError::FieldTooLong("category"));
        }
        if self.min_stock < 0 {
            return Err(CatalogError::NegativeMinStock(self.min_stock));
        }

        Ok(ValidProduct {
            name: name.to_string(),
            category: category.to_string(),
            min_stock: self.min_stock,
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_valid_draft_is_trimmed() {
        let valid = ProductDraft::new("  Widget ", "Hardware\t", 10)
            .validate()
            .unwrap();

        assert_eq!(valid.name, "Widget");
        assert_eq!(valid.category, "Hardware");
        assert_eq!(valid.min_stock, 10);
    }

    #[test]
    fn test_zero_threshold_allowed() {
        assert!(ProductDraft::new("Widget", "Hardware", 0).validate().is_ok());
    }

    #[rstest]
    #[case(ProductDraft::new("", "Hardware", 1), CatalogError::EmptyName)]
    #[case(ProductDraft::new("   ", "Hardware", 1), CatalogError::EmptyName)]
    #[case(ProductDraft::new("Widget", "", 1), CatalogError::EmptyCategory)]
    #[case(ProductDraft::new("Widget", "Hardware", -1), CatalogError::NegativeMinStock(-1))]
    #[case(ProductDraft::new("x".repeat(101), "Hardware", 1), CatalogError::FieldTooLong("name"))]
    fn test_invalid_drafts(#[case] draft: ProductDraft, #[case] expected: CatalogError) {
        assert_eq!(draft.validate().unwrap_err(), expected);
    }
}
