//! The low-stock predicate.

use serde::{Deserialize, Serialize};

/// Returns true iff `quantity` is strictly below `min_stock`.
#[must_use]
pub const fn is_low_stock(quantity: i32, min_stock: i32) -> bool {
    quantity < min_stock
}

/// Stock status shown in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StockStatus {
    /// Below the reorder threshold.
    Low,
    /// At or above the reorder threshold.
    Ok,
}

impl StockStatus {
    /// Status for a quantity against its threshold.
    #[must_use]
    pub const fn of(quantity: i32, min_stock: i32) -> Self {
        if is_low_stock(quantity, min_stock) {
            Self::Low
        } else {
            Self::Ok
        }
    }

    /// Returns `LOW` or `OK`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Ok => "OK",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 10, true)]
    #[case(5, 10, true)]
    #[case(9, 10, true)]
    #[case(10, 10, false)]
    #[case(15, 10, false)]
    #[case(0, 0, false)]
    fn test_is_low_stock(#[case] quantity: i32, #[case] min_stock: i32, #[case] low: bool) {
        assert_eq!(is_low_stock(quantity, min_stock), low);
        assert_eq!(
            StockStatus::of(quantity, min_stock),
            if low { StockStatus::Low } else { StockStatus::Ok }
        );
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(StockStatus::Low.to_string(), "LOW");
        assert_eq!(StockStatus::Ok.to_string(), "OK");
        assert_eq!(serde_json::to_string(&StockStatus::Low).unwrap(), "\"LOW\"");
    }
}
