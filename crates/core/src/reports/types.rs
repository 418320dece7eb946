//! Report data types.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::inventory::{MovementType, StockStatus};

/// A product with its current quantity, as read from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    /// Product ID.
    pub product_id: Uuid,
    /// Product name.
    pub name: String,
    /// Product category.
    pub category: String,
    /// Quantity on hand.
    pub quantity: i32,
    /// Reorder threshold.
    pub min_stock: i32,
}

/// One row of the stock report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockReportRow {
    /// Product ID.
    pub product_id: Uuid,
    /// Product name.
    pub name: String,
    /// Product category.
    pub category: String,
    /// Quantity on hand.
    pub quantity: i32,
    /// Reorder threshold.
    pub min_stock: i32,
    /// LOW or OK.
    pub status: StockStatus,
}

impl From<StockLevel> for StockReportRow {
    fn from(level: StockLevel) -> Self {
        let status = StockStatus::of(level.quantity, level.min_stock);
        Self {
            product_id: level.product_id,
            name: level.name,
            category: level.category,
            quantity: level.quantity,
            min_stock: level.min_stock,
            status,
        }
    }
}

/// Number of logged transactions per movement type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementCounts {
    /// IN transactions.
    pub in_count: u64,
    /// OUT transactions.
    pub out_count: u64,
}

/// Product name and quantity, for charting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuantity {
    /// Product name.
    pub name: String,
    /// Quantity on hand.
    pub quantity: i32,
}

/// Movement counts plus per-product stock levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementSummary {
    /// IN transactions.
    pub in_count: u64,
    /// OUT transactions.
    pub out_count: u64,
    /// Current quantity per product.
    pub stock_levels: Vec<ProductQuantity>,
}

/// A logged stock transaction joined with its product name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Transaction ID.
    pub id: Uuid,
    /// Product ID.
    pub product_id: Uuid,
    /// Product name.
    pub product_name: String,
    /// Signed change: positive for IN, negative for OUT.
    pub change: i32,
    /// Movement type.
    pub movement_type: MovementType,
    /// ID of the user who recorded it.
    pub user_id: Uuid,
    /// Username of the user who recorded it.
    pub username: String,
    /// Server timestamp.
    pub created_at: DateTime<FixedOffset>,
}
