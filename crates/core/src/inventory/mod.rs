//! Inventory ledger rules.
//!
//! This module holds the arithmetic behind every stock change:
//! - Movement types and validated movements
//! - Applying a movement to a quantity (reject, never clamp)
//! - The low-stock predicate and report status
//!
//! Persistence and locking live in the database crate; it calls
//! [`Movement::apply`] while holding the inventory row lock.

pub mod error;
pub mod movement;
pub mod stock;

#[cfg(test)]
mod props;

pub use error::InventoryError;
pub use movement::{Movement, MovementType};
pub use stock::{StockStatus, is_low_stock};
