//! Inventory repository: the stock movement ledger.
//!
//! Every movement reads the product's inventory row under an exclusive row
//! lock, applies the movement, writes the new quantity, and appends the
//! transaction log entry, all inside one database transaction. Concurrent
//! movements on the same product queue on the lock instead of interleaving
//! their check and update.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QuerySelect, Set, TransactionTrait,
};
use serde::Serialize;
use stockroom_core::auth::Actor;
use stockroom_core::inventory::{InventoryError, Movement, is_low_stock};
use stockroom_shared::AppError;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::entities::{inventory, products, stock_transactions};

/// Error types for ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerRepoError {
    /// Movement rejected by the inventory rules.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<LedgerRepoError> for AppError {
    fn from(err: LedgerRepoError) -> Self {
        match err {
            LedgerRepoError::Inventory(e) => e.into(),
            LedgerRepoError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Result of a committed movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovementRecord {
    /// The appended log entry.
    pub transaction: stock_transactions::Model,
    /// Quantity on hand after the movement.
    pub quantity: i32,
}

/// Inventory repository.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    db: DatabaseConnection,
}

impl InventoryRepository {
    /// Creates a new inventory repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies a stock movement on behalf of `actor`.
    ///
    /// # Errors
    ///
    /// - `InventoryError::ProductNotFound` if the product does not exist
    /// - `InventoryError::InsufficientStock` if an OUT exceeds the quantity on hand
    /// - `InventoryError::QuantityOverflow` if an IN would overflow the column
    ///
    /// A rejected movement writes nothing.
    pub async fn record_movement(
        &self,
        actor: &Actor,
        product_id: Uuid,
        movement: Movement,
    ) -> Result<MovementRecord, LedgerRepoError> {
        let txn = self.db.begin().await?;

        let stock = inventory::Entity::find()
            .filter(inventory::Column::ProductId.eq(product_id))
            .lock_exclusive()
            .one(&txn)
            .await?;

        let Some(stock) = stock else {
            let exists = products::Entity::find_by_id(product_id)
                .one(&txn)
                .await?
                .is_some();
            txn.rollback().await?;
            if exists {
                error!(product_id = %product_id, "product has no inventory row");
                return Err(InventoryError::InventoryMissing(product_id).into());
            }
            return Err(InventoryError::ProductNotFound(product_id).into());
        };

        let quantity = match movement.apply(stock.quantity) {
            Ok(quantity) => quantity,
            Err(e) => {
                warn!(
                    product_id = %product_id,
                    user_id = %actor.user_id,
                    movement = %movement.movement_type(),
                    requested = movement.quantity(),
                    available = stock.quantity,
                    "movement rejected: {e}"
                );
                txn.rollback().await?;
                return Err(e.into());
            }
        };

        let now: sea_orm::prelude::DateTimeWithTimeZone = chrono::Utc::now().into();

        let mut active: inventory::ActiveModel = stock.into();
        active.quantity = Set(quantity);
        active.updated_at = Set(now);
        let stock = active.update(&txn).await?;

        let transaction = stock_transactions::ActiveModel {
            id: Set(Uuid::now_v7()),
            product_id: Set(product_id),
            change: Set(movement.signed_change()),
            movement_type: Set(movement.movement_type().into()),
            user_id: Set(actor.user_id),
            username: Set(actor.username.clone()),
            created_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!(
            product_id = %product_id,
            user_id = %actor.user_id,
            change = transaction.change,
            quantity = stock.quantity,
            "stock movement recorded"
        );

        Ok(MovementRecord {
            transaction,
            quantity: stock.quantity,
        })
    }

    /// Returns the quantity on hand for a product.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::ProductNotFound` if there is no inventory row.
    pub async fn quantity(&self, product_id: Uuid) -> Result<i32, LedgerRepoError> {
        inventory::Entity::find()
            .filter(inventory::Column::ProductId.eq(product_id))
            .one(&self.db)
            .await?
            .map(|s| s.quantity)
            .ok_or_else(|| InventoryError::ProductNotFound(product_id).into())
    }

    /// Returns whether a product is below its minimum stock.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::ProductNotFound` for an unknown product.
    pub async fn is_low_stock(&self, product_id: Uuid) -> Result<bool, LedgerRepoError> {
        let (product, stock) = products::Entity::find_by_id(product_id)
            .find_also_related(inventory::Entity)
            .one(&self.db)
            .await?
            .ok_or(InventoryError::ProductNotFound(product_id))?;

        Ok(is_low_stock(
            stock.map_or(0, |s| s.quantity),
            product.min_stock,
        ))
    }
}
