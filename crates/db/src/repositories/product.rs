//! Product repository for catalog maintenance.
//!
//! A product and its inventory row are created together and deleted together;
//! both paths run inside a single database transaction.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::Serialize;
use stockroom_core::catalog::{CatalogError, ProductDraft};
use stockroom_core::inventory::is_low_stock;
use stockroom_shared::AppError;
use tracing::{error, info};
use uuid::Uuid;

use crate::entities::{inventory, products, stock_transactions};

/// Error types for catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogRepoError {
    /// Validation failure or unknown product.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<CatalogRepoError> for AppError {
    fn from(err: CatalogRepoError) -> Self {
        match err {
            CatalogRepoError::Catalog(e) => e.into(),
            CatalogRepoError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// A product together with its quantity on hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductWithStock {
    /// The product record.
    #[serde(flatten)]
    pub product: products::Model,
    /// Quantity on hand.
    pub quantity: i32,
}

impl ProductWithStock {
    /// Returns true when the quantity is strictly below the product minimum.
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        is_low_stock(self.quantity, self.product.min_stock)
    }
}

/// Product repository.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db: DatabaseConnection,
}

impl ProductRepository {
    /// Creates a new product repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a product and its inventory row at quantity zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft is invalid or the insert fails. Nothing
    /// is written on failure.
    pub async fn create(&self, draft: &ProductDraft) -> Result<ProductWithStock, CatalogRepoError> {
        let valid = draft.validate()?;

        let txn = self.db.begin().await?;
        let now = chrono::Utc::now().into();
        let product_id = Uuid::now_v7();

        let product = products::ActiveModel {
            id: Set(product_id),
            name: Set(valid.name),
            category: Set(valid.category),
            min_stock: Set(valid.min_stock),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        let stock = inventory::ActiveModel {
            id: Set(Uuid::now_v7()),
            product_id: Set(product_id),
            quantity: Set(0),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!(product_id = %product.id, name = %product.name, "product created");

        Ok(ProductWithStock {
            product,
            quantity: stock.quantity,
        })
    }

    /// Overwrites a product's name, category, and minimum stock.
    ///
    /// The quantity on hand is not touched.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ProductNotFound` for an unknown ID, or a
    /// validation error for an invalid draft.
    pub async fn update(
        &self,
        id: Uuid,
        draft: &ProductDraft,
    ) -> Result<ProductWithStock, CatalogRepoError> {
        let valid = draft.validate()?;

        let txn = self.db.begin().await?;

        let (product, stock) = products::Entity::find_by_id(id)
            .find_also_related(inventory::Entity)
            .one(&txn)
            .await?
            .ok_or(CatalogError::ProductNotFound(id))?;

        let mut active: products::ActiveModel = product.into();
        active.name = Set(valid.name);
        active.category = Set(valid.category);
        active.min_stock = Set(valid.min_stock);
        active.updated_at = Set(chrono::Utc::now().into());
        let product = active.update(&txn).await?;

        txn.commit().await?;

        info!(product_id = %id, "product updated");

        Ok(ProductWithStock {
            product,
            quantity: stock.map_or(0, |s| s.quantity),
        })
    }

    /// Deletes a product with its inventory row and transaction history.
    ///
    /// Returns the number of transaction rows removed.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ProductNotFound` for an unknown ID.
    pub async fn delete(&self, id: Uuid) -> Result<u64, CatalogRepoError> {
        let txn = self.db.begin().await?;

        let product = products::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(CatalogError::ProductNotFound(id))?;

        // Inventory first: a movement in flight holds this row.
        inventory::Entity::delete_many()
            .filter(inventory::Column::ProductId.eq(id))
            .exec(&txn)
            .await?;

        let removed = stock_transactions::Entity::delete_many()
            .filter(stock_transactions::Column::ProductId.eq(id))
            .exec(&txn)
            .await?
            .rows_affected;

        product.delete(&txn).await?;

        if let Err(e) = txn.commit().await {
            error!(product_id = %id, error = %e, "failed to commit product delete");
            return Err(e.into());
        }

        info!(product_id = %id, transactions_removed = removed, "product deleted");

        Ok(removed)
    }

    /// Finds a product with its quantity.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ProductNotFound` for an unknown ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<ProductWithStock, CatalogRepoError> {
        let (product, stock) = products::Entity::find_by_id(id)
            .find_also_related(inventory::Entity)
            .one(&self.db)
            .await?
            .ok_or(CatalogError::ProductNotFound(id))?;

        Ok(ProductWithStock {
            product,
            quantity: stock.map_or(0, |s| s.quantity),
        })
    }

    /// Lists every product with its quantity, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<ProductWithStock>, CatalogRepoError> {
        let rows = products::Entity::find()
            .find_also_related(inventory::Entity)
            .order_by_asc(products::Column::CreatedAt)
            .order_by_asc(products::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(product, stock)| ProductWithStock {
                product,
                quantity: stock.map_or(0, |s| s.quantity),
            })
            .collect())
    }
}
