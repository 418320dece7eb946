//! Report repository for read-only stock views.

use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use stockroom_core::inventory::MovementType;
use stockroom_core::reports::{
    MovementCounts, MovementSummary, ReportError, ReportService, StockLevel, StockReportRow,
    TransactionRecord,
};
use stockroom_shared::AppError;
use uuid::Uuid;

use crate::entities::{inventory, products, sea_orm_active_enums, stock_transactions};

/// Error types for report operations.
#[derive(Debug, thiserror::Error)]
pub enum ReportRepoError {
    /// Report shaping failed.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ReportRepoError> for AppError {
    fn from(err: ReportRepoError) -> Self {
        match err {
            ReportRepoError::Report(e) => e.into(),
            ReportRepoError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Filters for the transaction history.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionHistoryFilter {
    /// Only this product.
    pub product_id: Option<Uuid>,
    /// Only this movement type.
    pub movement_type: Option<MovementType>,
    /// At most this many rows.
    pub limit: Option<u64>,
}

/// Report repository.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads every product with its quantity, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn stock_levels(&self) -> Result<Vec<StockLevel>, ReportRepoError> {
        Ok(load_stock_levels(&self.db).await?)
    }

    /// Builds the stock report.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn stock_report(&self) -> Result<Vec<StockReportRow>, ReportRepoError> {
        let levels = self.stock_levels().await?;
        Ok(ReportService::stock_report(levels))
    }

    /// Names of products whose stock is below their minimum.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn low_stock_report(&self) -> Result<Vec<String>, ReportRepoError> {
        let rows = self.stock_report().await?;
        Ok(ReportService::low_stock(&rows))
    }

    /// Logged transactions, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn transaction_history(
        &self,
        filter: TransactionHistoryFilter,
    ) -> Result<Vec<TransactionRecord>, ReportRepoError> {
        let mut query = stock_transactions::Entity::find()
            .find_also_related(products::Entity)
            .order_by_desc(stock_transactions::Column::CreatedAt)
            .order_by_desc(stock_transactions::Column::Id);

        if let Some(product_id) = filter.product_id {
            query = query.filter(stock_transactions::Column::ProductId.eq(product_id));
        }
        if let Some(movement_type) = filter.movement_type {
            let movement_type: sea_orm_active_enums::MovementType = movement_type.into();
            query = query.filter(stock_transactions::Column::MovementType.eq(movement_type));
        }
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        let rows = query.all(&self.db).await?;

        Ok(rows
            .into_iter()
            .map(|(tx, product)| TransactionRecord {
                id: tx.id,
                product_id: tx.product_id,
                product_name: product.map(|p| p.name).unwrap_or_default(),
                change: tx.change,
                movement_type: tx.movement_type.into(),
                user_id: tx.user_id,
                username: tx.username,
                created_at: tx.created_at,
            })
            .collect())
    }

    /// Movement counts and current quantities from one consistent snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn movement_summary(&self) -> Result<MovementSummary, ReportRepoError> {
        let txn = self.db.begin().await?;

        let in_count = count_movements(&txn, sea_orm_active_enums::MovementType::In).await?;
        let out_count = count_movements(&txn, sea_orm_active_enums::MovementType::Out).await?;
        let levels = load_stock_levels(&txn).await?;

        txn.commit().await?;

        Ok(ReportService::movement_summary(
            MovementCounts {
                in_count,
                out_count,
            },
            &levels,
        ))
    }

    /// Renders the stock report as CSV.
    ///
    /// # Errors
    ///
    /// Returns an error if the query or CSV encoding fails.
    pub async fn export_stock_csv(&self) -> Result<String, ReportRepoError> {
        let rows = self.stock_report().await?;
        Ok(ReportService::export_stock_csv(&rows)?)
    }
}

async fn load_stock_levels<C: ConnectionTrait>(conn: &C) -> Result<Vec<StockLevel>, DbErr> {
    let rows = products::Entity::find()
        .find_also_related(inventory::Entity)
        .order_by_asc(products::Column::Name)
        .order_by_asc(products::Column::Id)
        .all(conn)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(product, stock)| StockLevel {
            product_id: product.id,
            name: product.name,
            category: product.category,
            quantity: stock.map_or(0, |s| s.quantity),
            min_stock: product.min_stock,
        })
        .collect())
}

async fn count_movements<C: ConnectionTrait>(
    conn: &C,
    movement_type: sea_orm_active_enums::MovementType,
) -> Result<u64, DbErr> {
    stock_transactions::Entity::find()
        .filter(stock_transactions::Column::MovementType.eq(movement_type))
        .count(conn)
        .await
}
