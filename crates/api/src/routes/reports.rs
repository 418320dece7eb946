//! Read-only report routes: dashboard, stock report, CSV export, history, analytics.

use axum::{
    Json, Router,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};
use stockroom_core::auth::Operation;
use stockroom_core::inventory::MovementType;
use stockroom_core::reports::{MovementSummary, StockReportRow, TransactionRecord};
use stockroom_db::{ReportRepository, repositories::TransactionHistoryFilter};
use uuid::Uuid;

use crate::{AppState, errors::ApiError, extract::QueryParams, middleware::auth::AuthUser};

/// Filename offered for the CSV download.
pub const STOCK_CSV_FILENAME: &str = "stock_report.csv";

/// Creates the reports router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/stock", get(stock_report))
        .route("/stock/export", get(export_stock))
        .route("/transactions", get(transaction_history))
        .route("/analytics", get(analytics))
}

/// Dashboard response.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// Caller's username.
    pub username: String,
    /// Caller's role.
    pub role: String,
    /// Names of products below their minimum stock.
    pub low_stock: Vec<String>,
}

/// Query parameters for the transaction history.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    /// Only this product.
    pub product_id: Option<Uuid>,
    /// Only `IN` or `OUT`.
    pub movement_type: Option<String>,
    /// At most this many rows.
    pub limit: Option<u64>,
}

/// GET /dashboard - Low stock alerts for the signed-in caller.
async fn dashboard(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<DashboardResponse>, ApiError> {
    let actor = user.require(Operation::ViewStock)?;

    let low_stock = ReportRepository::new((*state.db).clone())
        .low_stock_report()
        .await?;

    Ok(Json(DashboardResponse {
        username: actor.username.clone(),
        role: actor.role.to_string(),
        low_stock,
    }))
}

/// GET /stock - Stock report with LOW/OK status per product.
async fn stock_report(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<StockReportRow>>, ApiError> {
    user.require(Operation::ViewStock)?;

    let rows = ReportRepository::new((*state.db).clone())
        .stock_report()
        .await?;
    Ok(Json(rows))
}

/// GET /stock/export - Stock report as a CSV download.
async fn export_stock(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    user.require(Operation::ViewStock)?;

    let csv = ReportRepository::new((*state.db).clone())
        .export_stock_csv()
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{STOCK_CSV_FILENAME}\""),
            ),
        ],
        csv,
    ))
}

/// GET /transactions - Logged movements, newest first.
async fn transaction_history(
    State(state): State<AppState>,
    user: AuthUser,
    QueryParams(query): QueryParams<HistoryQuery>,
) -> Result<Json<Vec<TransactionRecord>>, ApiError> {
    user.require(Operation::ViewTransactions)?;

    let movement_type = query
        .movement_type
        .as_deref()
        .map(str::parse::<MovementType>)
        .transpose()?;

    let records = ReportRepository::new((*state.db).clone())
        .transaction_history(TransactionHistoryFilter {
            product_id: query.product_id,
            movement_type,
            limit: query.limit,
        })
        .await?;
    Ok(Json(records))
}

/// GET /analytics - Movement counts and stock levels for charting.
async fn analytics(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<MovementSummary>, ApiError> {
    user.require(Operation::ViewAnalytics)?;

    let summary = ReportRepository::new((*state.db).clone())
        .movement_summary()
        .await?;
    Ok(Json(summary))
}
