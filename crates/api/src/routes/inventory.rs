//! Stock movement routes. Managers and staff.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use stockroom_core::auth::Operation;
use stockroom_core::inventory::{Movement, MovementType};
use stockroom_db::{InventoryRepository, ProductRepository};
use uuid::Uuid;

use crate::{
    AppState, errors::ApiError, extract::JsonBody, middleware::auth::AuthUser,
    routes::products::ProductResponse,
};

/// Creates the inventory router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/inventory", get(list_inventory))
        .route("/inventory/movements", post(record_movement))
}

/// Stock movement request.
#[derive(Debug, Deserialize)]
pub struct MovementRequest {
    /// Product to move.
    pub product_id: Uuid,
    /// Positive number of units.
    pub quantity: i64,
    /// `IN` or `OUT`, any case.
    pub movement_type: String,
}

/// Result of a recorded movement.
#[derive(Debug, Serialize)]
pub struct MovementResponse {
    /// Logged transaction ID.
    pub transaction_id: Uuid,
    /// Product moved.
    pub product_id: Uuid,
    /// Movement type.
    pub movement_type: MovementType,
    /// Signed change applied.
    pub change: i32,
    /// Quantity on hand afterwards.
    pub quantity: i32,
}

/// GET /inventory - Products with quantities, for picking a movement target.
async fn list_inventory(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    user.require(Operation::RecordMovement)?;

    let products = ProductRepository::new((*state.db).clone()).list().await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// POST /inventory/movements - Record a stock IN or OUT.
async fn record_movement(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(payload): JsonBody<MovementRequest>,
) -> Result<(StatusCode, Json<MovementResponse>), ApiError> {
    let actor = user.require(Operation::RecordMovement)?;

    let movement_type: MovementType = payload.movement_type.parse()?;
    let movement = Movement::new(payload.quantity, movement_type)?;

    let record = InventoryRepository::new((*state.db).clone())
        .record_movement(actor, payload.product_id, movement)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MovementResponse {
            transaction_id: record.transaction.id,
            product_id: record.transaction.product_id,
            movement_type,
            change: record.transaction.change,
            quantity: record.quantity,
        }),
    ))
}
