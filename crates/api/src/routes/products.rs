//! Product catalog routes. Admin only.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use stockroom_core::auth::Operation;
use stockroom_core::catalog::ProductDraft;
use stockroom_db::{ProductRepository, repositories::ProductWithStock};
use uuid::Uuid;

use crate::{AppState, errors::ApiError, extract::JsonBody, middleware::auth::AuthUser};

/// Creates the product router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Product with its current stock.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    /// Product ID.
    pub id: Uuid,
    /// Product name.
    pub name: String,
    /// Product category.
    pub category: String,
    /// Reorder threshold.
    pub min_stock: i32,
    /// Quantity on hand.
    pub quantity: i32,
    /// Whether the quantity is below the threshold.
    pub low_stock: bool,
    /// Creation timestamp.
    pub created_at: DateTime<FixedOffset>,
    /// Last update timestamp.
    pub updated_at: DateTime<FixedOffset>,
}

impl From<ProductWithStock> for ProductResponse {
    fn from(p: ProductWithStock) -> Self {
        let low_stock = p.is_low_stock();
        Self {
            id: p.product.id,
            name: p.product.name,
            category: p.product.category,
            min_stock: p.product.min_stock,
            quantity: p.quantity,
            low_stock,
            created_at: p.product.created_at,
            updated_at: p.product.updated_at,
        }
    }
}

/// Response for a deleted product.
#[derive(Debug, Serialize)]
pub struct DeleteProductResponse {
    /// Deleted product ID.
    pub id: Uuid,
    /// Number of logged transactions removed with it.
    pub transactions_removed: u64,
}

/// GET /products - List all products with quantities.
async fn list_products(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    user.require(Operation::ManageCatalog)?;

    let products = ProductRepository::new((*state.db).clone()).list().await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// POST /products - Create a product with an empty inventory row.
async fn create_product(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(payload): JsonBody<ProductDraft>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    user.require(Operation::ManageCatalog)?;

    let product = ProductRepository::new((*state.db).clone())
        .create(&payload)
        .await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

/// GET /products/{id} - Fetch one product.
async fn get_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductResponse>, ApiError> {
    user.require(Operation::ManageCatalog)?;

    let product = ProductRepository::new((*state.db).clone())
        .find_by_id(id)
        .await?;
    Ok(Json(product.into()))
}

/// PUT /products/{id} - Edit a product's definition.
async fn update_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    JsonBody(payload): JsonBody<ProductDraft>,
) -> Result<Json<ProductResponse>, ApiError> {
    user.require(Operation::ManageCatalog)?;

    let product = ProductRepository::new((*state.db).clone())
        .update(id, &payload)
        .await?;
    Ok(Json(product.into()))
}

/// DELETE /products/{id} - Delete a product and its history.
async fn delete_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteProductResponse>, ApiError> {
    user.require(Operation::ManageCatalog)?;

    let transactions_removed = ProductRepository::new((*state.db).clone())
        .delete(id)
        .await?;
    Ok(Json(DeleteProductResponse {
        id,
        transactions_removed,
    }))
}
