//! Shared setup for repository integration tests.
//!
//! Each test gets a private in-memory SQLite database with the real
//! migrations applied. The pool holds exactly one connection so the
//! database lives as long as the pool does.

#![allow(dead_code)]

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use stockroom_core::auth::{Actor, UserRole};
use stockroom_core::catalog::ProductDraft;
use stockroom_core::inventory::Movement;
use stockroom_db::migration::Migrator;
use stockroom_db::repositories::ProductWithStock;
use stockroom_db::{InventoryRepository, ProductRepository, UserRepository};
use stockroom_shared::DatabaseConfig;

pub async fn setup_db() -> DatabaseConnection {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    let db = stockroom_db::connect_with(&config)
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

pub async fn create_actor(db: &DatabaseConnection, username: &str, role: UserRole) -> Actor {
    let user = UserRepository::new(db.clone())
        .create(username, "$argon2id$test_hash", role.into())
        .await
        .expect("Failed to create user");
    Actor::new(user.id, user.username, role)
}

pub async fn create_product(
    db: &DatabaseConnection,
    name: &str,
    category: &str,
    min_stock: i32,
) -> ProductWithStock {
    ProductRepository::new(db.clone())
        .create(&ProductDraft::new(name, category, min_stock))
        .await
        .expect("Failed to create product")
}

pub async fn stock_in(
    db: &DatabaseConnection,
    actor: &Actor,
    product: &ProductWithStock,
    qty: i64,
) -> i32 {
    let movement = Movement::inbound(qty).expect("valid quantity");
    InventoryRepository::new(db.clone())
        .record_movement(actor, product.product.id, movement)
        .await
        .expect("IN movement should succeed")
        .quantity
}
