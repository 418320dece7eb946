//! Integration tests for the stock movement ledger.

mod common;

use sea_orm::{EntityTrait, PaginatorTrait};
use stockroom_core::auth::UserRole;
use stockroom_core::inventory::{InventoryError, Movement};
use stockroom_db::entities::{sea_orm_active_enums::MovementType, stock_transactions};
use stockroom_db::repositories::LedgerRepoError;
use stockroom_db::{InventoryRepository, ProductRepository};
use stockroom_shared::AppError;
use uuid::Uuid;

use common::{create_actor, create_product, setup_db};

#[tokio::test]
async fn test_widget_scenario() {
    let db = setup_db().await;
    let actor = create_actor(&db, "manager", UserRole::Manager).await;
    let widget = create_product(&db, "Widget", "Hardware", 10).await;
    let id = widget.product.id;
    let repo = InventoryRepository::new(db.clone());

    let first = repo
        .record_movement(&actor, id, Movement::inbound(5).expect("valid"))
        .await
        .expect("IN 5");
    assert_eq!(first.quantity, 5);
    assert!(repo.is_low_stock(id).await.expect("low check"));

    let second = repo
        .record_movement(&actor, id, Movement::inbound(10).expect("valid"))
        .await
        .expect("IN 10");
    assert_eq!(second.quantity, 15);
    assert!(!repo.is_low_stock(id).await.expect("low check"));

    let err = repo
        .record_movement(&actor, id, Movement::outbound(20).expect("valid"))
        .await
        .expect_err("OUT 20 must be rejected");
    assert!(matches!(
        err,
        LedgerRepoError::Inventory(InventoryError::InsufficientStock {
            available: 15,
            requested: 20
        })
    ));
    assert_eq!(repo.quantity(id).await.expect("quantity"), 15);
}

#[tokio::test]
async fn test_movement_records_signed_change_and_actor() {
    let db = setup_db().await;
    let actor = create_actor(&db, "alice", UserRole::Staff).await;
    let widget = create_product(&db, "Widget", "Hardware", 0).await;
    let repo = InventoryRepository::new(db.clone());

    repo.record_movement(&actor, widget.product.id, Movement::inbound(8).expect("valid"))
        .await
        .expect("IN");
    let out = repo
        .record_movement(&actor, widget.product.id, Movement::outbound(3).expect("valid"))
        .await
        .expect("OUT");

    assert_eq!(out.quantity, 5);
    assert_eq!(out.transaction.change, -3);
    assert_eq!(out.transaction.movement_type, MovementType::Out);
    assert_eq!(out.transaction.user_id, actor.user_id);
    assert_eq!(out.transaction.username, "alice");
    assert_eq!(out.transaction.product_id, widget.product.id);
}

#[tokio::test]
async fn test_rejected_out_leaves_log_unchanged() {
    let db = setup_db().await;
    let actor = create_actor(&db, "staff", UserRole::Staff).await;
    let widget = create_product(&db, "Widget", "Hardware", 1).await;
    let repo = InventoryRepository::new(db.clone());

    repo.record_movement(&actor, widget.product.id, Movement::inbound(2).expect("valid"))
        .await
        .expect("IN");
    let before = stock_transactions::Entity::find()
        .count(&db)
        .await
        .expect("count");

    let err = repo
        .record_movement(&actor, widget.product.id, Movement::outbound(3).expect("valid"))
        .await
        .expect_err("insufficient");

    let app: AppError = err.into();
    assert_eq!(app.status_code(), 422);

    let after = stock_transactions::Entity::find()
        .count(&db)
        .await
        .expect("count");
    assert_eq!(before, after);
    assert_eq!(repo.quantity(widget.product.id).await.expect("quantity"), 2);
}

#[tokio::test]
async fn test_out_of_exact_quantity_empties_stock() {
    let db = setup_db().await;
    let actor = create_actor(&db, "staff", UserRole::Staff).await;
    let widget = create_product(&db, "Widget", "Hardware", 1).await;
    let repo = InventoryRepository::new(db.clone());

    repo.record_movement(&actor, widget.product.id, Movement::inbound(4).expect("valid"))
        .await
        .expect("IN");
    let record = repo
        .record_movement(&actor, widget.product.id, Movement::outbound(4).expect("valid"))
        .await
        .expect("OUT all");

    assert_eq!(record.quantity, 0);
}

#[tokio::test]
async fn test_movement_on_unknown_product_is_not_found() {
    let db = setup_db().await;
    let actor = create_actor(&db, "staff", UserRole::Staff).await;
    let missing = Uuid::now_v7();

    let err = InventoryRepository::new(db.clone())
        .record_movement(&actor, missing, Movement::inbound(1).expect("valid"))
        .await
        .expect_err("unknown product");

    assert!(matches!(
        err,
        LedgerRepoError::Inventory(InventoryError::ProductNotFound(id)) if id == missing
    ));
    let app: AppError = err.into();
    assert_eq!(app.status_code(), 404);
}

#[tokio::test]
async fn test_movement_after_delete_is_not_found() {
    let db = setup_db().await;
    let actor = create_actor(&db, "staff", UserRole::Staff).await;
    let widget = create_product(&db, "Widget", "Hardware", 1).await;
    ProductRepository::new(db.clone())
        .delete(widget.product.id)
        .await
        .expect("delete");

    let err = InventoryRepository::new(db.clone())
        .record_movement(&actor, widget.product.id, Movement::inbound(1).expect("valid"))
        .await
        .expect_err("deleted product");

    assert!(matches!(
        err,
        LedgerRepoError::Inventory(InventoryError::ProductNotFound(_))
    ));
}

#[tokio::test]
async fn test_inbound_overflow_is_rejected() {
    let db = setup_db().await;
    let actor = create_actor(&db, "staff", UserRole::Staff).await;
    let widget = create_product(&db, "Widget", "Hardware", 1).await;
    let repo = InventoryRepository::new(db.clone());

    repo.record_movement(
        &actor,
        widget.product.id,
        Movement::inbound(i64::from(i32::MAX)).expect("valid"),
    )
    .await
    .expect("IN max");

    let err = repo
        .record_movement(&actor, widget.product.id, Movement::inbound(1).expect("valid"))
        .await
        .expect_err("overflow");

    assert!(matches!(
        err,
        LedgerRepoError::Inventory(InventoryError::QuantityOverflow { .. })
    ));
    assert_eq!(
        repo.quantity(widget.product.id).await.expect("quantity"),
        i32::MAX
    );
}
