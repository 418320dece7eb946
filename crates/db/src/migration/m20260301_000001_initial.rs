//! Initial database migration.
//!
//! Creates the users, products, inventory, and stock_transactions tables.
//! Built with the schema builder so the same migration runs on PostgreSQL
//! and on the SQLite databases used in tests.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Users::Username)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string_len(255).not_null())
                    .col(ColumnDef::new(Users::Role).string_len(16).not_null())
                    .col(timestamp(Users::CreatedAt))
                    .col(timestamp(Users::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Products::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Products::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Products::Category).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Products::MinStock)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Products::MinStock).gte(0)),
                    )
                    .col(timestamp(Products::CreatedAt))
                    .col(timestamp(Products::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Inventory::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Inventory::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Inventory::ProductId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Inventory::Quantity)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Inventory::Quantity).gte(0)),
                    )
                    .col(timestamp(Inventory::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_product")
                            .from(Inventory::Table, Inventory::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StockTransactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StockTransactions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StockTransactions::ProductId).uuid().not_null())
                    .col(
                        ColumnDef::new(StockTransactions::Change)
                            .integer()
                            .not_null()
                            .check(Expr::col(StockTransactions::Change).ne(0)),
                    )
                    .col(
                        ColumnDef::new(StockTransactions::MovementType)
                            .string_len(8)
                            .not_null(),
                    )
                    .col(ColumnDef::new(StockTransactions::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(StockTransactions::Username)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(timestamp(StockTransactions::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stock_transactions_product")
                            .from(StockTransactions::Table, StockTransactions::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stock_transactions_user")
                            .from(StockTransactions::Table, StockTransactions::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_stock_transactions_product")
                    .table(StockTransactions::Table)
                    .col(StockTransactions::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_stock_transactions_created_at")
                    .table(StockTransactions::Table)
                    .col(StockTransactions::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StockTransactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Inventory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

fn timestamp<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    PasswordHash,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Category,
    MinStock,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Inventory {
    Table,
    Id,
    ProductId,
    Quantity,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StockTransactions {
    Table,
    Id,
    ProductId,
    Change,
    MovementType,
    UserId,
    Username,
    CreatedAt,
}
