//! `SeaORM` entity definitions.

pub mod inventory;
pub mod products;
pub mod sea_orm_active_enums;
pub mod stock_transactions;
pub mod users;
