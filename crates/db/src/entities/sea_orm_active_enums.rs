//! String-backed enums stored in entity columns.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Stored user role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Catalog administrator.
    #[sea_orm(string_value = "admin")]
    Admin,
    /// Inventory manager.
    #[sea_orm(string_value = "manager")]
    Manager,
    /// Warehouse staff.
    #[sea_orm(string_value = "staff")]
    Staff,
}

impl From<UserRole> for stockroom_core::auth::UserRole {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => Self::Admin,
            UserRole::Manager => Self::Manager,
            UserRole::Staff => Self::Staff,
        }
    }
}

impl From<stockroom_core::auth::UserRole> for UserRole {
    fn from(role: stockroom_core::auth::UserRole) -> Self {
        match role {
            stockroom_core::auth::UserRole::Admin => Self::Admin,
            stockroom_core::auth::UserRole::Manager => Self::Manager,
            stockroom_core::auth::UserRole::Staff => Self::Staff,
        }
    }
}

/// Stored movement type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
#[serde(rename_all = "UPPERCASE")]
pub enum MovementType {
    /// Stock received.
    #[sea_orm(string_value = "IN")]
    In,
    /// Stock issued.
    #[sea_orm(string_value = "OUT")]
    Out,
}

impl From<MovementType> for stockroom_core::inventory::MovementType {
    fn from(kind: MovementType) -> Self {
        match kind {
            MovementType::In => Self::In,
            MovementType::Out => Self::Out,
        }
    }
}

impl From<stockroom_core::inventory::MovementType> for MovementType {
    fn from(kind: stockroom_core::inventory::MovementType) -> Self {
        match kind {
            stockroom_core::inventory::MovementType::In => Self::In,
            stockroom_core::inventory::MovementType::Out => Self::Out,
        }
    }
}
