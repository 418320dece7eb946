//! Roles, operation-level authorization, and password hashing.
//!
//! Every entry point names the [`Operation`] it performs and checks it with
//! [`authorize`] before touching any state. The caller is always passed in
//! explicitly as an [`Actor`].

mod password;

pub use password::{PasswordError, hash_password, verify_dummy_password, verify_password};

use serde::{Deserialize, Serialize};
use stockroom_shared::AppError;
use thiserror::Error;
use uuid::Uuid;

/// User roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Maintains the product catalog; reads every report.
    Admin,
    /// Records stock movements; reads history and analytics.
    Manager,
    /// Records stock movements.
    Staff,
}

impl UserRole {
    /// All roles, in privilege order.
    pub const ALL: [Self; 3] = [Self::Admin, Self::Manager, Self::Staff];

    /// Returns the lowercase name used in tokens and storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Staff => "staff",
        }
    }

    /// Returns true if this role may perform `operation`.
    #[must_use]
    pub fn permits(&self, operation: Operation) -> bool {
        operation.allowed_roles().contains(self)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "staff" => Ok(Self::Staff),
            _ => Err(AccessError::UnknownRole(s.to_string())),
        }
    }
}

/// Operations gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Create, edit, delete, or list product definitions.
    ManageCatalog,
    /// Apply an IN or OUT movement.
    RecordMovement,
    /// Low-stock dashboard, stock report, and CSV export.
    ViewStock,
    /// Full transaction log.
    ViewTransactions,
    /// IN/OUT counts and stock levels.
    ViewAnalytics,
}

impl Operation {
    /// Roles allowed to perform this operation.
    #[must_use]
    pub const fn allowed_roles(self) -> &'static [UserRole] {
        match self {
            Self::ManageCatalog => &[UserRole::Admin],
            Self::RecordMovement => &[UserRole::Manager, UserRole::Staff],
            Self::ViewStock => &[UserRole::Admin, UserRole::Manager, UserRole::Staff],
            Self::ViewTransactions | Self::ViewAnalytics => &[UserRole::Admin, UserRole::Manager],
        }
    }

    /// Short name for logs and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ManageCatalog => "manage_catalog",
            Self::RecordMovement => "record_movement",
            Self::ViewStock => "view_stock",
            Self::ViewTransactions => "view_transactions",
            Self::ViewAnalytics => "view_analytics",
        }
    }
}

/// The authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// User ID.
    pub user_id: Uuid,
    /// Username, recorded on every stock transaction.
    pub username: String,
    /// Role the caller signed in with.
    pub role: UserRole,
}

impl Actor {
    /// Creates an actor.
    #[must_use]
    pub fn new(user_id: Uuid, username: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_id,
            username: username.into(),
            role,
        }
    }
}

/// Access errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    /// The role may not perform the operation.
    #[error("role '{role}' may not {operation}")]
    NotPermitted {
        /// Caller's role.
        role: UserRole,
        /// Operation name.
        operation: &'static str,
    },

    /// The role string is not one of admin, manager, staff.
    #[error("unknown role: {0}")]
    UnknownRole(String),
}

impl AccessError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotPermitted { .. } => "FORBIDDEN",
            Self::UnknownRole(_) => "UNKNOWN_ROLE",
        }
    }
}

impl From<AccessError> for AppError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::NotPermitted { .. } => Self::Forbidden(err.to_string()),
            AccessError::UnknownRole(_) => Self::Validation(err.to_string()),
        }
    }
}

/// Checks that `actor` may perform `operation`.
///
/// # Errors
///
/// Returns `AccessError::NotPermitted` if the actor's role is not in the
/// operation's allowed set.
pub fn authorize(actor: &Actor, operation: Operation) -> Result<(), AccessError> {
    if actor.role.permits(operation) {
        Ok(())
    } else {
        Err(AccessError::NotPermitted {
            role: actor.role,
            operation: operation.name(),
        })
    }
}
