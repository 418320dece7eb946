//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod inventory;
pub mod product;
pub mod report;
pub mod user;

pub use inventory::{InventoryRepository, LedgerRepoError, MovementRecord};
pub use product::{CatalogRepoError, ProductRepository, ProductWithStock};
pub use report::{ReportRepoError, ReportRepository, TransactionHistoryFilter};
pub use user::UserRepository;
