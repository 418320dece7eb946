//! Core inventory rules for Stockroom.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `auth` - Roles, per-operation authorization, password hashing
//! - `catalog` - Product definition validation
//! - `inventory` - Stock movement rules and the low-stock predicate
//! - `reports` - Stock report shaping and CSV export

pub mod auth;
pub mod catalog;
pub mod inventory;
pub mod reports;
