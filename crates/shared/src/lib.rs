//! Shared errors, configuration, and token handling for Stockroom.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error types
//! - Configuration management
//! - JWT access tokens and the authenticated claims they carry
//! - Request/response payloads for the auth endpoints

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;

pub use auth::Claims;
pub use config::{AppConfig, DatabaseConfig};
pub use error::AppError;
pub use jwt::{JwtConfig, JwtError, JwtService};
