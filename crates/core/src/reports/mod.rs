//! Read-only stock reports.
//!
//! This module shapes rows read from the store into the views callers see:
//! - Stock report (one row per product with LOW/OK status)
//! - Low-stock dashboard list
//! - Movement summary for charting
//! - CSV export of the stock report

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ReportError;
pub use service::{ReportService, STOCK_CSV_HEADER};
pub use types::*;
