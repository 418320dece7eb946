//! Report generation service.

use super::error::ReportError;
use super::types::{
    MovementCounts, MovementSummary, ProductQuantity, StockLevel, StockReportRow,
};
use crate::inventory::StockStatus;

/// Header row of the stock CSV export.
pub const STOCK_CSV_HEADER: [&str; 5] = ["Product", "Category", "Quantity", "Min Stock", "Status"];

/// Service for generating stock reports.
pub struct ReportService;

impl ReportService {
    /// Builds the stock report, keeping the input order.
    #[must_use]
    pub fn stock_report(levels: Vec<StockLevel>) -> Vec<StockReportRow> {
        levels.into_iter().map(StockReportRow::from).collect()
    }

    /// Names of products whose status is LOW.
    #[must_use]
    pub fn low_stock(rows: &[StockReportRow]) -> Vec<String> {
        rows.iter()
            .filter(|row| row.status == StockStatus::Low)
            .map(|row| row.name.clone())
            .collect()
    }

    /// Combines movement counts with per-product quantities.
    #[must_use]
    pub fn movement_summary(counts: MovementCounts, levels: &[StockLevel]) -> MovementSummary {
        MovementSummary {
            in_count: counts.in_count,
            out_count: counts.out_count,
            stock_levels: levels
                .iter()
                .map(|level| ProductQuantity {
                    name: level.name.clone(),
                    quantity: level.quantity,
                })
                .collect(),
        }
    }

    /// Serializes stock report rows as CSV.
    ///
    /// One header row, then one row per product; lines end in `\n` and only
    /// fields that need it are quoted.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Csv` if the writer fails.
    pub fn export_stock_csv(rows: &[StockReportRow]) -> Result<String, ReportError> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(STOCK_CSV_HEADER)?;
        for row in rows {
            let quantity = row.quantity.to_string();
            let min_stock = row.min_stock.to_string();
            writer.write_record([
                row.name.as_str(),
                row.category.as_str(),
                quantity.as_str(),
                min_stock.as_str(),
                row.status.as_str(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ReportError::Csv(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ReportError::Csv(e.to_string()))
    }
}
