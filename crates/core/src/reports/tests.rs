//! Tests for the reports module.

use proptest::prelude::*;
use uuid::Uuid;

use super::service::ReportService;
use super::types::{MovementCounts, StockLevel};
use crate::inventory::StockStatus;

fn level(name: &str, category: &str, quantity: i32, min_stock: i32) -> StockLevel {
    StockLevel {
        product_id: Uuid::new_v4(),
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        min_stock,
    }
}

#[test]
fn test_stock_report_statuses() {
    let rows = ReportService::stock_report(vec![
        level("Widget", "Hardware", 15, 10),
        level("Gadget", "Hardware", 3, 10),
        level("Sprocket", "Parts", 10, 10),
    ]);

    let statuses: Vec<StockStatus> = rows.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![StockStatus::Ok, StockStatus::Low, StockStatus::Ok]
    );
}

#[test]
fn test_low_stock_names() {
    let rows = ReportService::stock_report(vec![
        level("Widget", "Hardware", 15, 10),
        level("Gadget", "Hardware", 3, 10),
        level("Bolt", "Parts", 0, 1),
    ]);

    assert_eq!(ReportService::low_stock(&rows), vec!["Gadget", "Bolt"]);
}

#[test]
fn test_low_stock_empty_catalog() {
    assert!(ReportService::low_stock(&[]).is_empty());
}

#[test]
fn test_export_single_product() {
    let rows = ReportService::stock_report(vec![level("Widget", "Hardware", 15, 10)]);

    let csv = ReportService::export_stock_csv(&rows).unwrap();

    assert_eq!(
        csv,
        "Product,Category,Quantity,Min Stock,Status\nWidget,Hardware,15,10,OK\n"
    );
}

#[test]
fn test_export_empty_catalog_is_header_only() {
    let csv = ReportService::export_stock_csv(&[]).unwrap();
    assert_eq!(csv, "Product,Category,Quantity,Min Stock,Status\n");
}

#[test]
fn test_export_quotes_fields_with_commas() {
    let rows = ReportService::stock_report(vec![level("Nuts, hex", "Parts \"M6\"", 2, 5)]);

    let csv = ReportService::export_stock_csv(&rows).unwrap();

    assert_eq!(
        csv,
        "Product,Category,Quantity,Min Stock,Status\n\"Nuts, hex\",\"Parts \"\"M6\"\"\",2,5,LOW\n"
    );
}

#[test]
fn test_movement_summary() {
    let levels = vec![level("Widget", "Hardware", 15, 10), level("Gadget", "Hardware", 0, 1)];
    let summary = ReportService::movement_summary(
        MovementCounts {
            in_count: 4,
            out_count: 1,
        },
        &levels,
    );

    assert_eq!(summary.in_count, 4);
    assert_eq!(summary.out_count, 1);
    assert_eq!(summary.stock_levels.len(), 2);
    assert_eq!(summary.stock_levels[0].name, "Widget");
    assert_eq!(summary.stock_levels[0].quantity, 15);
}

proptest! {
    /// The export has one line per product plus the header.
    #[test]
    fn prop_export_line_count(quantities in prop::collection::vec((0i32..500, 0i32..500), 0..30)) {
        let levels: Vec<StockLevel> = quantities
            .iter()
            .enumerate()
            .map(|(i, (q, min))| level(&format!("Product {i}"), "Misc", *q, *min))
            .collect();
        let rows = ReportService::stock_report(levels);

        let csv = ReportService::export_stock_csv(&rows).unwrap();

        prop_assert_eq!(csv.lines().count(), rows.len() + 1);
        prop_assert!(csv.ends_with('\n'));
    }

    /// The low-stock list is exactly the LOW rows of the stock report.
    #[test]
    fn prop_low_stock_matches_report(
        quantities in prop::collection::vec((0i32..50, 0i32..50), 0..30)
    ) {
        let levels: Vec<StockLevel> = quantities
            .iter()
            .enumerate()
            .map(|(i, (q, min))| level(&format!("P{i}"), "Misc", *q, *min))
            .collect();
        let expected: Vec<String> = levels
            .iter()
            .filter(|l| l.quantity < l.min_stock)
            .map(|l| l.name.clone())
            .collect();

        let rows = ReportService::stock_report(levels);

        prop_assert_eq!(ReportService::low_stock(&rows), expected);
    }
}
