//! Tests for the transaction list filters.

use crate::client::stats::filter_transactions;
use crate::model::stock::StockStatus;

use super::{at_noon, dated_stock, stock};

fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Tests the day filter against the date part of the purchase timestamp.
///
/// Expected: rows from that calendar day only, whatever the time
#[test]
fn day_filter_matches_date_part() {
    let stocks = vec![
        dated_stock("A", StockStatus::Pending, at_noon(2025, 3, 1)),
        dated_stock("B", StockStatus::Pending, at_noon(2025, 3, 2)),
    ];

    let found = filter_transactions(&stocks, Some(date(2025, 3, 1)), None);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].rough_name, "A");
}

/// Tests rows without a recorded purchase date under a day filter.
///
/// Expected: undated rows dropped when filtering by day, kept otherwise
#[test]
fn undated_rows_survive_only_without_day_filter() {
    let stocks = vec![
        stock("undated", 3.0),
        dated_stock("dated", StockStatus::Pending, at_noon(2025, 3, 1)),
    ];

    assert_eq!(
        filter_transactions(&stocks, Some(date(2025, 3, 1)), None).len(),
        1
    );
    assert_eq!(filter_transactions(&stocks, None, None).len(), 2);
}

/// Tests the status filter on its own.
///
/// Expected: rows carrying exactly that status
#[test]
fn status_filter_selects_exact_status() {
    let stocks = vec![
        dated_stock("A", StockStatus::Completed, at_noon(2025, 3, 1)),
        dated_stock("B", StockStatus::InProgress, at_noon(2025, 3, 1)),
        stock("no status", 3.0),
    ];

    let found = filter_transactions(&stocks, None, Some(StockStatus::Completed));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].rough_name, "A");
}

/// Tests both filters together.
///
/// Expected: the intersection of the day and status matches
#[test]
fn filters_compose() {
    let stocks = vec![
        dated_stock("A", StockStatus::Completed, at_noon(2025, 3, 1)),
        dated_stock("B", StockStatus::Completed, at_noon(2025, 3, 2)),
        dated_stock("C", StockStatus::Pending, at_noon(2025, 3, 1)),
    ];

    let found = filter_transactions(
        &stocks,
        Some(date(2025, 3, 1)),
        Some(StockStatus::Completed),
    );
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].rough_name, "A");
}
