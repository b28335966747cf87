//! Tests for the inventory search filter.

use crate::client::stats::filter_inventory;

use super::stock;

/// Tests that an empty query keeps the whole inventory.
///
/// Expected: all rows, in order
#[test]
fn empty_query_keeps_everything() {
    let stocks = vec![stock("Kapan-7", 3.0), stock("Lot-12", 2.0)];
    assert_eq!(filter_inventory(&stocks, "  ").len(), 2);
}

/// Tests matching regardless of letter case.
///
/// Expected: the row found with a differently-cased query
#[test]
fn search_is_case_insensitive() {
    let stocks = vec![stock("Kapan-7", 3.0), stock("Lot-12", 2.0)];

    let found = filter_inventory(&stocks, "kApAn");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].rough_name, "Kapan-7");
}

/// Tests that the search also covers the counterparty and grade columns.
///
/// Expected: matches via vepari, dalal and quality values
#[test]
fn search_covers_all_columns() {
    let mut by_dalal = stock("Lot-1", 3.0);
    by_dalal.dalal_name = "Trivedi".to_string();
    let mut by_quality = stock("Lot-2", 3.0);
    by_quality.quality = "AA+".to_string();
    let stocks = vec![by_dalal, by_quality, stock("Lot-3", 3.0)];

    assert_eq!(filter_inventory(&stocks, "trivedi").len(), 1);
    assert_eq!(filter_inventory(&stocks, "aa+").len(), 1);
    assert_eq!(filter_inventory(&stocks, "mehta").len(), 3);
}

/// Tests a query matching nothing.
///
/// Expected: an empty result, not an error
#[test]
fn unmatched_query_gives_empty() {
    let stocks = vec![stock("Kapan-7", 3.0)];
    assert!(filter_inventory(&stocks, "zzz").is_empty());
}
