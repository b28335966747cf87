//! Tests for the per-quality stone counts.

use crate::client::stats::{quality_counts, total_remaining_weight};

use super::stock;

fn graded(name: &str, quality: &str) -> crate::model::stock::RoughStockDto {
    let mut item = stock(name, 2.0);
    item.quality = quality.to_string();
    item
}

/// Tests counting and alphabetical ordering of grades.
///
/// Expected: sorted (grade, count) pairs
#[test]
fn counts_sorted_by_grade() {
    let stocks = vec![
        graded("A", "B"),
        graded("B", "A"),
        graded("C", "B"),
        graded("D", "C"),
    ];

    assert_eq!(
        quality_counts(&stocks),
        vec![
            ("A".to_string(), 1),
            ("B".to_string(), 2),
            ("C".to_string(), 1),
        ]
    );
}

/// Tests that ungraded stones fall into the Unknown bucket.
///
/// Expected: blank and whitespace grades grouped under "Unknown"
#[test]
fn ungraded_stones_count_as_unknown() {
    let stocks = vec![graded("A", ""), graded("B", "  "), graded("C", "A")];

    assert_eq!(
        quality_counts(&stocks),
        vec![("A".to_string(), 1), ("Unknown".to_string(), 2)]
    );
}

/// Tests the remaining-weight sum shown on the stock card.
///
/// Expected: the arithmetic sum over all stones
#[test]
fn sums_remaining_weight() {
    let stocks = vec![stock("A", 1.5), stock("B", 2.25)];
    assert_eq!(total_remaining_weight(&stocks), 3.75);
}
