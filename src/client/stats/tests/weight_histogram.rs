//! Tests for the weight histogram bucketing.

use crate::client::stats::{weight_histogram, WEIGHT_BANDS};

use super::stock;

/// Tests that band edges are inclusive on the left-hand band.
///
/// Expected: 1.0ct counts in the first band, 1.01ct in the second
#[test]
fn band_edges_are_inclusive() {
    let stocks = vec![
        stock("A", 1.0),
        stock("B", 1.01),
        stock("C", 2.0),
        stock("D", 5.0),
        stock("E", 10.0),
        stock("F", 10.5),
    ];

    assert_eq!(weight_histogram(&stocks), [1, 2, 1, 1, 1]);
}

/// Tests one stone per band.
///
/// Expected: [1, 1, 1, 1, 1]
#[test]
fn one_stone_per_band() {
    let stocks = vec![
        stock("A", 0.5),
        stock("B", 1.5),
        stock("C", 3.0),
        stock("D", 7.0),
        stock("E", 12.0),
    ];

    assert_eq!(weight_histogram(&stocks), [1; 5]);
}

/// Tests an empty inventory.
///
/// Expected: all bands zero
#[test]
fn empty_inventory_gives_zeros() {
    assert_eq!(weight_histogram(&[]), [0; 5]);
}

/// Tests that every stone lands in exactly one band.
///
/// Expected: band counts sum to the stone count
#[test]
fn every_stone_lands_in_one_band() {
    let stocks: Vec<_> = [0.3, 0.9, 1.5, 3.3, 4.9, 7.0, 12.0, 25.0]
        .iter()
        .map(|weight| stock("X", *weight))
        .collect();

    let total: u32 = weight_histogram(&stocks).iter().sum();
    assert_eq!(total as usize, stocks.len());
}

/// Tests that the label list and the band array stay in step.
///
/// Expected: five labels for five bands
#[test]
fn one_label_per_band() {
    assert_eq!(WEIGHT_BANDS.len(), weight_histogram(&[]).len());
}
