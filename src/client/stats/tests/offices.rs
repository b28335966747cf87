//! Tests for the dropdown derivations.

use crate::client::stats::{office_names, office_rough_names, stock_names};

use super::{handover, stock};

/// Tests de-duplication of office names.
///
/// Expected: each office once, in first-seen order
#[test]
fn office_names_are_unique_in_order() {
    let handovers = vec![
        handover("Surat Office", "Kapan-7"),
        handover("Mumbai Office", "Lot-12"),
        handover("Surat Office", "Kapan-9"),
    ];

    assert_eq!(
        office_names(&handovers),
        vec!["Surat Office".to_string(), "Mumbai Office".to_string()]
    );
}

/// Tests that rough options follow the chosen office.
///
/// Expected: only that office's lots, de-duplicated
#[test]
fn rough_names_follow_selected_office() {
    let handovers = vec![
        handover("Surat Office", "Kapan-7"),
        handover("Surat Office", "Kapan-7"),
        handover("Surat Office", "Kapan-9"),
        handover("Mumbai Office", "Lot-12"),
    ];

    assert_eq!(
        office_rough_names(&handovers, "Surat Office"),
        vec!["Kapan-7".to_string(), "Kapan-9".to_string()]
    );
    assert_eq!(
        office_rough_names(&handovers, "Mumbai Office"),
        vec!["Lot-12".to_string()]
    );
}

/// Tests an office with no handovers.
///
/// Expected: no rough options
#[test]
fn unknown_office_has_no_roughs() {
    let handovers = vec![handover("Surat Office", "Kapan-7")];
    assert!(office_rough_names(&handovers, "Pune Office").is_empty());
}

/// Tests the stock name options for the handover form.
///
/// Expected: each rough once, in first-seen order
#[test]
fn stock_names_are_unique_in_order() {
    let stocks = vec![stock("Kapan-7", 3.0), stock("Lot-12", 2.0), stock("Kapan-7", 1.0)];

    assert_eq!(
        stock_names(&stocks),
        vec!["Kapan-7".to_string(), "Lot-12".to_string()]
    );
}
