//! Tests for the status donut split and the pending-days badge.

use crate::client::stats::{pending_days_badge, status_breakdown};

/// Tests the normal three-way split.
///
/// Expected: pending is the remainder
#[test]
fn pending_is_the_remainder() {
    let split = status_breakdown(10, 3, 4);
    assert_eq!(split.in_progress, 3);
    assert_eq!(split.completed, 4);
    assert_eq!(split.pending, 3);
}

/// Tests backend counts that exceed the stock total.
///
/// Expected: the inconsistency surfaces as a negative pending count
#[test]
fn inconsistent_counts_go_negative() {
    assert_eq!(status_breakdown(5, 4, 3).pending, -2);
}

/// Tests the waiting-time color thresholds.
///
/// Expected: green up to 3 days, yellow to 7, red beyond
#[test]
fn badge_thresholds() {
    assert_eq!(pending_days_badge(0), "badge-success");
    assert_eq!(pending_days_badge(3), "badge-success");
    assert_eq!(pending_days_badge(4), "badge-warning");
    assert_eq!(pending_days_badge(7), "badge-warning");
    assert_eq!(pending_days_badge(8), "badge-error");
}
