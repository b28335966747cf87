//! Tests for the assign/submit dropdown candidate lists.

use crate::client::stage::form::{
    assign_candidates, eligible_row, recorded_assign_date, submit_candidates,
};
use crate::model::stage::PacketStatus;

use super::{date, entry};

/// Tests that packets already present at the stage leave the assign list.
///
/// Expected: only the never-assigned packet remains
#[test]
fn assigned_packet_leaves_assign_list() {
    let eligible = vec![
        entry("PKT-1", PacketStatus::Completed),
        entry("PKT-2", PacketStatus::Completed),
    ];
    let entries = vec![entry("PKT-1", PacketStatus::Assigned)];

    let candidates = assign_candidates(&eligible, &entries);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].packet_no, "PKT-2");
}

/// Tests the assign list with nothing recorded at the stage yet.
///
/// Expected: every eligible packet offered
#[test]
fn empty_stage_offers_all_eligible() {
    let eligible = vec![
        entry("PKT-1", PacketStatus::Completed),
        entry("PKT-2", PacketStatus::Completed),
    ];

    assert_eq!(assign_candidates(&eligible, &[]).len(), 2);
}

/// Tests that submitted and completed rows leave the submit list.
///
/// Expected: only open rows remain
#[test]
fn submitted_rows_leave_submit_list() {
    let entries = vec![
        entry("PKT-1", PacketStatus::Assigned),
        entry("PKT-2", PacketStatus::Submitted),
        entry("PKT-3", PacketStatus::InProgress),
        entry("PKT-4", PacketStatus::Completed),
    ];

    let candidates = submit_candidates(&entries);
    let packets: Vec<&str> = candidates
        .iter()
        .map(|entry| entry.packet_no.as_str())
        .collect();
    assert_eq!(packets, vec!["PKT-1", "PKT-3"]);
}

/// Tests the eligible-row lookup used for autofill.
///
/// Expected: the matching row, or None for an unknown packet
#[test]
fn finds_eligible_row_by_packet() {
    let eligible = vec![entry("PKT-1", PacketStatus::Completed)];

    assert!(eligible_row(&eligible, "PKT-1").is_some());
    assert!(eligible_row(&eligible, "PKT-9").is_none());
}

/// Tests the recorded assign date lookup used by submit validation.
///
/// Expected: the stage row's assign date, or None when absent
#[test]
fn looks_up_recorded_assign_date() {
    let entries = vec![entry("PKT-1", PacketStatus::Assigned)];

    assert_eq!(
        recorded_assign_date(&entries, "PKT-1"),
        Some(date(2025, 3, 1))
    );
    assert_eq!(recorded_assign_date(&entries, "PKT-9"), None);
}
