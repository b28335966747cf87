//! Tests for the submit form validation.

use crate::client::form::FormState;
use crate::client::stage::config::StageId;
use crate::client::stage::form::{validate_submit, SubmitField};

use super::date;

fn base_form() -> FormState<SubmitField> {
    let mut form = FormState::default();
    form.set(SubmitField::Packet, "PKT-101");
    form.set(SubmitField::SubmissionDate, "2025-03-08");
    form
}

/// Tests a valid submission within the allowed date window.
///
/// Expected: a submit request for the packet
#[test]
fn accepts_date_in_window() {
    let request = validate_submit(
        StageId::Shine.config(),
        &base_form(),
        Some(date(2025, 3, 5)),
        date(2025, 3, 10),
    )
    .unwrap();
    assert_eq!(request.packet_no, "PKT-101");
    assert_eq!(request.submission_date, date(2025, 3, 8));
}

/// Tests a submission dated before the packet was assigned.
///
/// Expected: an ordering error on the date field
#[test]
fn rejects_date_before_assignment() {
    let errors = validate_submit(
        StageId::Shine.config(),
        &base_form(),
        Some(date(2025, 3, 9)),
        date(2025, 3, 10),
    )
    .unwrap_err();
    assert_eq!(
        errors,
        vec![(
            SubmitField::SubmissionDate,
            "Submission date cannot be before the assign date".to_string()
        )]
    );
}

/// Tests a submission dated after today.
///
/// Expected: a future-date error
#[test]
fn rejects_future_date() {
    let errors = validate_submit(
        StageId::Shine.config(),
        &base_form(),
        Some(date(2025, 3, 5)),
        date(2025, 3, 7),
    )
    .unwrap_err();
    assert_eq!(
        errors,
        vec![(
            SubmitField::SubmissionDate,
            "Submission date cannot be in the future".to_string()
        )]
    );
}

/// Tests that an unknown assign date skips the ordering check.
///
/// Expected: Ok when only the today bound applies
#[test]
fn unknown_assign_date_skips_ordering() {
    let request = validate_submit(
        StageId::Shine.config(),
        &base_form(),
        None,
        date(2025, 3, 10),
    )
    .unwrap();
    assert_eq!(request.submission_date, date(2025, 3, 8));
}

/// Tests that the planning stage insists on a CSV plan file.
///
/// Expected: a required error on the file field
#[test]
fn planning_requires_csv() {
    let errors = validate_submit(
        StageId::Planning.config(),
        &base_form(),
        Some(date(2025, 3, 5)),
        date(2025, 3, 10),
    )
    .unwrap_err();
    assert_eq!(
        errors,
        vec![(
            SubmitField::CsvFile,
            "A CSV plan file is required".to_string()
        )]
    );
}

/// Tests that the same form passes once a file name is present.
///
/// Expected: Ok for planning with a chosen file
#[test]
fn planning_accepts_with_csv() {
    let mut form = base_form();
    form.set(SubmitField::CsvFile, "plan-101.csv");

    let request = validate_submit(
        StageId::Planning.config(),
        &form,
        Some(date(2025, 3, 5)),
        date(2025, 3, 10),
    )
    .unwrap();
    assert_eq!(request.packet_no, "PKT-101");
}

/// Tests that non-planning stages ignore the file field entirely.
///
/// Expected: Ok without any file name
#[test]
fn other_stages_ignore_csv() {
    assert!(validate_submit(
        StageId::Hpht.config(),
        &base_form(),
        Some(date(2025, 3, 5)),
        date(2025, 3, 10),
    )
    .is_ok());
}
