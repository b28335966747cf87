//! Tests for the assign form validation across counterparty rules.

use crate::client::form::FormState;
use crate::client::stage::config::StageId;
use crate::client::stage::form::{validate_assign, AssignField};

use super::date;

fn base_form() -> FormState<AssignField> {
    let mut form = FormState::default();
    form.set(AssignField::Packet, "PKT-101");
    form.set(AssignField::Weight, "4.25");
    form.set(AssignField::AssignDate, "2025-03-05");
    form
}

/// Tests a party-only stage with a complete form.
///
/// Expected: the party name lands in the party field of the request
#[test]
fn party_stage_accepts_party() {
    let mut form = base_form();
    form.set(AssignField::Party, "Mehta Gems");

    let request = validate_assign(
        StageId::NungSeparation.config(),
        &form,
        date(2025, 3, 10),
    )
    .unwrap();
    assert_eq!(request.packet_no, "PKT-101");
    assert_eq!(request.party_name, "Mehta Gems");
    assert_eq!(request.planner_name, "");
    assert_eq!(request.weight, 4.25);
}

/// Tests that the planner stage routes the counterparty input into the
/// planner field.
///
/// Expected: planner set, party empty
#[test]
fn planner_stage_fills_planner() {
    let mut form = base_form();
    form.set(AssignField::Party, "D. Joshi");

    let request =
        validate_assign(StageId::Planning.config(), &form, date(2025, 3, 10)).unwrap();
    assert_eq!(request.planner_name, "D. Joshi");
    assert_eq!(request.party_name, "");
}

/// Tests that kapan stages insist on a kapan number.
///
/// Expected: a required error on the kapan field
#[test]
fn kapan_stage_requires_kapan() {
    let mut form = base_form();
    form.set(AssignField::Party, "Mehta Gems");

    let errors =
        validate_assign(StageId::Shine.config(), &form, date(2025, 3, 10)).unwrap_err();
    assert_eq!(
        errors,
        vec![(AssignField::Kapan, "Kapan number is required".to_string())]
    );
}

/// Tests the either/or counterparty rule with only a karigar given.
///
/// Expected: Ok, karigar carried and party left empty
#[test]
fn either_stage_accepts_karigar_alone() {
    let mut form = base_form();
    form.set(AssignField::Kapan, "K-12");
    form.set(AssignField::Karigar, "S. Patel");

    let request =
        validate_assign(StageId::Polishing.config(), &form, date(2025, 3, 10)).unwrap();
    assert_eq!(request.karigar_name, "S. Patel");
    assert_eq!(request.party_name, "");
}

/// Tests the either/or rule with neither name given.
///
/// Expected: one error pointing at the party field
#[test]
fn either_stage_rejects_missing_both() {
    let mut form = base_form();
    form.set(AssignField::Kapan, "K-12");

    let errors =
        validate_assign(StageId::Polishing.config(), &form, date(2025, 3, 10)).unwrap_err();
    assert_eq!(
        errors,
        vec![(
            AssignField::Party,
            "Enter a party or karigar name".to_string()
        )]
    );
}

/// Tests that an assign date after today is rejected.
///
/// Expected: a future-date error
#[test]
fn rejects_future_assign_date() {
    let mut form = base_form();
    form.set(AssignField::Party, "Mehta Gems");
    form.set(AssignField::AssignDate, "2025-03-11");

    let errors = validate_assign(
        StageId::NungSeparation.config(),
        &form,
        date(2025, 3, 10),
    )
    .unwrap_err();
    assert_eq!(
        errors,
        vec![(
            AssignField::AssignDate,
            "Assign date cannot be in the future".to_string()
        )]
    );
}

/// Tests an empty form against a party stage.
///
/// Expected: errors for packet, party, weight and date together
#[test]
fn empty_form_reports_every_field() {
    let form = FormState::default();

    let errors = validate_assign(
        StageId::GalaxyScanning.config(),
        &form,
        date(2025, 3, 10),
    )
    .unwrap_err();
    let fields: Vec<AssignField> = errors.iter().map(|(field, _)| *field).collect();
    assert!(fields.contains(&AssignField::Packet));
    assert!(fields.contains(&AssignField::Party));
    assert!(fields.contains(&AssignField::Weight));
    assert!(fields.contains(&AssignField::AssignDate));
}

/// Tests that a non-numeric weight is rejected.
///
/// Expected: a number error on the weight field
#[test]
fn rejects_garbage_weight() {
    let mut form = base_form();
    form.set(AssignField::Party, "Mehta Gems");
    form.set(AssignField::Weight, "heavy");

    let errors = validate_assign(
        StageId::NungSeparation.config(),
        &form,
        date(2025, 3, 10),
    )
    .unwrap_err();
    assert_eq!(
        errors,
        vec![(AssignField::Weight, "Weight must be a number".to_string())]
    );
}
