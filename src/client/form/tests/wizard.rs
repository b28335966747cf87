//! Tests for the management wizard validators.

use chrono::NaiveDate;

use crate::client::form::wizard::{
    validate_final, validate_office, validate_stock, WizardField,
};
use crate::client::form::FormState;

fn stock_form() -> FormState<WizardField> {
    let mut form = FormState::default();
    form.set(WizardField::RoughName, "Kapan-7");
    form.set(WizardField::Carat, "14.2");
    form.set(WizardField::Price, "250000");
    form.set(WizardField::Size, "+6");
    form.set(WizardField::Quality, "A");
    form.set(WizardField::Color, "72");
    form.set(WizardField::VepariName, "Mehta Gems");
    form.set(WizardField::VepariMobile, "9876543210");
    form.set(WizardField::DalalName, "R. Shah");
    form
}

/// Tests the stock tab with a fully valid form.
///
/// Expected: a save body with parsed numbers and an empty whiteness
#[test]
fn stock_accepts_valid_form() {
    let body = validate_stock(&stock_form()).unwrap();
    assert_eq!(body.rough_name, "Kapan-7");
    assert_eq!(body.weight_carat, 14.2);
    assert_eq!(body.purchase_price, 250000.0);
    assert_eq!(body.color_percent, 72.0);
    assert_eq!(body.whiteness_percent, None);
    assert_eq!(body.dalal_mobile, "");
}

/// Tests the rough name length floor.
///
/// Expected: a minimum-length error on the name field
#[test]
fn stock_rejects_short_name() {
    let mut form = stock_form();
    form.set(WizardField::RoughName, "K7");

    let errors = validate_stock(&form).unwrap_err();
    assert_eq!(
        errors,
        vec![(
            WizardField::RoughName,
            "Rough name must be at least 3 characters".to_string()
        )]
    );
}

/// Tests that whiteness stays optional but range-checked.
///
/// Expected: Some value in range, error out of range
#[test]
fn stock_whiteness_optional_but_bounded() {
    let mut form = stock_form();
    form.set(WizardField::Whiteness, "55");
    assert_eq!(
        validate_stock(&form).unwrap().whiteness_percent,
        Some(55.0)
    );

    form.set(WizardField::Whiteness, "140");
    let errors = validate_stock(&form).unwrap_err();
    assert_eq!(
        errors,
        vec![(
            WizardField::Whiteness,
            "Whiteness must be between 0 and 100".to_string()
        )]
    );
}

/// Tests that both counterparty names are mandatory for stock.
///
/// Expected: errors on the vepari and dalal name fields
#[test]
fn stock_requires_counterparties() {
    let mut form = stock_form();
    form.set(WizardField::VepariName, "");
    form.set(WizardField::DalalName, " ");

    let errors = validate_stock(&form).unwrap_err();
    assert!(errors
        .iter()
        .any(|(field, _)| *field == WizardField::VepariName));
    assert!(errors
        .iter()
        .any(|(field, _)| *field == WizardField::DalalName));
}

/// Tests the office handover tab with a valid form.
///
/// Expected: a handover body with the parsed nung count and date
#[test]
fn office_accepts_valid_form() {
    let mut form = FormState::default();
    form.set(WizardField::OfficeName, "Surat Office");
    form.set(WizardField::OfficeRoughName, "Kapan-7");
    form.set(WizardField::OfficeWeight, "6.4");
    form.set(WizardField::NungCount, "12");
    form.set(WizardField::SendingDate, "2025-03-10");

    let body = validate_office(&form).unwrap();
    assert_eq!(body.nung_count, 12);
    assert_eq!(
        body.sending_date,
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    );
    assert_eq!(body.size, "");
}

/// Tests that the handover needs at least one nung.
///
/// Expected: a minimum error on the nung count
#[test]
fn office_requires_a_nung() {
    let mut form = FormState::default();
    form.set(WizardField::OfficeName, "Surat Office");
    form.set(WizardField::OfficeRoughName, "Kapan-7");
    form.set(WizardField::OfficeWeight, "6.4");
    form.set(WizardField::NungCount, "0");
    form.set(WizardField::SendingDate, "2025-03-10");

    let errors = validate_office(&form).unwrap_err();
    assert_eq!(
        errors,
        vec![(
            WizardField::NungCount,
            "Nung count must be at least 1".to_string()
        )]
    );
}

/// Tests the final diamonds tab with a valid form.
///
/// Expected: a final body where zero piece counts are allowed
#[test]
fn final_accepts_zero_counts() {
    let mut form = FormState::default();
    form.set(WizardField::FinalOfficeName, "Surat Office");
    form.set(WizardField::FinalRoughName, "Kapan-7");
    form.set(WizardField::SubmitDate, "2025-04-01");
    form.set(WizardField::Topi, "0");
    form.set(WizardField::Patti, "3");
    form.set(WizardField::Simcard, "0");
    form.set(WizardField::TotalWeight, "4.9");

    let body = validate_final(&form).unwrap();
    assert_eq!(body.topi, 0);
    assert_eq!(body.patti, 3);
    assert_eq!(body.total_weight, 4.9);
}

/// Tests that negative piece counts are rejected.
///
/// Expected: a minimum error on the negative count
#[test]
fn final_rejects_negative_counts() {
    let mut form = FormState::default();
    form.set(WizardField::FinalOfficeName, "Surat Office");
    form.set(WizardField::FinalRoughName, "Kapan-7");
    form.set(WizardField::SubmitDate, "2025-04-01");
    form.set(WizardField::Topi, "-1");
    form.set(WizardField::Patti, "0");
    form.set(WizardField::Simcard, "0");
    form.set(WizardField::TotalWeight, "4.9");

    let errors = validate_final(&form).unwrap_err();
    assert_eq!(
        errors,
        vec![(
            WizardField::Topi,
            "Topi count must be at least 0".to_string()
        )]
    );
}
