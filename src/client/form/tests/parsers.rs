//! Tests for the shared field parsers.

use chrono::NaiveDate;

use crate::client::form::{
    parse_count, parse_date, parse_percent, parse_positive, require, valid_email,
};

/// Tests that required strings are trimmed.
///
/// Expected: "Aster" without surrounding whitespace
#[test]
fn require_trims_value() {
    assert_eq!(require("  Aster  ", "Name"), Ok("Aster".to_string()));
}

/// Tests that whitespace-only input counts as missing.
///
/// Expected: "is required" error
#[test]
fn require_rejects_blank() {
    assert_eq!(require("   ", "Name"), Err("Name is required".to_string()));
}

/// Tests positive decimal parsing across valid and invalid inputs.
///
/// Expected: value for positives, errors for zero, negatives and garbage
#[test]
fn parse_positive_bounds() {
    assert_eq!(parse_positive("2.5", "Weight"), Ok(2.5));
    assert_eq!(
        parse_positive("0", "Weight"),
        Err("Weight must be greater than zero".to_string())
    );
    assert_eq!(
        parse_positive("-1", "Weight"),
        Err("Weight must be greater than zero".to_string())
    );
    assert_eq!(
        parse_positive("abc", "Weight"),
        Err("Weight must be a number".to_string())
    );
    assert_eq!(
        parse_positive("", "Weight"),
        Err("Weight is required".to_string())
    );
}

/// Tests optional and required percentage parsing.
///
/// Expected: None for empty optional, error for empty required, range enforced
#[test]
fn parse_percent_range() {
    assert_eq!(parse_percent("", "Whiteness", false), Ok(None));
    assert_eq!(
        parse_percent("", "Color", true),
        Err("Color is required".to_string())
    );
    assert_eq!(parse_percent("0", "Color", true), Ok(Some(0.0)));
    assert_eq!(parse_percent("100", "Color", true), Ok(Some(100.0)));
    assert_eq!(
        parse_percent("100.1", "Color", true),
        Err("Color must be between 0 and 100".to_string())
    );
    assert_eq!(
        parse_percent("-3", "Color", true),
        Err("Color must be between 0 and 100".to_string())
    );
}

/// Tests whole-count parsing with a minimum.
///
/// Expected: minimum enforced, fractions rejected
#[test]
fn parse_count_minimum() {
    assert_eq!(parse_count("3", "Nung count", 1), Ok(3));
    assert_eq!(
        parse_count("0", "Nung count", 1),
        Err("Nung count must be at least 1".to_string())
    );
    assert_eq!(parse_count("0", "Topi count", 0), Ok(0));
    assert_eq!(
        parse_count("1.5", "Nung count", 1),
        Err("Nung count must be a whole number".to_string())
    );
}

/// Tests ISO date parsing as produced by a date input.
///
/// Expected: valid dates parse, malformed and impossible dates do not
#[test]
fn parse_date_iso() {
    assert_eq!(
        parse_date("2025-02-28", "Assign date"),
        Ok(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap())
    );
    assert_eq!(
        parse_date("2025-02-30", "Assign date"),
        Err("Assign date is not a valid date".to_string())
    );
    assert_eq!(
        parse_date("28/02/2025", "Assign date"),
        Err("Assign date is not a valid date".to_string())
    );
    assert_eq!(
        parse_date("", "Assign date"),
        Err("Assign date is required".to_string())
    );
}

/// Tests the mailbox shape check.
///
/// Expected: plausible addresses accepted, obvious junk rejected
#[test]
fn valid_email_shapes() {
    assert!(valid_email("karigar@example.com"));
    assert!(valid_email("a.b@mail.example.co"));
    assert!(!valid_email("plainaddress"));
    assert!(!valid_email("@example.com"));
    assert!(!valid_email("user@nodot"));
    assert!(!valid_email("user@.com"));
    assert!(!valid_email("user name@example.com"));
}
