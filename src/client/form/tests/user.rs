//! Tests for the admin user form validator.

use crate::client::form::user::{validate_user, UserField};
use crate::client::form::FormState;
use crate::model::user::Role;

fn filled_form() -> FormState<UserField> {
    let mut form = FormState::default();
    form.set(UserField::Username, "manager");
    form.set(UserField::Email, "manager@example.com");
    form.set(UserField::Password, "secret-pass");
    form.set(UserField::Role, "admin");
    form
}

/// Tests creating a user with every field present.
///
/// Expected: a save body carrying the password and parsed role
#[test]
fn create_accepts_full_form() {
    let body = validate_user(&filled_form(), true).unwrap();
    assert_eq!(body.username, "manager");
    assert_eq!(body.password, Some("secret-pass".to_string()));
    assert_eq!(body.role, Role::Admin);
}

/// Tests that creation insists on a password.
///
/// Expected: a required error on the password field
#[test]
fn create_requires_password() {
    let mut form = filled_form();
    form.set(UserField::Password, "");

    let errors = validate_user(&form, true).unwrap_err();
    assert_eq!(
        errors,
        vec![(UserField::Password, "Password is required".to_string())]
    );
}

/// Tests that editing without a password keeps the existing one.
///
/// Expected: Ok with password None
#[test]
fn edit_allows_empty_password() {
    let mut form = filled_form();
    form.set(UserField::Password, "");

    let body = validate_user(&form, false).unwrap();
    assert_eq!(body.password, None);
}

/// Tests that a short replacement password is still rejected on edit.
///
/// Expected: a minimum-length error
#[test]
fn edit_rejects_short_password() {
    let mut form = filled_form();
    form.set(UserField::Password, "12345");

    let errors = validate_user(&form, false).unwrap_err();
    assert_eq!(
        errors,
        vec![(
            UserField::Password,
            "Password must be at least 6 characters".to_string()
        )]
    );
}

/// Tests that an unknown role string fails validation.
///
/// Expected: a role selection error
#[test]
fn rejects_unknown_role() {
    let mut form = filled_form();
    form.set(UserField::Role, "superuser");

    let errors = validate_user(&form, true).unwrap_err();
    assert_eq!(
        errors,
        vec![(UserField::Role, "Select a role".to_string())]
    );
}
