//! Tests for the sign-in and registration validators.

use crate::client::form::auth::{validate_login, validate_register, AuthField};
use crate::client::form::FormState;
use crate::model::user::Role;

/// Tests a complete sign-in form.
///
/// Expected: a login request carrying the entered credentials
#[test]
fn login_accepts_valid_credentials() {
    let mut form = FormState::default();
    form.set(AuthField::Username, "aster");
    form.set(AuthField::Password, "hunter22");

    let request = validate_login(&form).unwrap();
    assert_eq!(request.username, "aster");
    assert_eq!(request.password, "hunter22");
}

/// Tests sign-in with everything missing.
///
/// Expected: one error per required field
#[test]
fn login_requires_both_fields() {
    let form = FormState::default();

    let errors = validate_login(&form).unwrap_err();
    assert!(errors.iter().any(|(field, _)| *field == AuthField::Username));
    assert!(errors.iter().any(|(field, _)| *field == AuthField::Password));
}

/// Tests the password length floor on sign-in.
///
/// Expected: a minimum-length error on the password field
#[test]
fn login_rejects_short_password() {
    let mut form = FormState::default();
    form.set(AuthField::Username, "aster");
    form.set(AuthField::Password, "12345");

    let errors = validate_login(&form).unwrap_err();
    assert_eq!(
        errors,
        vec![(
            AuthField::Password,
            "Password must be at least 6 characters".to_string()
        )]
    );
}

/// Tests a complete registration form.
///
/// Expected: a register request with the office user role
#[test]
fn register_accepts_valid_form() {
    let mut form = FormState::default();
    form.set(AuthField::Username, "aster");
    form.set(AuthField::Email, "aster@example.com");
    form.set(AuthField::Password, "hunter22");
    form.set(AuthField::ConfirmPassword, "hunter22");

    let request = validate_register(&form).unwrap();
    assert_eq!(request.username, "aster");
    assert_eq!(request.email, "aster@example.com");
    assert_eq!(request.role, Role::OfficeUser);
}

/// Tests registration with a malformed email.
///
/// Expected: an email-shape error
#[test]
fn register_rejects_bad_email() {
    let mut form = FormState::default();
    form.set(AuthField::Username, "aster");
    form.set(AuthField::Email, "not-an-email");
    form.set(AuthField::Password, "hunter22");
    form.set(AuthField::ConfirmPassword, "hunter22");

    let errors = validate_register(&form).unwrap_err();
    assert_eq!(
        errors,
        vec![(
            AuthField::Email,
            "Enter a valid email address".to_string()
        )]
    );
}

/// Tests registration with mismatched password confirmation.
///
/// Expected: a mismatch error on the confirm field
#[test]
fn register_rejects_mismatched_passwords() {
    let mut form = FormState::default();
    form.set(AuthField::Username, "aster");
    form.set(AuthField::Email, "aster@example.com");
    form.set(AuthField::Password, "hunter22");
    form.set(AuthField::ConfirmPassword, "hunter23");

    let errors = validate_register(&form).unwrap_err();
    assert_eq!(
        errors,
        vec![(
            AuthField::ConfirmPassword,
            "Passwords do not match".to_string()
        )]
    );
}
