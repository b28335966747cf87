//! Tests for the FormState value/error/touched bookkeeping.

use crate::client::form::auth::AuthField;
use crate::client::form::FormState;

/// Tests reading a field that was never written.
///
/// Expected: the empty string
#[test]
fn value_defaults_to_empty() {
    let form: FormState<AuthField> = FormState::default();
    assert_eq!(form.value(AuthField::Username), "");
}

/// Tests that user input touches the field, making its error visible.
///
/// Expected: error hidden before input, visible after
#[test]
fn set_marks_field_touched() {
    let mut form: FormState<AuthField> = FormState::default();
    form.set_errors(vec![(AuthField::Username, "Username is required".to_string())]);
    assert_eq!(form.visible_error(AuthField::Username), None);

    form.set(AuthField::Username, "");
    assert_eq!(
        form.visible_error(AuthField::Username),
        Some("Username is required".to_string())
    );
}

/// Tests that programmatic fills do not reveal errors.
///
/// Expected: value stored, error still hidden
#[test]
fn fill_does_not_touch() {
    let mut form: FormState<AuthField> = FormState::default();
    form.set_errors(vec![(AuthField::Email, "Email is required".to_string())]);
    form.fill(AuthField::Email, "a@b.com");

    assert_eq!(form.value(AuthField::Email), "a@b.com");
    assert_eq!(form.visible_error(AuthField::Email), None);
}

/// Tests that a submit attempt can reveal every error at once.
///
/// Expected: all errors visible after touch_all
#[test]
fn touch_all_reveals_errors() {
    let mut form: FormState<AuthField> = FormState::default();
    form.set_errors(vec![
        (AuthField::Username, "Username is required".to_string()),
        (AuthField::Password, "Password is required".to_string()),
    ]);
    form.touch_all([AuthField::Username, AuthField::Password]);

    assert!(form.visible_error(AuthField::Username).is_some());
    assert!(form.visible_error(AuthField::Password).is_some());
    assert!(form.has_errors());
}

/// Tests that clearing a form drops values, errors and touched state.
///
/// Expected: form behaves like a fresh default
#[test]
fn clear_resets_everything() {
    let mut form: FormState<AuthField> = FormState::default();
    form.set(AuthField::Username, "aster");
    form.set_errors(vec![(AuthField::Password, "Password is required".to_string())]);
    form.clear();

    assert_eq!(form.value(AuthField::Username), "");
    assert!(!form.has_errors());
    assert_eq!(form.visible_error(AuthField::Password), None);
}

/// Tests that a later error map replaces the earlier one entirely.
///
/// Expected: stale errors are gone after set_errors
#[test]
fn set_errors_replaces_previous_map() {
    let mut form: FormState<AuthField> = FormState::default();
    form.set_errors(vec![(AuthField::Username, "Username is required".to_string())]);
    form.set_errors(vec![]);

    assert!(!form.has_errors());
    assert_eq!(form.error(AuthField::Username), None);
}

/// Tests clearing a subset of fields.
///
/// Expected: named fields reset, other fields untouched
#[test]
fn clear_fields_leaves_the_rest() {
    let mut form: FormState<AuthField> = FormState::default();
    form.set(AuthField::Username, "aster");
    form.set(AuthField::Email, "a@b.com");
    form.set_errors(vec![(AuthField::Username, "taken".to_string())]);

    form.clear_fields([AuthField::Username]);

    assert_eq!(form.value(AuthField::Username), "");
    assert_eq!(form.visible_error(AuthField::Username), None);
    assert_eq!(form.value(AuthField::Email), "a@b.com");
}
