//! Validation for the sign-in and registration forms.

use crate::model::auth::{LoginRequestDto, RegisterRequestDto};
use crate::model::user::Role;

use super::{require, valid_email, FormState};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthField {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

pub const LOGIN_FIELDS: [AuthField; 2] = [AuthField::Username, AuthField::Password];

pub const REGISTER_FIELDS: [AuthField; 4] = [
    AuthField::Username,
    AuthField::Email,
    AuthField::Password,
    AuthField::ConfirmPassword,
];

fn check_password(value: &str, errors: &mut Vec<(AuthField, String)>) -> String {
    if value.is_empty() {
        errors.push((AuthField::Password, "Password is required".to_string()));
    } else if value.len() < MIN_PASSWORD_LEN {
        errors.push((
            AuthField::Password,
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    value.to_string()
}

/// Validates the sign-in form.
pub fn validate_login(form: &FormState<AuthField>) -> Result<LoginRequestDto, Vec<(AuthField, String)>> {
    let mut errors = Vec::new();

    let username = match require(form.value(AuthField::Username), "Username") {
        Ok(value) => value,
        Err(message) => {
            errors.push((AuthField::Username, message));
            String::new()
        }
    };
    let password = check_password(form.value(AuthField::Password), &mut errors);

    if errors.is_empty() {
        Ok(LoginRequestDto { username, password })
    } else {
        Err(errors)
    }
}

/// Validates the registration form. Self-registration always yields an
/// office user; admin accounts are created from the user administration
/// screen instead.
pub fn validate_register(
    form: &FormState<AuthField>,
) -> Result<RegisterRequestDto, Vec<(AuthField, String)>> {
    let mut errors = Vec::new();

    let username = match require(form.value(AuthField::Username), "Username") {
        Ok(value) => value,
        Err(message) => {
            errors.push((AuthField::Username, message));
            String::new()
        }
    };
    let email = match require(form.value(AuthField::Email), "Email") {
        Ok(value) => {
            if !valid_email(&value) {
                errors.push((AuthField::Email, "Enter a valid email address".to_string()));
            }
            value
        }
        Err(message) => {
            errors.push((AuthField::Email, message));
            String::new()
        }
    };
    let password = check_password(form.value(AuthField::Password), &mut errors);
    if form.value(AuthField::ConfirmPassword) != password {
        errors.push((
            AuthField::ConfirmPassword,
            "Passwords do not match".to_string(),
        ));
    }

    if errors.is_empty() {
        Ok(RegisterRequestDto {
            username,
            email,
            password,
            role: Role::OfficeUser,
        })
    } else {
        Err(errors)
    }
}
