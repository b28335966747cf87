//! Validation for the admin user create/edit form.

use crate::model::user::{Role, SaveUserDto};

use super::auth::MIN_PASSWORD_LEN;
use super::{require, valid_email, FormState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Username,
    Email,
    Password,
    Role,
}

pub const USER_FIELDS: [UserField; 4] = [
    UserField::Username,
    UserField::Email,
    UserField::Password,
    UserField::Role,
];

/// Validates the user form. On create a password is mandatory; on edit an
/// empty password keeps the existing one.
pub fn validate_user(
    form: &FormState<UserField>,
    creating: bool,
) -> Result<SaveUserDto, Vec<(UserField, String)>> {
    let mut errors = Vec::new();

    let username = match require(form.value(UserField::Username), "Username") {
        Ok(value) => value,
        Err(message) => {
            errors.push((UserField::Username, message));
            String::new()
        }
    };
    let email = match require(form.value(UserField::Email), "Email") {
        Ok(value) => {
            if !valid_email(&value) {
                errors.push((UserField::Email, "Enter a valid email address".to_string()));
            }
            value
        }
        Err(message) => {
            errors.push((UserField::Email, message));
            String::new()
        }
    };

    let raw_password = form.value(UserField::Password);
    let password = if raw_password.is_empty() {
        if creating {
            errors.push((UserField::Password, "Password is required".to_string()));
        }
        None
    } else if raw_password.len() < MIN_PASSWORD_LEN {
        errors.push((
            UserField::Password,
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
        None
    } else {
        Some(raw_password.to_string())
    };

    let role = match Role::parse(form.value(UserField::Role)) {
        Some(role) => role,
        None => {
            errors.push((UserField::Role, "Select a role".to_string()));
            Role::OfficeUser
        }
    };

    if errors.is_empty() {
        Ok(SaveUserDto {
            username,
            email,
            password,
            role,
        })
    } else {
        Err(errors)
    }
}
