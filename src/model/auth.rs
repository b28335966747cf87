use serde::{Deserialize, Serialize};

use crate::model::user::Role;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequestDto {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequestDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Session payload returned by both login and register.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSessionDto {
    pub token: String,
    pub username: String,
    pub email: String,
    pub role: Role,
}
