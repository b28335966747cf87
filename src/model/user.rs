use serde::{Deserialize, Serialize};

/// Access level attached to every account and session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    OfficeUser,
}

impl Role {
    /// Wire value used by the API and the persisted session blob.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::OfficeUser => "office_user",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            "office_user" => Some(Role::OfficeUser),
            _ => None,
        }
    }

    /// Label shown in tables and menus.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::OfficeUser => "Office User",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
}

/// List envelope returned by GET /api/users
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct UserListDto {
    pub success: bool,
    pub users: Vec<UserDto>,
}

/// Body for creating or updating an account; password is omitted to leave it
/// unchanged on update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveUserDto {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: Role,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct UserStatusDto {
    pub is_active: bool,
}
