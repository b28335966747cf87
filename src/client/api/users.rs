use crate::model::api::AckDto;
use crate::model::user::{SaveUserDto, UserDto, UserListDto, UserStatusDto};

use super::{error::ApiError, http};

pub async fn list(token: &str) -> Result<Vec<UserDto>, ApiError> {
    let list: UserListDto = http::get_json("/api/users", Some(token)).await?;
    Ok(list.users)
}

pub async fn create(body: &SaveUserDto, token: &str) -> Result<AckDto, ApiError> {
    http::post_json("/api/users", body, Some(token)).await
}

pub async fn update(id: i64, body: &SaveUserDto, token: &str) -> Result<AckDto, ApiError> {
    http::put_json(&format!("/api/users/{id}"), body, Some(token)).await
}

pub async fn delete(id: i64, token: &str) -> Result<AckDto, ApiError> {
    http::delete_json(&format!("/api/users/{id}"), Some(token)).await
}

pub async fn set_status(id: i64, is_active: bool, token: &str) -> Result<AckDto, ApiError> {
    let body = UserStatusDto { is_active };
    http::put_json(&format!("/api/users/{id}/status"), &body, Some(token)).await
}
