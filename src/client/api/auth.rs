use crate::model::auth::{AuthSessionDto, LoginRequestDto, RegisterRequestDto};

use super::{error::ApiError, http};

pub async fn login(body: &LoginRequestDto) -> Result<AuthSessionDto, ApiError> {
    http::post_json("/auth/login", body, None).await
}

pub async fn register(body: &RegisterRequestDto) -> Result<AuthSessionDto, ApiError> {
    http::post_json("/auth/register", body, None).await
}
