//! Shared request plumbing for the JSON API.
//!
//! Every helper builds the full URL from the configured base, attaches the
//! bearer credential when one is given, and decodes the response against the
//! endpoint's schema. Status handling is uniform: 401 tears the session down,
//! 403 is a permission failure, other non-2xx statuses surface the JSON error
//! body when present and the raw body text otherwise.

use reqwasm::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::client::config::api_url;
use crate::model::api::ErrorDto;

use super::error::ApiError;

fn with_auth(request: Request, token: Option<&str>) -> Request {
    match token {
        Some(token) => request.header("Authorization", &format!("Bearer {token}")),
        None => request,
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Malformed(format!("encoding request: {e}")))
}

async fn send(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Decodes a response against the expected schema `T`.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    match response.status() {
        200 | 201 => response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string())),
        401 => Err(ApiError::Unauthorized),
        403 => Err(ApiError::Forbidden),
        status => Err(error_from_body(status, response).await),
    }
}

async fn error_from_body(status: u16, response: Response) -> ApiError {
    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        ApiError::Api {
            status,
            message: error_dto.error,
        }
    } else {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        ApiError::Http { status, body }
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    let response = send(with_auth(Request::get(&api_url(path)), token)).await?;
    decode(response).await
}

/// GET for collection endpoints where a 404 simply means nothing recorded yet.
pub async fn get_json_or_default<T: DeserializeOwned + Default>(
    path: &str,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let response = send(with_auth(Request::get(&api_url(path)), token)).await?;
    if response.status() == 404 {
        return Ok(T::default());
    }
    decode(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let request = with_auth(Request::post(&api_url(path)), token)
        .header("Content-Type", "application/json")
        .body(encode_body(body)?);
    let response = send(request).await?;
    decode(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let request = with_auth(Request::put(&api_url(path)), token)
        .header("Content-Type", "application/json")
        .body(encode_body(body)?);
    let response = send(request).await?;
    decode(response).await
}

pub async fn delete_json<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let response = send(with_auth(Request::delete(&api_url(path)), token)).await?;
    decode(response).await
}

/// POST a browser `FormData` body; the browser supplies the multipart
/// boundary, so no content type is set here.
pub async fn post_form<T: DeserializeOwned>(
    path: &str,
    form: web_sys::FormData,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let request = with_auth(Request::post(&api_url(path)), token).body(form);
    let response = send(request).await?;
    decode(response).await
}

/// GET raw bytes, for file exports.
pub async fn get_bytes(path: &str, token: Option<&str>) -> Result<Vec<u8>, ApiError> {
    let response = send(with_auth(Request::get(&api_url(path)), token)).await?;
    match response.status() {
        200 => response
            .binary()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string())),
        401 => Err(ApiError::Unauthorized),
        403 => Err(ApiError::Forbidden),
        status => Err(error_from_body(status, response).await),
    }
}
