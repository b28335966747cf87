use crate::model::api::AckDto;
use crate::model::contact::{ContactDto, ContactKind, SaveContactDto};

use super::{error::ApiError, http};

fn base_path(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Vepari => "/api/veparis",
        ContactKind::Dalal => "/api/dalals",
    }
}

pub async fn list(kind: ContactKind, token: &str) -> Result<Vec<ContactDto>, ApiError> {
    http::get_json_or_default(base_path(kind), Some(token)).await
}

pub async fn create(
    kind: ContactKind,
    body: &SaveContactDto,
    token: &str,
) -> Result<AckDto, ApiError> {
    http::post_json(base_path(kind), body, Some(token)).await
}

pub async fn update(
    kind: ContactKind,
    id: i64,
    body: &SaveContactDto,
    token: &str,
) -> Result<AckDto, ApiError> {
    http::put_json(&format!("{}/{id}", base_path(kind)), body, Some(token)).await
}

pub async fn delete(kind: ContactKind, id: i64, token: &str) -> Result<AckDto, ApiError> {
    http::delete_json(&format!("{}/{id}", base_path(kind)), Some(token)).await
}
