use crate::model::api::AckDto;
use crate::model::office::{NewFinalDiamondDto, NewOfficeProcessingDto, OfficeProcessingDto};

use super::{error::ApiError, http};

pub async fn list(token: &str) -> Result<Vec<OfficeProcessingDto>, ApiError> {
    http::get_json_or_default("/api/office-processing", Some(token)).await
}

pub async fn create(body: &NewOfficeProcessingDto, token: &str) -> Result<AckDto, ApiError> {
    http::post_json("/api/office-processing", body, Some(token)).await
}

pub async fn create_final(body: &NewFinalDiamondDto, token: &str) -> Result<AckDto, ApiError> {
    http::post_json("/api/final-diamonds", body, Some(token)).await
}
