use crate::model::logs::ProcessingLogDto;

use super::{error::ApiError, http};

pub async fn list(token: &str) -> Result<Vec<ProcessingLogDto>, ApiError> {
    http::get_json_or_default("/api/processing-logs", Some(token)).await
}
