use crate::model::api::AckDto;
use crate::model::stock::{DashboardStatsDto, RoughStockDto, SaveRoughStockDto};

use super::{error::ApiError, http};

pub async fn list(token: &str) -> Result<Vec<RoughStockDto>, ApiError> {
    http::get_json_or_default("/api/rough-diamonds", Some(token)).await
}

pub async fn create(body: &SaveRoughStockDto, token: &str) -> Result<AckDto, ApiError> {
    http::post_json("/api/rough-diamonds", body, Some(token)).await
}

pub async fn update(id: i64, body: &SaveRoughStockDto, token: &str) -> Result<AckDto, ApiError> {
    http::put_json(&format!("/api/update/rough_diamonds/{id}"), body, Some(token)).await
}

pub async fn delete(id: i64, token: &str) -> Result<AckDto, ApiError> {
    http::delete_json(&format!("/api/delete/rough_diamonds/{id}"), Some(token)).await
}

pub async fn dashboard_stats(token: &str) -> Result<DashboardStatsDto, ApiError> {
    http::get_json("/api/dashboard-stats", Some(token)).await
}
