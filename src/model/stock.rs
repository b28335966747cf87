use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Transaction state of a rough stone, when the backend reports one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Pending,
    InProgress,
    Completed,
    Rejected,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Pending => "PENDING",
            StockStatus::InProgress => "IN PROGRESS",
            StockStatus::Completed => "COMPLETED",
            StockStatus::Rejected => "REJECTED",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            StockStatus::Pending => "badge-warning",
            StockStatus::InProgress => "badge-info",
            StockStatus::Completed => "badge-success",
            StockStatus::Rejected => "badge-error",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct RoughStockDto {
    pub id: i64,
    pub rough_name: String,
    pub purchase_price: f64,
    pub weight_carat: f64,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub quality: String,
    #[serde(default)]
    pub color_percent: f64,
    #[serde(default)]
    pub whiteness_percent: Option<f64>,
    #[serde(default)]
    pub vepari_name: String,
    #[serde(default)]
    pub vepari_mobile: String,
    #[serde(default)]
    pub dalal_name: String,
    #[serde(default)]
    pub dalal_mobile: String,
    #[serde(default)]
    pub remaining_weight: f64,
    #[serde(default)]
    pub status: Option<StockStatus>,
    #[serde(default)]
    pub created_date: Option<NaiveDateTime>,
}

/// Body for creating or updating a rough stone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveRoughStockDto {
    pub rough_name: String,
    pub purchase_price: f64,
    pub weight_carat: f64,
    pub size: String,
    pub quality: String,
    pub color_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whiteness_percent: Option<f64>,
    pub vepari_name: String,
    pub vepari_mobile: String,
    pub dalal_name: String,
    pub dalal_mobile: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingSubmissionDto {
    #[serde(default)]
    pub office_name: String,
    #[serde(default)]
    pub rough_name: String,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub given_date: Option<NaiveDate>,
    #[serde(default)]
    pub days_pending: i64,
}

/// Payload of GET /api/dashboard-stats
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStatsDto {
    #[serde(default)]
    pub stocks: Vec<RoughStockDto>,
    #[serde(default)]
    pub in_progress_count: i64,
    #[serde(default)]
    pub completed_count: i64,
    #[serde(default)]
    pub final_weight_total: f64,
    #[serde(default)]
    pub pending_submissions: Vec<PendingSubmissionDto>,
}
