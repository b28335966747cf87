use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A lot handed to an outside office for nung separation.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficeProcessingDto {
    pub id: i64,
    pub office_name: String,
    pub rough_name: String,
    pub weight: f64,
    #[serde(default)]
    pub size: String,
    pub nung_count: i64,
    pub sending_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOfficeProcessingDto {
    pub office_name: String,
    pub rough_name: String,
    pub weight: f64,
    pub size: String,
    pub nung_count: i64,
    pub sending_date: NaiveDate,
}

/// Finished-goods measurements recorded when a lot returns from an office.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFinalDiamondDto {
    pub office_name: String,
    pub rough_name: String,
    pub submit_date: NaiveDate,
    pub topi: i64,
    pub patti: i64,
    pub simcard: i64,
    pub total_weight: f64,
    pub size: String,
}
