//! Planning endpoints beyond the generic stage pair: the richer entry rows,
//! the per-packet report, the multipart submit, and the file exports.

use chrono::NaiveDate;
use web_sys::FormData;

use crate::model::api::AckDto;
use crate::model::planning::{PlanningDetailDto, PlanningEntryDto};

use super::{error::ApiError, http};

pub async fn entries(token: &str) -> Result<Vec<PlanningEntryDto>, ApiError> {
    http::get_json_or_default("/api/planning/entries", Some(token)).await
}

pub async fn detail(id: i64, token: &str) -> Result<PlanningDetailDto, ApiError> {
    http::get_json(&format!("/planning/{id}"), Some(token)).await
}

fn form_error() -> ApiError {
    ApiError::Malformed("could not assemble the upload form".to_string())
}

/// Submits a planning packet together with its CSV plan report.
pub async fn submit_with_csv(
    packet_no: &str,
    submission_date: NaiveDate,
    csv_name: &str,
    csv_content: &str,
    token: &str,
) -> Result<AckDto, ApiError> {
    let form = FormData::new().map_err(|_| form_error())?;
    form.append_with_str("packet_no", packet_no)
        .map_err(|_| form_error())?;
    form.append_with_str(
        "submission_date",
        &submission_date.format("%Y-%m-%d").to_string(),
    )
    .map_err(|_| form_error())?;
    form.append_with_str("csv_filename", csv_name)
        .map_err(|_| form_error())?;
    form.append_with_str("csv_file", csv_content)
        .map_err(|_| form_error())?;
    http::post_form("/planning/submit", form, Some(token)).await
}

pub async fn export_pdf(id: i64, token: &str) -> Result<Vec<u8>, ApiError> {
    http::get_bytes(&format!("/planning/{id}/pdf"), Some(token)).await
}

pub async fn export_csv(id: i64, token: &str) -> Result<Vec<u8>, ApiError> {
    http::get_bytes(&format!("/planning/{id}/csv"), Some(token)).await
}
