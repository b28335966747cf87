//! Endpoint wrappers generic over the stage registry.
//!
//! Planning entries come back in the richer planning row shape; they are
//! narrowed to the common stage shape here so the panel never branches on
//! the stage it is rendering.

use crate::client::stage::config::{StageConfig, StageId};
use crate::model::api::AckDto;
use crate::model::planning::PlanningEntryDto;
use crate::model::stage::{AssignRequestDto, StageEntryDto, SubmitRequestDto};

use super::{error::ApiError, http};

pub async fn entries(stage: &StageConfig, token: &str) -> Result<Vec<StageEntryDto>, ApiError> {
    if stage.id == StageId::Planning {
        let rows: Vec<PlanningEntryDto> =
            http::get_json_or_default(stage.entries_path, Some(token)).await?;
        return Ok(rows.iter().map(PlanningEntryDto::to_stage_entry).collect());
    }
    http::get_json_or_default(stage.entries_path, Some(token)).await
}

pub async fn eligible(stage: &StageConfig, token: &str) -> Result<Vec<StageEntryDto>, ApiError> {
    http::get_json_or_default(stage.eligible_path, Some(token)).await
}

pub async fn assign(
    stage: &StageConfig,
    body: &AssignRequestDto,
    token: &str,
) -> Result<AckDto, ApiError> {
    http::post_json(stage.assign_path, body, Some(token)).await
}

pub async fn submit(
    stage: &StageConfig,
    body: &SubmitRequestDto,
    token: &str,
) -> Result<AckDto, ApiError> {
    http::post_json(stage.submit_path, body, Some(token)).await
}
