use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::stage::{PacketStatus, StageEntryDto};

/// Row shape of GET /api/planning/entries
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningEntryDto {
    pub id: i64,
    pub packet_no: String,
    #[serde(default)]
    pub planner_name: String,
    #[serde(default)]
    pub kapan_no: String,
    #[serde(default)]
    pub kapan_wt: f64,
    #[serde(default)]
    pub exp_wt: f64,
    #[serde(default)]
    pub exp_percent: f64,
    #[serde(default)]
    pub pol_dollar: f64,
    pub status: PacketStatus,
    #[serde(default)]
    pub has_csv: bool,
    pub assign_date: NaiveDate,
    #[serde(default)]
    pub submit_date: Option<NaiveDate>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl PlanningEntryDto {
    /// View of a planning row in the shape the generic stage widget expects.
    /// The planner stands in for the counterparty and the kapan weight for
    /// the packet weight.
    pub fn to_stage_entry(&self) -> StageEntryDto {
        StageEntryDto {
            id: self.id,
            packet_no: self.packet_no.clone(),
            kapan_no: self.kapan_no.clone(),
            party_name: self.planner_name.clone(),
            karigar_name: String::new(),
            weight: self.kapan_wt,
            status: self.status,
            assign_date: self.assign_date,
            submission_date: self.submit_date,
            created_at: self.created_at,
        }
    }
}

/// Full report row of GET /planning/:id
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningDetailDto {
    pub id: i64,
    pub packet_no: String,
    #[serde(default)]
    pub planner_name: String,
    #[serde(default)]
    pub kapan_no: String,
    pub status: PacketStatus,
    #[serde(default)]
    pub has_csv: bool,
    pub assign_date: NaiveDate,
    #[serde(default)]
    pub submit_date: Option<NaiveDate>,
    #[serde(default)]
    pub kapan_pcs: i64,
    #[serde(default)]
    pub kapan_wt: f64,
    #[serde(default)]
    pub chad_pcs: i64,
    #[serde(default)]
    pub chad_wt: f64,
    #[serde(default)]
    pub chad_percent: f64,
    #[serde(default)]
    pub reject_pcs: i64,
    #[serde(default)]
    pub reject_wt: f64,
    #[serde(default)]
    pub exp_wt: f64,
    #[serde(default)]
    pub exp_percent: f64,
    #[serde(default)]
    pub r_to_pol_percent: f64,
    #[serde(default)]
    pub pol_dollar: f64,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
