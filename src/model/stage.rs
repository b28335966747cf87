use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a packet row as reported by the stage endpoints.
///
/// Assigned and Submitted are the states the stage widgets create; the richer
/// variants appear on planning rows where the backend tracks report progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PacketStatus {
    Pending,
    Assigned,
    InProgress,
    OnHold,
    Submitted,
    Completed,
}

impl PacketStatus {
    /// True once the packet has finished this stage and feeds the next one.
    pub fn is_submitted(&self) -> bool {
        matches!(self, PacketStatus::Submitted | PacketStatus::Completed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PacketStatus::Pending => "Pending",
            PacketStatus::Assigned => "Assigned",
            PacketStatus::InProgress => "In Progress",
            PacketStatus::OnHold => "On Hold",
            PacketStatus::Submitted => "Submitted",
            PacketStatus::Completed => "Completed",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            PacketStatus::Pending => "badge-neutral",
            PacketStatus::Assigned => "badge-info",
            PacketStatus::InProgress => "badge-info",
            PacketStatus::OnHold => "badge-warning",
            PacketStatus::Submitted => "badge-success",
            PacketStatus::Completed => "badge-success",
        }
    }
}

/// Row shape shared by the per-stage `entries` and `eligible_*` endpoints.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct StageEntryDto {
    pub id: i64,
    pub packet_no: String,
    #[serde(default)]
    pub kapan_no: String,
    #[serde(default)]
    pub party_name: String,
    #[serde(default)]
    pub karigar_name: String,
    #[serde(default)]
    pub weight: f64,
    pub status: PacketStatus,
    pub assign_date: NaiveDate,
    #[serde(default)]
    pub submission_date: Option<NaiveDate>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Assign body; name fields are filled per the stage's counterparty policy
/// and skipped when blank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignRequestDto {
    pub packet_no: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub kapan_no: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub party_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub karigar_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub planner_name: String,
    pub weight: f64,
    pub assign_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitRequestDto {
    pub packet_no: String,
    pub submission_date: NaiveDate,
}
