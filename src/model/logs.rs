use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Audit row from GET /api/processing-logs; `details` is a free-form object
/// of stage-specific key/value pairs.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingLogDto {
    pub id: i64,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub process_type: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub packet_no: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
