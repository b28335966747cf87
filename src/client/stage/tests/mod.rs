mod candidates;
mod validate_assign;
mod validate_submit;

use chrono::NaiveDate;

use crate::model::stage::{PacketStatus, StageEntryDto};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn entry(packet_no: &str, status: PacketStatus) -> StageEntryDto {
    StageEntryDto {
        id: 1,
        packet_no: packet_no.to_string(),
        kapan_no: "K-12".to_string(),
        party_name: "Mehta Gems".to_string(),
        karigar_name: String::new(),
        weight: 4.2,
        status,
        assign_date: date(2025, 3, 1),
        submission_date: None,
        created_at: None,
    }
}
