//! Pure form logic behind the stage panel: assign/submit validation against
//! a stage's rules and derivation of the selectable packet lists.

use chrono::NaiveDate;

use crate::client::form::{parse_date, parse_positive, require, FormState};
use crate::model::stage::{AssignRequestDto, StageEntryDto, SubmitRequestDto};

use super::config::{CounterpartyRule, StageConfig};

/// Inputs of the assign form. Party doubles as the planner input on stages
/// whose counterparty is a planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignField {
    Packet,
    Kapan,
    Party,
    Karigar,
    Weight,
    AssignDate,
}

pub const ASSIGN_FIELDS: [AssignField; 6] = [
    AssignField::Packet,
    AssignField::Kapan,
    AssignField::Party,
    AssignField::Karigar,
    AssignField::Weight,
    AssignField::AssignDate,
];

/// Inputs of the submit form. CsvFile holds the chosen file's name and is
/// only consulted on stages that upload a plan report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmitField {
    Packet,
    SubmissionDate,
    CsvFile,
}

pub const SUBMIT_FIELDS: [SubmitField; 3] = [
    SubmitField::Packet,
    SubmitField::SubmissionDate,
    SubmitField::CsvFile,
];

/// Validates the assign form against the stage's counterparty rule.
///
/// The assign date may not lie in the future. On planner stages the party
/// input is carried in the request's planner field instead.
pub fn validate_assign(
    config: &StageConfig,
    form: &FormState<AssignField>,
    today: NaiveDate,
) -> Result<AssignRequestDto, Vec<(AssignField, String)>> {
    let mut errors = Vec::new();

    let packet_no = match require(form.value(AssignField::Packet), "Packet number") {
        Ok(value) => value,
        Err(message) => {
            errors.push((AssignField::Packet, message));
            String::new()
        }
    };
    let weight = match parse_positive(form.value(AssignField::Weight), "Weight") {
        Ok(value) => value,
        Err(message) => {
            errors.push((AssignField::Weight, message));
            0.0
        }
    };
    let assign_date = match parse_date(form.value(AssignField::AssignDate), "Assign date") {
        Ok(date) => {
            if date > today {
                errors.push((
                    AssignField::AssignDate,
                    "Assign date cannot be in the future".to_string(),
                ));
            }
            date
        }
        Err(message) => {
            errors.push((AssignField::AssignDate, message));
            today
        }
    };

    let kapan_no = form.value(AssignField::Kapan).trim().to_string();
    let party = form.value(AssignField::Party).trim().to_string();
    let karigar_name = form.value(AssignField::Karigar).trim().to_string();

    if config.counterparty.has_kapan() && kapan_no.is_empty() {
        errors.push((AssignField::Kapan, "Kapan number is required".to_string()));
    }
    match config.counterparty {
        CounterpartyRule::Party | CounterpartyRule::KapanAndParty => {
            if party.is_empty() {
                errors.push((AssignField::Party, "Party name is required".to_string()));
            }
        }
        CounterpartyRule::Planner => {
            if party.is_empty() {
                errors.push((AssignField::Party, "Planner name is required".to_string()));
            }
        }
        CounterpartyRule::KapanAndPartyOrKarigar => {
            if party.is_empty() && karigar_name.is_empty() {
                errors.push((
                    AssignField::Party,
                    "Enter a party or karigar name".to_string(),
                ));
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let (party_name, planner_name) = if config.counterparty == CounterpartyRule::Planner {
        (String::new(), party)
    } else {
        (party, String::new())
    };

    Ok(AssignRequestDto {
        packet_no,
        kapan_no,
        party_name,
        karigar_name,
        planner_name,
        weight,
        assign_date,
    })
}

/// Validates the submit form.
///
/// The submission date must fall between the packet's recorded assign date
/// and today. Stages with a plan upload also require a chosen CSV file.
pub fn validate_submit(
    config: &StageConfig,
    form: &FormState<SubmitField>,
    assigned_on: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<SubmitRequestDto, Vec<(SubmitField, String)>> {
    let mut errors = Vec::new();

    let packet_no = match require(form.value(SubmitField::Packet), "Packet number") {
        Ok(value) => value,
        Err(message) => {
            errors.push((SubmitField::Packet, message));
            String::new()
        }
    };
    let submission_date =
        match parse_date(form.value(SubmitField::SubmissionDate), "Submission date") {
            Ok(date) => {
                if let Some(assigned) = assigned_on {
                    if date < assigned {
                        errors.push((
                            SubmitField::SubmissionDate,
                            "Submission date cannot be before the assign date".to_string(),
                        ));
                    }
                }
                if date > today {
                    errors.push((
                        SubmitField::SubmissionDate,
                        "Submission date cannot be in the future".to_string(),
                    ));
                }
                date
            }
            Err(message) => {
                errors.push((SubmitField::SubmissionDate, message));
                today
            }
        };
    if config.csv_upload && form.value(SubmitField::CsvFile).trim().is_empty() {
        errors.push((
            SubmitField::CsvFile,
            "A CSV plan file is required".to_string(),
        ));
    }

    if errors.is_empty() {
        Ok(SubmitRequestDto {
            packet_no,
            submission_date,
        })
    } else {
        Err(errors)
    }
}

/// Packets offered by the assign dropdown: upstream-completed packets that
/// have no row at this stage yet.
pub fn assign_candidates(
    eligible: &[StageEntryDto],
    entries: &[StageEntryDto],
) -> Vec<StageEntryDto> {
    eligible
        .iter()
        .filter(|candidate| {
            !entries
                .iter()
                .any(|entry| entry.packet_no == candidate.packet_no)
        })
        .cloned()
        .collect()
}

/// Packets offered by the submit dropdown: rows at this stage that have not
/// been submitted.
pub fn submit_candidates(entries: &[StageEntryDto]) -> Vec<StageEntryDto> {
    entries
        .iter()
        .filter(|entry| !entry.status.is_submitted())
        .cloned()
        .collect()
}

pub fn eligible_row<'a>(
    eligible: &'a [StageEntryDto],
    packet_no: &str,
) -> Option<&'a StageEntryDto> {
    eligible.iter().find(|entry| entry.packet_no == packet_no)
}

/// The assign date recorded for a packet at this stage, for submit-date
/// validation.
pub fn recorded_assign_date(entries: &[StageEntryDto], packet_no: &str) -> Option<NaiveDate> {
    entries
        .iter()
        .find(|entry| entry.packet_no == packet_no)
        .map(|entry| entry.assign_date)
}
