//! Field inventory and validation for the management wizard tabs.

use crate::model::office::{NewFinalDiamondDto, NewOfficeProcessingDto};
use crate::model::stock::SaveRoughStockDto;

use super::{parse_count, parse_date, parse_percent, parse_positive, require, FormState};

/// Tabs of the management wizard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardTab {
    Stock,
    Processing,
    Office,
    Final,
    Contacts,
}

pub const WIZARD_TABS: [WizardTab; 5] = [
    WizardTab::Stock,
    WizardTab::Processing,
    WizardTab::Office,
    WizardTab::Final,
    WizardTab::Contacts,
];

impl WizardTab {
    pub fn label(&self) -> &'static str {
        match self {
            WizardTab::Stock => "Rough Stock",
            WizardTab::Processing => "Processing",
            WizardTab::Office => "Office Handover",
            WizardTab::Final => "Final Diamonds",
            WizardTab::Contacts => "Contacts",
        }
    }
}

/// Every input across the wizard tabs shares one field enum so the store can
/// keep a single form state for the whole screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardField {
    // Rough stock tab
    RoughName,
    Carat,
    Price,
    Size,
    Quality,
    Color,
    Whiteness,
    VepariName,
    VepariMobile,
    DalalName,
    DalalMobile,
    // Office handover tab
    OfficeName,
    OfficeRoughName,
    OfficeWeight,
    OfficeSize,
    NungCount,
    SendingDate,
    // Final diamonds tab
    FinalOfficeName,
    FinalRoughName,
    SubmitDate,
    Topi,
    Patti,
    Simcard,
    TotalWeight,
    FinalSize,
}

pub const STOCK_FIELDS: [WizardField; 11] = [
    WizardField::RoughName,
    WizardField::Carat,
    WizardField::Price,
    WizardField::Size,
    WizardField::Quality,
    WizardField::Color,
    WizardField::Whiteness,
    WizardField::VepariName,
    WizardField::VepariMobile,
    WizardField::DalalName,
    WizardField::DalalMobile,
];

pub const OFFICE_FIELDS: [WizardField; 6] = [
    WizardField::OfficeName,
    WizardField::OfficeRoughName,
    WizardField::OfficeWeight,
    WizardField::OfficeSize,
    WizardField::NungCount,
    WizardField::SendingDate,
];

pub const FINAL_FIELDS: [WizardField; 8] = [
    WizardField::FinalOfficeName,
    WizardField::FinalRoughName,
    WizardField::SubmitDate,
    WizardField::Topi,
    WizardField::Patti,
    WizardField::Simcard,
    WizardField::TotalWeight,
    WizardField::FinalSize,
];

/// Validates the rough stock tab.
pub fn validate_stock(
    form: &FormState<WizardField>,
) -> Result<SaveRoughStockDto, Vec<(WizardField, String)>> {
    let mut errors = Vec::new();

    let rough_name = match require(form.value(WizardField::RoughName), "Rough name") {
        Ok(value) => {
            if value.len() < 3 {
                errors.push((
                    WizardField::RoughName,
                    "Rough name must be at least 3 characters".to_string(),
                ));
            }
            value
        }
        Err(message) => {
            errors.push((WizardField::RoughName, message));
            String::new()
        }
    };
    let weight_carat = match parse_positive(form.value(WizardField::Carat), "Weight") {
        Ok(value) => value,
        Err(message) => {
            errors.push((WizardField::Carat, message));
            0.0
        }
    };
    let purchase_price = match parse_positive(form.value(WizardField::Price), "Purchase price") {
        Ok(value) => value,
        Err(message) => {
            errors.push((WizardField::Price, message));
            0.0
        }
    };
    let color_percent = match parse_percent(form.value(WizardField::Color), "Color", true) {
        Ok(value) => value.unwrap_or(0.0),
        Err(message) => {
            errors.push((WizardField::Color, message));
            0.0
        }
    };
    let whiteness_percent = match parse_percent(form.value(WizardField::Whiteness), "Whiteness", false)
    {
        Ok(value) => value,
        Err(message) => {
            errors.push((WizardField::Whiteness, message));
            None
        }
    };
    let vepari_name = match require(form.value(WizardField::VepariName), "Vepari name") {
        Ok(value) => value,
        Err(message) => {
            errors.push((WizardField::VepariName, message));
            String::new()
        }
    };
    let dalal_name = match require(form.value(WizardField::DalalName), "Dalal name") {
        Ok(value) => value,
        Err(message) => {
            errors.push((WizardField::DalalName, message));
            String::new()
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(SaveRoughStockDto {
        rough_name,
        purchase_price,
        weight_carat,
        size: form.value(WizardField::Size).trim().to_string(),
        quality: form.value(WizardField::Quality).trim().to_string(),
        color_percent,
        whiteness_percent,
        vepari_name,
        vepari_mobile: form.value(WizardField::VepariMobile).trim().to_string(),
        dalal_name,
        dalal_mobile: form.value(WizardField::DalalMobile).trim().to_string(),
    })
}

/// Validates the office handover tab.
pub fn validate_office(
    form: &FormState<WizardField>,
) -> Result<NewOfficeProcessingDto, Vec<(WizardField, String)>> {
    let mut errors = Vec::new();

    let office_name = match require(form.value(WizardField::OfficeName), "Office name") {
        Ok(value) => value,
        Err(message) => {
            errors.push((WizardField::OfficeName, message));
            String::new()
        }
    };
    let rough_name = match require(form.value(WizardField::OfficeRoughName), "Rough name") {
        Ok(value) => value,
        Err(message) => {
            errors.push((WizardField::OfficeRoughName, message));
            String::new()
        }
    };
    let weight = match parse_positive(form.value(WizardField::OfficeWeight), "Weight") {
        Ok(value) => value,
        Err(message) => {
            errors.push((WizardField::OfficeWeight, message));
            0.0
        }
    };
    let nung_count = match parse_count(form.value(WizardField::NungCount), "Nung count", 1) {
        Ok(value) => value,
        Err(message) => {
            errors.push((WizardField::NungCount, message));
            0
        }
    };
    let sending_date = match parse_date(form.value(WizardField::SendingDate), "Sending date") {
        Ok(value) => value,
        Err(message) => {
            errors.push((WizardField::SendingDate, message));
            Default::default()
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewOfficeProcessingDto {
        office_name,
        rough_name,
        weight,
        size: form.value(WizardField::OfficeSize).trim().to_string(),
        nung_count,
        sending_date,
    })
}

/// Validates the final diamonds tab.
pub fn validate_final(
    form: &FormState<WizardField>,
) -> Result<NewFinalDiamondDto, Vec<(WizardField, String)>> {
    let mut errors = Vec::new();

    let office_name = match require(form.value(WizardField::FinalOfficeName), "Office name") {
        Ok(value) => value,
        Err(message) => {
            errors.push((WizardField::FinalOfficeName, message));
            String::new()
        }
    };
    let rough_name = match require(form.value(WizardField::FinalRoughName), "Rough name") {
        Ok(value) => value,
        Err(message) => {
            errors.push((WizardField::FinalRoughName, message));
            String::new()
        }
    };
    let submit_date = match parse_date(form.value(WizardField::SubmitDate), "Submit date") {
        Ok(value) => value,
        Err(message) => {
            errors.push((WizardField::SubmitDate, message));
            Default::default()
        }
    };
    let mut count = |field, label| match parse_count(form.value(field), label, 0) {
        Ok(value) => value,
        Err(message) => {
            errors.push((field, message));
            0
        }
    };
    let topi = count(WizardField::Topi, "Topi count");
    let patti = count(WizardField::Patti, "Patti count");
    let simcard = count(WizardField::Simcard, "Simcard count");
    let total_weight = match parse_positive(form.value(WizardField::TotalWeight), "Total weight") {
        Ok(value) => value,
        Err(message) => {
            errors.push((WizardField::TotalWeight, message));
            0.0
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewFinalDiamondDto {
        office_name,
        rough_name,
        submit_date,
        topi,
        patti,
        simcard,
        total_weight,
        size: form.value(WizardField::FinalSize).trim().to_string(),
    })
}
