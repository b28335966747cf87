mod filter_inventory;
mod filter_transactions;
mod offices;
mod pagination;
mod quality_counts;
mod status;
mod weight_histogram;

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::office::OfficeProcessingDto;
use crate::model::stock::{RoughStockDto, StockStatus};

fn stock(rough_name: &str, weight_carat: f64) -> RoughStockDto {
    RoughStockDto {
        id: 1,
        rough_name: rough_name.to_string(),
        purchase_price: 100000.0,
        weight_carat,
        size: String::new(),
        quality: String::new(),
        color_percent: 70.0,
        whiteness_percent: None,
        vepari_name: "Mehta Gems".to_string(),
        vepari_mobile: String::new(),
        dalal_name: "R. Shah".to_string(),
        dalal_mobile: String::new(),
        remaining_weight: weight_carat,
        status: None,
        created_date: None,
    }
}

fn dated_stock(rough_name: &str, status: StockStatus, created: NaiveDateTime) -> RoughStockDto {
    RoughStockDto {
        status: Some(status),
        created_date: Some(created),
        ..stock(rough_name, 3.0)
    }
}

fn at_noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 30, 0)
        .unwrap()
}

fn handover(office_name: &str, rough_name: &str) -> OfficeProcessingDto {
    OfficeProcessingDto {
        id: 1,
        office_name: office_name.to_string(),
        rough_name: rough_name.to_string(),
        weight: 5.0,
        size: String::new(),
        nung_count: 4,
        sending_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
    }
}
