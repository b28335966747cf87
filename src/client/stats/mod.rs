//! Derived views over fetched collections: dashboard chart inputs, inventory
//! search and pagination, and transaction filters. All pure so the screens
//! stay thin.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::office::OfficeProcessingDto;
use crate::model::stock::{RoughStockDto, StockStatus};

#[cfg(test)]
mod tests;

/// Labels of the weight histogram, one per band.
pub const WEIGHT_BANDS: [&str; 5] = ["0-1ct", "1-2ct", "2-5ct", "5-10ct", "10ct+"];

/// Buckets stones by purchase weight into the fixed bands.
pub fn weight_histogram(stocks: &[RoughStockDto]) -> [u32; 5] {
    let mut bands = [0u32; 5];
    for stock in stocks {
        let band = if stock.weight_carat <= 1.0 {
            0
        } else if stock.weight_carat <= 2.0 {
            1
        } else if stock.weight_carat <= 5.0 {
            2
        } else if stock.weight_carat <= 10.0 {
            3
        } else {
            4
        };
        bands[band] += 1;
    }
    bands
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBreakdown {
    pub in_progress: i64,
    pub completed: i64,
    pub pending: i64,
}

/// Splits the stock count into the three states shown by the donut. Pending
/// is whatever the reported counts leave over.
pub fn status_breakdown(total: i64, in_progress: i64, completed: i64) -> StatusBreakdown {
    StatusBreakdown {
        in_progress,
        completed,
        pending: total - in_progress - completed,
    }
}

/// Stone counts per quality grade, alphabetically. Ungraded stones count
/// under "Unknown".
pub fn quality_counts(stocks: &[RoughStockDto]) -> Vec<(String, u32)> {
    let mut counts: BTreeMap<String, u32> = BTreeMap::new();
    for stock in stocks {
        let quality = if stock.quality.trim().is_empty() {
            "Unknown".to_string()
        } else {
            stock.quality.trim().to_string()
        };
        *counts.entry(quality).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

pub fn total_remaining_weight(stocks: &[RoughStockDto]) -> f64 {
    stocks.iter().map(|stock| stock.remaining_weight).sum()
}

/// Badge color for a pending office submission, by how long it has waited.
pub fn pending_days_badge(days: i64) -> &'static str {
    if days > 7 {
        "badge-error"
    } else if days > 3 {
        "badge-warning"
    } else {
        "badge-success"
    }
}

/// Case-insensitive search across the fields shown in the inventory table.
/// An empty query keeps everything.
pub fn filter_inventory(stocks: &[RoughStockDto], query: &str) -> Vec<RoughStockDto> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return stocks.to_vec();
    }
    stocks
        .iter()
        .filter(|stock| {
            [
                &stock.rough_name,
                &stock.vepari_name,
                &stock.dalal_name,
                &stock.quality,
                &stock.size,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Number of pages needed for `len` items; never less than one so the pager
/// always has a current page to show.
pub fn page_count(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page).max(1)
}

/// Clamps a 1-based page index into range after the item count changed.
pub fn clamp_page(page: usize, len: usize, per_page: usize) -> usize {
    page.clamp(1, page_count(len, per_page))
}

/// The slice of items on a 1-based page.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Vec<T> {
    let start = (page.saturating_sub(1)) * per_page;
    items
        .iter()
        .skip(start)
        .take(per_page)
        .cloned()
        .collect()
}

/// Transaction list filters: calendar day of the purchase and stone status.
/// Rows without a recorded date only survive when no day filter is set.
pub fn filter_transactions(
    stocks: &[RoughStockDto],
    day: Option<NaiveDate>,
    status: Option<StockStatus>,
) -> Vec<RoughStockDto> {
    stocks
        .iter()
        .filter(|stock| match day {
            Some(day) => stock
                .created_date
                .map(|created| created.date() == day)
                .unwrap_or(false),
            None => true,
        })
        .filter(|stock| match status {
            Some(status) => stock.status == Some(status),
            None => true,
        })
        .cloned()
        .collect()
}

/// Distinct rough names in stock, in first-seen order.
pub fn stock_names(stocks: &[RoughStockDto]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for stock in stocks {
        if !names.contains(&stock.rough_name) {
            names.push(stock.rough_name.clone());
        }
    }
    names
}

/// Distinct office names, in first-seen order.
pub fn office_names(handovers: &[OfficeProcessingDto]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for handover in handovers {
        if !names.contains(&handover.office_name) {
            names.push(handover.office_name.clone());
        }
    }
    names
}

/// Distinct rough names handed to one office, in first-seen order.
pub fn office_rough_names(handovers: &[OfficeProcessingDto], office: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for handover in handovers {
        if handover.office_name == office && !names.contains(&handover.rough_name) {
            names.push(handover.rough_name.clone());
        }
    }
    names
}
