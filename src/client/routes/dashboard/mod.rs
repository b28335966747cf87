//! Admin dashboard: overview charts plus the inventory, processing log,
//! and transaction panels.

use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::components::{BarChart, DonutChart, Page};
use crate::client::stats;
use crate::client::store::{SessionStore, ToastStore};

mod inventory;
mod logs;
mod transactions;

use inventory::InventoryPanel;
use logs::LogsPanel;
use transactions::TransactionsPanel;

#[derive(Clone, Copy, PartialEq, Eq)]
enum DashboardTab {
    Overview,
    Inventory,
    Logs,
    Transactions,
}

const DASHBOARD_TABS: [DashboardTab; 4] = [
    DashboardTab::Overview,
    DashboardTab::Inventory,
    DashboardTab::Logs,
    DashboardTab::Transactions,
];

impl DashboardTab {
    fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Inventory => "Inventory",
            DashboardTab::Logs => "Processing Logs",
            DashboardTab::Transactions => "Transactions",
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let mut active = use_signal(|| DashboardTab::Overview);

    let current = active();
    let body = match current {
        DashboardTab::Overview => rsx!(OverviewPanel {}),
        DashboardTab::Inventory => rsx!(InventoryPanel {}),
        DashboardTab::Logs => rsx!(LogsPanel {}),
        DashboardTab::Transactions => rsx!(TransactionsPanel {}),
    };

    rsx! {
        Title { "Dashboard | Hira" }
        Meta {
            name: "description",
            content: "Inventory, processing logs, transactions, and stock charts."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col md:flex-row gap-4 p-2",
                ul { class: "menu bg-base-200 rounded-box md:w-52 menu-horizontal md:menu-vertical",
                    {DASHBOARD_TABS.iter().map(|entry| {
                        let tab = *entry;
                        let label = tab.label();
                        let link_class = if tab == current { "active" } else { "" };
                        rsx!(
                            li {
                                button {
                                    class: link_class,
                                    onclick: move |_| active.set(tab),
                                    "{label}"
                                }
                            }
                        )
                    })}
                }
                div { class: "flex-1 min-w-0",
                    {body}
                }
            }
        }
    }
}

/// Stat card used across the overview row.
#[component]
fn StatCard(title: String, value: String, detail: Option<String>) -> Element {
    rsx!(
        div { class: "stats shadow w-full",
            div { class: "stat",
                div { class: "stat-title", "{title}" }
                div { class: "stat-value text-2xl", "{value}" }
                if let Some(detail) = detail {
                    div { class: "stat-desc", "{detail}" }
                }
            }
        }
    )
}

#[component]
fn OverviewPanel() -> Element {
    let mut session = use_context::<SessionStore>();
    let mut toasts = use_context::<ToastStore>();

    let stats_res = use_resource(move || async move {
        let Some(token) = session.token() else {
            return None;
        };
        match api::stock::dashboard_stats(&token).await {
            Ok(stats) => Some(stats),
            Err(error) => {
                if !session.expire_if_unauthorized(&error) {
                    tracing::error!("fetching dashboard stats: {error}");
                    toasts.error(error.to_string());
                }
                None
            }
        }
    });

    let state = stats_res.read_unchecked().clone();
    let Some(loaded) = state else {
        return rsx!(
            div { class: "flex flex-col gap-2",
                div { class: "skeleton h-24 w-full" }
                div { class: "skeleton h-64 w-full" }
            }
        );
    };
    let Some(data) = loaded else {
        return rsx!(
            div { role: "alert", class: "alert alert-error",
                span { "The dashboard could not be loaded." }
            }
        );
    };

    let stock_count = data.stocks.len();
    let total_weight = format!("{:.2} ct", stats::total_remaining_weight(&data.stocks));
    let stone_detail = format!("{stock_count} stones in stock");
    let in_progress = data.in_progress_count.to_string();
    let completed = data.completed_count.to_string();
    let final_weight = format!("{:.2} ct", data.final_weight_total);

    let histogram = stats::weight_histogram(&data.stocks);
    let weight_labels: Vec<String> = stats::WEIGHT_BANDS
        .iter()
        .map(|band| band.to_string())
        .collect();

    let breakdown = stats::status_breakdown(
        stock_count as i64,
        data.in_progress_count,
        data.completed_count,
    );
    let status_labels = vec![
        "In Progress".to_string(),
        "Completed".to_string(),
        "Pending".to_string(),
    ];
    let status_values = vec![
        breakdown.in_progress.max(0) as u32,
        breakdown.completed.max(0) as u32,
        breakdown.pending.max(0) as u32,
    ];

    let (quality_labels, quality_values): (Vec<String>, Vec<u32>) =
        stats::quality_counts(&data.stocks).into_iter().unzip();

    rsx! {
        div { class: "flex flex-col gap-4",
            div { class: "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-4",
                StatCard {
                    title: "Total Stock Weight",
                    value: total_weight,
                    detail: stone_detail,
                }
                StatCard { title: "In Progress", value: in_progress }
                StatCard { title: "Completed Orders", value: completed }
                StatCard { title: "Total Final Weight", value: final_weight }
            }
            div { class: "grid grid-cols-1 xl:grid-cols-2 gap-4",
                div { class: "card bg-base-100 shadow-sm",
                    div { class: "card-body",
                        h2 { class: "card-title", "Stock by Weight" }
                        BarChart { labels: weight_labels, values: histogram.to_vec() }
                    }
                }
                div { class: "card bg-base-100 shadow-sm",
                    div { class: "card-body",
                        h2 { class: "card-title", "Stock by Status" }
                        DonutChart { labels: status_labels, values: status_values }
                    }
                }
            }
            div { class: "card bg-base-100 shadow-sm",
                div { class: "card-body",
                    h2 { class: "card-title", "Stock by Quality" }
                    BarChart { labels: quality_labels, values: quality_values }
                }
            }
            div { class: "card bg-base-100 shadow-sm",
                div { class: "card-body",
                    h2 { class: "card-title", "Pending Office Submissions" }
                    if data.pending_submissions.is_empty() {
                        p { class: "text-sm opacity-70", "Nothing is waiting on an office." }
                    } else {
                        div { class: "overflow-x-auto",
                            table { class: "table table-md",
                                thead {
                                    tr {
                                        th { "Office" }
                                        th { "Rough" }
                                        th { "Weight (ct)" }
                                        th { "Given" }
                                        th { "Waiting" }
                                    }
                                }
                                tbody {
                                    {data.pending_submissions.iter().map(|row| {
                                        let badge = stats::pending_days_badge(row.days_pending);
                                        let given = row
                                            .given_date
                                            .map(|date| date.format("%Y-%m-%d").to_string())
                                            .unwrap_or_else(|| "-".to_string());
                                        let waiting = format!("{} days", row.days_pending);
                                        rsx!(
                                            tr {
                                                td { "{row.office_name}" }
                                                td { "{row.rough_name}" }
                                                td { "{row.weight}" }
                                                td { "{given}" }
                                                td {
                                                    span { class: "badge {badge}", "{waiting}" }
                                                }
                                            }
                                        )
                                    })}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
