//! Transactions panel: purchase history filtered by day and status.

use chrono::NaiveDate;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::stats;
use crate::client::store::{SessionStore, ToastStore};
use crate::model::stock::StockStatus;

fn parse_status(value: &str) -> Option<StockStatus> {
    match value {
        "pending" => Some(StockStatus::Pending),
        "in_progress" => Some(StockStatus::InProgress),
        "completed" => Some(StockStatus::Completed),
        "rejected" => Some(StockStatus::Rejected),
        _ => None,
    }
}

#[component]
pub fn TransactionsPanel() -> Element {
    let mut session = use_context::<SessionStore>();
    let mut toasts = use_context::<ToastStore>();

    let mut day_input = use_signal(String::new);
    let mut status_input = use_signal(String::new);

    let stocks = use_resource(move || async move {
        let Some(token) = session.token() else {
            return Vec::new();
        };
        match api::stock::list(&token).await {
            Ok(rows) => rows,
            Err(error) => {
                if !session.expire_if_unauthorized(&error) {
                    tracing::error!("fetching transactions: {error}");
                    toasts.error(error.to_string());
                }
                Vec::new()
            }
        }
    });

    let loading = stocks.read_unchecked().is_none();
    let all_rows = stocks.read_unchecked().clone().unwrap_or_default();
    let day = NaiveDate::parse_from_str(&day_input(), "%Y-%m-%d").ok();
    let status = parse_status(&status_input());
    let rows = stats::filter_transactions(&all_rows, day, status);

    rsx! {
        div { class: "flex flex-col gap-4",
            div { class: "card bg-base-100 shadow-sm",
                div { class: "card-body",
                    div { class: "flex flex-wrap items-center justify-between gap-2",
                        h2 { class: "card-title", "Transactions" }
                        div { class: "flex gap-2",
                            input {
                                class: "input input-bordered input-sm",
                                r#type: "date",
                                value: day_input(),
                                oninput: move |evt: FormEvent| day_input.set(evt.value()),
                            }
                            select {
                                class: "select select-bordered select-sm",
                                value: status_input(),
                                onchange: move |evt: FormEvent| status_input.set(evt.value()),
                                option { value: "", "All Statuses" }
                                option { value: "pending", "Pending" }
                                option { value: "in_progress", "In Progress" }
                                option { value: "completed", "Completed" }
                                option { value: "rejected", "Rejected" }
                            }
                        }
                    }
                }
            }
            if loading {
                div { class: "flex flex-col gap-2",
                    div { class: "skeleton h-24 w-full" }
                    div { class: "skeleton h-24 w-full" }
                }
            } else if rows.is_empty() {
                div { class: "card bg-base-100 shadow-sm",
                    div { class: "card-body",
                        p { class: "text-sm opacity-70", "No purchases match the filters." }
                    }
                }
            } else {
                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-4",
                    {rows.iter().map(|row| {
                        let status = row
                            .status
                            .map(|status| (status.badge_class(), status.label()));
                        let purchased = row
                            .created_date
                            .map(|at| at.format("%Y-%m-%d").to_string())
                            .unwrap_or_else(|| "-".to_string());
                        let price = format!("{:.2}", row.purchase_price);
                        rsx!(
                            div { class: "card bg-base-100 shadow-sm",
                                div { class: "card-body",
                                    div { class: "flex items-center justify-between",
                                        h3 { class: "font-semibold", "{row.rough_name}" }
                                        if let Some((badge, label)) = status {
                                            span { class: "badge {badge}", "{label}" }
                                        } else {
                                            span { class: "badge badge-neutral", "Pending" }
                                        }
                                    }
                                    div { class: "grid grid-cols-2 gap-2 text-sm",
                                        div {
                                            p { class: "opacity-60", "Vepari" }
                                            p { "{row.vepari_name}" }
                                        }
                                        div {
                                            p { class: "opacity-60", "Dalal" }
                                            p { "{row.dalal_name}" }
                                        }
                                        div {
                                            p { class: "opacity-60", "Weight" }
                                            p { "{row.weight_carat} ct" }
                                        }
                                        div {
                                            p { class: "opacity-60", "Price" }
                                            p { "{price}" }
                                        }
                                        div {
                                            p { class: "opacity-60", "Purchased" }
                                            p { "{purchased}" }
                                        }
                                        div {
                                            p { class: "opacity-60", "Quality" }
                                            p { "{row.quality}" }
                                        }
                                    }
                                }
                            }
                        )
                    })}
                }
            }
        }
    }
}
