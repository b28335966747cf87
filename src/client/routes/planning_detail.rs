//! Per-packet planning report with its expectation figures and the PDF and
//! CSV downloads of the uploaded plan.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::components::Page;
use crate::client::store::{SessionStore, ToastStore};

#[component]
pub fn PlanningDetail(id: i64) -> Element {
    rsx!(
        Title { "Planning Report | Hira" }
        Meta {
            name: "description",
            content: "Planning report for a single packet."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-4xl p-2",
                // Keyed so revisiting with a different id refetches.
                PlanningReport { key: "{id}", id }
            }
        }
    )
}

#[component]
fn PlanningReport(id: i64) -> Element {
    let mut session = use_context::<SessionStore>();
    let mut toasts = use_context::<ToastStore>();

    let detail = use_resource(move || async move {
        let Some(token) = session.token() else {
            return None;
        };
        match api::planning::detail(id, &token).await {
            Ok(report) => Some(report),
            Err(error) => {
                if !session.expire_if_unauthorized(&error) {
                    tracing::error!("fetching planning report {id}: {error}");
                    toasts.error(error.to_string());
                }
                None
            }
        }
    });

    // Once the report confirms a plan was uploaded, fetch both export
    // renditions and hand them to the browser as data URLs.
    let exports = use_resource(move || async move {
        let has_csv = detail
            .read_unchecked()
            .as_ref()
            .and_then(|report| report.as_ref())
            .map(|report| report.has_csv)
            .unwrap_or(false);
        let Some(token) = session.token() else {
            return None;
        };
        if !has_csv {
            return None;
        }
        let pdf = api::planning::export_pdf(id, &token).await;
        let csv = api::planning::export_csv(id, &token).await;
        match (pdf, csv) {
            (Ok(pdf), Ok(csv)) => Some((
                format!("data:application/pdf;base64,{}", STANDARD.encode(&pdf)),
                format!("data:text/csv;base64,{}", STANDARD.encode(&csv)),
            )),
            (Err(error), _) | (_, Err(error)) => {
                if !session.expire_if_unauthorized(&error) {
                    tracing::error!("fetching planning exports for {id}: {error}");
                    toasts.error(error.to_string());
                }
                None
            }
        }
    });

    let state = detail.read_unchecked().clone();
    let Some(loaded) = state else {
        return rsx!(
            div { class: "flex flex-col gap-2",
                div { class: "skeleton h-24 w-full" }
                div { class: "skeleton h-40 w-full" }
            }
        );
    };
    let Some(report) = loaded else {
        return rsx!(
            div { role: "alert", class: "alert alert-error",
                span { "This planning report could not be loaded." }
            }
        );
    };

    let badge = report.status.badge_class();
    let status = report.status.label();
    let assign_date = report.assign_date.format("%Y-%m-%d").to_string();
    let submit_date = report
        .submit_date
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());
    let kapan_wt = format!("{:.2} ct", report.kapan_wt);
    let chad_wt = format!("{:.2} ct", report.chad_wt);
    let chad_percent = format!("{:.2}%", report.chad_percent);
    let reject_wt = format!("{:.2} ct", report.reject_wt);
    let exp_wt = format!("{:.2} ct", report.exp_wt);
    let exp_percent = format!("{:.2}%", report.exp_percent);
    let r_to_pol = format!("{:.2}%", report.r_to_pol_percent);
    let pol_dollar = format!("${:.2}", report.pol_dollar);
    let pdf_name = format!("planning-{}.pdf", report.packet_no);
    let csv_name = format!("planning-{}.csv", report.packet_no);
    let downloads = exports.read_unchecked().clone().flatten();

    rsx! {
        div { class: "flex flex-col gap-4",
            div { class: "card bg-base-100 shadow-sm",
                div { class: "card-body",
                    div { class: "flex flex-wrap items-center justify-between gap-2",
                        h2 { class: "card-title font-mono", "{report.packet_no}" }
                        span { class: "badge {badge}", "{status}" }
                    }
                    div { class: "grid grid-cols-2 md:grid-cols-4 gap-2 text-sm",
                        div {
                            p { class: "opacity-60", "Planner" }
                            p { "{report.planner_name}" }
                        }
                        div {
                            p { class: "opacity-60", "Kapan" }
                            p { "{report.kapan_no}" }
                        }
                        div {
                            p { class: "opacity-60", "Assigned" }
                            p { "{assign_date}" }
                        }
                        div {
                            p { class: "opacity-60", "Submitted" }
                            p { "{submit_date}" }
                        }
                    }
                }
            }
            div { class: "stats stats-vertical md:stats-horizontal shadow w-full",
                Figure { label: "Kapan Pcs", value: "{report.kapan_pcs}" }
                Figure { label: "Kapan Wt", value: kapan_wt }
                Figure { label: "Chad Pcs", value: "{report.chad_pcs}" }
                Figure { label: "Chad Wt", value: chad_wt }
                Figure { label: "Chad %", value: chad_percent }
            }
            div { class: "stats stats-vertical md:stats-horizontal shadow w-full",
                Figure { label: "Reject Pcs", value: "{report.reject_pcs}" }
                Figure { label: "Reject Wt", value: reject_wt }
                Figure { label: "Exp Wt", value: exp_wt }
                Figure { label: "Exp %", value: exp_percent }
            }
            div { class: "stats stats-vertical md:stats-horizontal shadow w-full",
                Figure { label: "Rough to Polish", value: r_to_pol }
                Figure { label: "Polish Value", value: pol_dollar }
            }
            div { class: "card bg-base-100 shadow-sm",
                div { class: "card-body",
                    h2 { class: "card-title", "Plan Report" }
                    if !report.has_csv {
                        p { class: "text-sm opacity-70",
                            "No plan has been uploaded for this packet yet."
                        }
                    } else if let Some((pdf_href, csv_href)) = downloads {
                        div { class: "flex gap-2",
                            a {
                                class: "btn btn-primary",
                                href: "{pdf_href}",
                                download: "{pdf_name}",
                                "Download PDF"
                            }
                            a {
                                class: "btn btn-outline",
                                href: "{csv_href}",
                                download: "{csv_name}",
                                "Download CSV"
                            }
                        }
                    } else {
                        div { class: "flex gap-2",
                            button { class: "btn btn-primary", disabled: true,
                                span { class: "loading loading-spinner loading-sm" }
                                "Download PDF"
                            }
                            button { class: "btn btn-outline", disabled: true,
                                span { class: "loading loading-spinner loading-sm" }
                                "Download CSV"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Figure(label: String, value: String) -> Element {
    rsx!(
        div { class: "stat",
            div { class: "stat-title", "{label}" }
            div { class: "stat-value text-lg", "{value}" }
        }
    )
}
