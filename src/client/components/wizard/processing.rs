//! Processing tab: one sub-tab per pipeline stage, all rendered by the
//! generic stage panel. The planning stage additionally lists its report
//! rows with links to the per-packet detail page.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::components::StagePanel;
use crate::client::router::Route;
use crate::client::stage::config::{StageId, STAGES};
use crate::client::store::{SessionStore, ToastStore};

#[component]
pub fn ProcessingTabs() -> Element {
    let mut active = use_signal(|| StageId::NungSeparation);

    let active_id = active();
    let active_title = active_id.config().title;

    rsx! {
        div { class: "flex flex-col gap-4",
            div { role: "tablist", class: "tabs tabs-boxed flex-wrap",
                {STAGES.iter().map(|stage| {
                    let tab_class = if stage.id == active_id {
                        "tab tab-active"
                    } else {
                        "tab"
                    };
                    let id = stage.id;
                    rsx!(
                        button {
                            role: "tab",
                            class: tab_class,
                            onclick: move |_| active.set(id),
                            "{stage.title}"
                        }
                    )
                })}
            }
            // Keyed on the stage so switching tabs remounts the panel and
            // its resources instead of reusing stale ones.
            StagePanel { key: "{active_title}", stage_id: active_id }
            if active_id == StageId::Planning {
                PlanningReports {}
            }
        }
    }
}

/// Planning rows with their expectation figures and report links.
#[component]
fn PlanningReports() -> Element {
    let mut session = use_context::<SessionStore>();
    let mut toasts = use_context::<ToastStore>();

    let entries = use_resource(move || async move {
        let Some(token) = session.token() else {
            return Vec::new();
        };
        match api::planning::entries(&token).await {
            Ok(rows) => rows,
            Err(error) => {
                if !session.expire_if_unauthorized(&error) {
                    tracing::error!("fetching planning entries: {error}");
                    toasts.error(error.to_string());
                }
                Vec::new()
            }
        }
    });

    let loading = entries.read_unchecked().is_none();
    let rows = entries.read_unchecked().clone().unwrap_or_default();

    rsx! {
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "Planning Reports" }
                if loading {
                    div { class: "flex flex-col gap-2",
                        div { class: "skeleton h-8 w-full" }
                        div { class: "skeleton h-8 w-full" }
                        div { class: "skeleton h-8 w-full" }
                    }
                } else if rows.is_empty() {
                    p { class: "text-sm opacity-70", "No planning packets recorded yet." }
                } else {
                    div { class: "overflow-x-auto",
                        table { class: "table table-md",
                            thead {
                                tr {
                                    th { "Packet" }
                                    th { "Planner" }
                                    th { "Kapan" }
                                    th { "Exp Wt (ct)" }
                                    th { "Exp %" }
                                    th { "Pol $" }
                                    th { "Status" }
                                    th { "Report" }
                                    th {}
                                }
                            }
                            tbody {
                                {rows.iter().map(|row| {
                                    let badge = row.status.badge_class();
                                    let status = row.status.label();
                                    let report = if row.has_csv { "Yes" } else { "No" };
                                    rsx!(
                                        tr {
                                            td { class: "font-mono", "{row.packet_no}" }
                                            td { "{row.planner_name}" }
                                            td { "{row.kapan_no}" }
                                            td { "{row.exp_wt}" }
                                            td { "{row.exp_percent}" }
                                            td { "{row.pol_dollar}" }
                                            td { span { class: "badge {badge}", "{status}" } }
                                            td { "{report}" }
                                            td {
                                                Link {
                                                    class: "btn btn-ghost btn-xs",
                                                    to: Route::PlanningDetail { id: row.id },
                                                    "View"
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
        }
    }
}
