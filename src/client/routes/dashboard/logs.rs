//! Processing log panel. Non-admin tokens get a 403 here, which renders as
//! an in-place notice instead of a toast.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::store::SessionStore;

fn details_text(details: &serde_json::Value) -> String {
    match details {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Object(map) => map
            .iter()
            .map(|(key, value)| match value {
                serde_json::Value::String(text) => format!("{key}: {text}"),
                other => format!("{key}: {other}"),
            })
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

#[component]
pub fn LogsPanel() -> Element {
    let mut session = use_context::<SessionStore>();

    let logs = use_resource(move || async move {
        let Some(token) = session.token() else {
            return Ok(Vec::new());
        };
        match api::logs::list(&token).await {
            Ok(rows) => Ok(rows),
            Err(error) => {
                if session.expire_if_unauthorized(&error) {
                    return Ok(Vec::new());
                }
                if !error.is_forbidden() {
                    tracing::error!("fetching processing logs: {error}");
                }
                Err(error)
            }
        }
    });

    rsx! {
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "Processing Logs" }
                match &*logs.read_unchecked() {
                    None => rsx!(
                        div { class: "flex flex-col gap-2",
                            div { class: "skeleton h-8 w-full" }
                            div { class: "skeleton h-8 w-full" }
                            div { class: "skeleton h-8 w-full" }
                        }
                    ),
                    Some(Err(error)) if error.is_forbidden() => rsx!(
                        div { role: "alert", class: "alert",
                            span { "You don't have permission to view this data." }
                        }
                    ),
                    Some(Err(error)) => {
                        let message = error.to_string();
                        rsx!(
                            div { role: "alert", class: "alert alert-error",
                                span { "{message}" }
                            }
                        )
                    }
                    Some(Ok(rows)) if rows.is_empty() => rsx!(
                        p { class: "text-sm opacity-70", "No processing activity recorded yet." }
                    ),
                    Some(Ok(rows)) => rsx!(
                        div { class: "overflow-x-auto",
                            table { class: "table table-md",
                                thead {
                                    tr {
                                        th { "User" }
                                        th { "Process" }
                                        th { "Action" }
                                        th { "Packet" }
                                        th { "Details" }
                                        th { "When" }
                                    }
                                }
                                tbody {
                                    {rows.iter().map(|row| {
                                        let user = row.user.clone().unwrap_or_else(|| "System".to_string());
                                        let details = row
                                            .details
                                            .as_ref()
                                            .map(details_text)
                                            .unwrap_or_default();
                                        let when = row
                                            .created_at
                                            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                                            .unwrap_or_else(|| "-".to_string());
                                        rsx!(
                                            tr {
                                                td { "{user}" }
                                                td {
                                                    span { class: "badge badge-outline", "{row.process_type}" }
                                                }
                                                td { "{row.action}" }
                                                td { class: "font-mono", "{row.packet_no}" }
                                                td { class: "max-w-md truncate", "{details}" }
                                                td { "{when}" }
                                            }
                                        )
                                    })}
                                }
                            }
                        }
                    ),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::details_text;

    /// Tests rendering of object-shaped log details.
    ///
    /// Expected: each key/value pair appears as "key: value", comma separated.
    #[test]
    fn object_details_flatten_to_pairs() {
        let details = serde_json::json!({"kapan_no": "K-12", "weight": 4.5});
        let text = details_text(&details);
        assert!(text.contains("kapan_no: K-12"));
        assert!(text.contains("weight: 4.5"));
    }

    /// Tests rendering of plain string log details.
    ///
    /// Expected: the string passes through without quotes.
    #[test]
    fn string_details_pass_through() {
        let details = serde_json::Value::String("packet reassigned".to_string());
        assert_eq!(details_text(&details), "packet reassigned");
    }
}
