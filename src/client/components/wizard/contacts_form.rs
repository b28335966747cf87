//! Contacts tab: the vepari and dalal address books, side by side.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::components::FormField;
use crate::client::form::wizard::WizardTab;
use crate::client::store::{SessionStore, ToastStore, WizardStore};
use crate::model::contact::{ContactKind, SaveContactDto};

#[component]
pub fn ContactsTab() -> Element {
    rsx! {
        div { class: "grid grid-cols-1 lg:grid-cols-2 gap-4",
            ContactPanel { kind: ContactKind::Vepari }
            ContactPanel { kind: ContactKind::Dalal }
        }
    }
}

/// One address book: an add/edit form above the saved entries.
#[component]
fn ContactPanel(kind: ContactKind) -> Element {
    let mut session = use_context::<SessionStore>();
    let mut toasts = use_context::<ToastStore>();
    let mut wizard = use_context::<WizardStore>();

    let mut name = use_signal(String::new);
    let mut mobile = use_signal(String::new);
    let mut editing = use_signal(|| None::<i64>);
    let mut name_error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let mut contacts = use_resource(move || async move {
        let Some(token) = session.token() else {
            return Vec::new();
        };
        match api::contacts::list(kind, &token).await {
            Ok(rows) => rows,
            Err(error) => {
                if !session.expire_if_unauthorized(&error) {
                    tracing::error!("fetching {} contacts: {error}", kind.label());
                    toasts.error(error.to_string());
                }
                Vec::new()
            }
        }
    });

    let label = kind.label();

    let mut reset = move || {
        name.set(String::new());
        mobile.set(String::new());
        editing.set(None);
        name_error.set(None);
    };

    let on_save = move |_: MouseEvent| {
        let Some(token) = session.token() else {
            return;
        };
        let trimmed = name.peek().trim().to_string();
        if trimmed.is_empty() {
            name_error.set(Some(format!("{label} name is required")));
            return;
        }
        name_error.set(None);
        let body = SaveContactDto {
            name: trimmed,
            mobile: mobile.peek().trim().to_string(),
        };
        let target = *editing.peek();
        saving.set(true);
        spawn(async move {
            let result = match target {
                Some(id) => api::contacts::update(kind, id, &body, &token).await,
                None => api::contacts::create(kind, &body, &token).await,
            };
            match result {
                Ok(ack) if ack.success => {
                    let message = if ack.message.is_empty() {
                        format!("{label} {} saved", body.name)
                    } else {
                        ack.message
                    };
                    toasts.success(message);
                    reset();
                    wizard.mark_complete(WizardTab::Contacts);
                    contacts.restart();
                }
                Ok(ack) => {
                    let message = if ack.message.is_empty() {
                        format!("The server rejected the {label} entry")
                    } else {
                        ack.message
                    };
                    toasts.error(message);
                }
                Err(error) => {
                    if !session.expire_if_unauthorized(&error) {
                        toasts.error(error.to_string());
                    }
                }
            }
            saving.set(false);
        });
    };

    let rows = contacts.read_unchecked().clone().unwrap_or_default();
    let loading = contacts.read_unchecked().is_none();
    let title = format!("{label}s");
    let save_label = if editing().is_some() { "Update" } else { "Add" };

    rsx! {
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "{title}" }
                FormField {
                    label: "{label} Name",
                    error: name_error(),
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }
                FormField {
                    label: "Mobile",
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        value: mobile(),
                        oninput: move |evt: FormEvent| mobile.set(evt.value()),
                    }
                }
                div { class: "card-actions justify-end mt-2",
                    if editing().is_some() {
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_: MouseEvent| reset(),
                            "Cancel"
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: saving(),
                        onclick: on_save,
                        if saving() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "{save_label}"
                    }
                }
                if loading {
                    div { class: "flex flex-col gap-2",
                        div { class: "skeleton h-8 w-full" }
                        div { class: "skeleton h-8 w-full" }
                    }
                } else if rows.is_empty() {
                    p { class: "text-sm opacity-70", "No contacts saved yet." }
                } else {
                    div { class: "overflow-x-auto",
                        table { class: "table table-md",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Mobile" }
                                    th {}
                                }
                            }
                            tbody {
                                {rows.iter().map(|contact| {
                                    let row = contact.clone();
                                    let id = contact.id;
                                    rsx!(
                                        tr {
                                            td { "{contact.name}" }
                                            td { "{contact.mobile}" }
                                            td { class: "flex gap-2 justify-end",
                                                button {
                                                    class: "btn btn-ghost btn-xs",
                                                    onclick: move |_: MouseEvent| {
                                                        name.set(row.name.clone());
                                                        mobile.set(row.mobile.clone());
                                                        editing.set(Some(row.id));
                                                        name_error.set(None);
                                                    },
                                                    "Edit"
                                                }
                                                button {
                                                    class: "btn btn-ghost btn-xs text-error",
                                                    onclick: move |_: MouseEvent| {
                                                        let Some(token) = session.token() else {
                                                            return;
                                                        };
                                                        spawn(async move {
                                                            match api::contacts::delete(kind, id, &token).await {
                                                                Ok(ack) if ack.success => {
                                                                    let message = if ack.message.is_empty() {
                                                                        format!("{label} deleted")
                                                                    } else {
                                                                        ack.message
                                                                    };
                                                                    toasts.success(message);
                                                                    if *editing.peek() == Some(id) {
                                                                        reset();
                                                                    }
                                                                    contacts.restart();
                                                                }
                                                                Ok(ack) => {
                                                                    let message = if ack.message.is_empty() {
                                                                        format!("The server refused to delete the {label}")
                                                                    } else {
                                                                        ack.message
                                                                    };
                                                                    toasts.error(message);
                                                                }
                                                                Err(error) => {
                                                                    if !session.expire_if_unauthorized(&error) {
                                                                        toasts.error(error.to_string());
                                                                    }
                                                                }
                                                            }
                                                        });
                                                    },
                                                    "Delete"
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
