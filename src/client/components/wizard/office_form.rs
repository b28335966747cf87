//! Office handover tab: record a lot sent to an outside office.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::components::{BoundInput, FormField};
use crate::client::form::wizard::{validate_office, WizardField, WizardTab, OFFICE_FIELDS};
use crate::client::stats;
use crate::client::store::{SessionStore, ToastStore, WizardStore};

#[component]
pub fn OfficeTab() -> Element {
    let mut session = use_context::<SessionStore>();
    let mut toasts = use_context::<ToastStore>();
    let mut wizard = use_context::<WizardStore>();
    let mut saving = use_signal(|| false);

    let stocks = use_resource(move || async move {
        let Some(token) = session.token() else {
            return Vec::new();
        };
        match api::stock::list(&token).await {
            Ok(rows) => rows,
            Err(error) => {
                if !session.expire_if_unauthorized(&error) {
                    tracing::error!("fetching rough stock: {error}");
                    toasts.error(error.to_string());
                }
                Vec::new()
            }
        }
    });

    let on_save = move |_: MouseEvent| {
        let Some(token) = session.token() else {
            return;
        };
        let validated = {
            let mut form = wizard.form.write();
            form.touch_all(OFFICE_FIELDS);
            match validate_office(&form) {
                Ok(body) => {
                    form.set_errors(Vec::new());
                    Some(body)
                }
                Err(errors) => {
                    form.set_errors(errors);
                    None
                }
            }
        };
        let Some(body) = validated else {
            return;
        };
        saving.set(true);
        spawn(async move {
            match api::office::create(&body, &token).await {
                Ok(ack) if ack.success => {
                    let message = if ack.message.is_empty() {
                        format!("Lot {} handed to {}", body.rough_name, body.office_name)
                    } else {
                        ack.message
                    };
                    toasts.success(message);
                    wizard.mark_complete(WizardTab::Office);
                    wizard.form.write().clear_fields(OFFICE_FIELDS);
                }
                Ok(ack) => {
                    let message = if ack.message.is_empty() {
                        "The server rejected the handover".to_string()
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

    let form = wizard.form.read();
    let stock_rows = stocks.read_unchecked().clone().unwrap_or_default();
    let rough_options = stats::stock_names(&stock_rows);

    rsx! {
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "Office Handover" }
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-x-4",
                    BoundInput {
                        form: wizard.form,
                        field: WizardField::OfficeName,
                        label: "Office Name",
                    }
                    FormField {
                        label: "Rough Stone",
                        error: form.visible_error(WizardField::OfficeRoughName),
                        select {
                            class: "select select-bordered w-full",
                            value: form.value(WizardField::OfficeRoughName),
                            onchange: move |evt: FormEvent| {
                                wizard.form.write().set(WizardField::OfficeRoughName, evt.value())
                            },
                            option { value: "", "Select a stone" }
                            {rough_options.iter().map(|name| rsx!(
                                option { value: "{name}", "{name}" }
                            ))}
                        }
                    }
                    BoundInput {
                        form: wizard.form,
                        field: WizardField::OfficeWeight,
                        label: "Weight (ct)",
                        input_type: "number",
                        step: "0.01",
                        min: "0",
                    }
                    BoundInput {
                        form: wizard.form,
                        field: WizardField::OfficeSize,
                        label: "Size",
                    }
                    BoundInput {
                        form: wizard.form,
                        field: WizardField::NungCount,
                        label: "Nung Count",
                        input_type: "number",
                        step: "1",
                        min: "1",
                    }
                    BoundInput {
                        form: wizard.form,
                        field: WizardField::SendingDate,
                        label: "Sending Date",
                        input_type: "date",
                    }
                }
                div { class: "card-actions justify-end mt-2",
                    button {
                        class: "btn btn-primary",
                        disabled: saving(),
                        onclick: on_save,
                        if saving() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Save Handover"
                    }
                }
            }
        }
    }
}
