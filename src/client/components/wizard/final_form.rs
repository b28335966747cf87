//! Final diamonds tab: record the finished goods a lot came back with.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::components::{BoundInput, FormField};
use crate::client::form::wizard::{validate_final, WizardField, WizardTab, FINAL_FIELDS};
use crate::client::stats;
use crate::client::store::{SessionStore, ToastStore, WizardStore};

#[component]
pub fn FinalTab() -> Element {
    let mut session = use_context::<SessionStore>();
    let mut toasts = use_context::<ToastStore>();
    let mut wizard = use_context::<WizardStore>();
    let mut saving = use_signal(|| false);

    let handovers = use_resource(move || async move {
        let Some(token) = session.token() else {
            return Vec::new();
        };
        match api::office::list(&token).await {
            Ok(rows) => rows,
            Err(error) => {
                if !session.expire_if_unauthorized(&error) {
                    tracing::error!("fetching office handovers: {error}");
                    toasts.error(error.to_string());
                }
                Vec::new()
            }
        }
    });

    // Changing the office narrows the rough list; drop a stale pick.
    let on_pick_office = move |evt: FormEvent| {
        let office = evt.value();
        let rows = handovers.read_unchecked().clone().unwrap_or_default();
        let roughs = stats::office_rough_names(&rows, &office);
        let mut form = wizard.form.write();
        let stale = !roughs
            .iter()
            .any(|name| name.as_str() == form.value(WizardField::FinalRoughName));
        if stale {
            form.fill(WizardField::FinalRoughName, "");
        }
        form.set(WizardField::FinalOfficeName, office);
    };

    let on_save = move |_: MouseEvent| {
        let Some(token) = session.token() else {
            return;
        };
        let validated = {
            let mut form = wizard.form.write();
            form.touch_all(FINAL_FIELDS);
            match validate_final(&form) {
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
            match api::office::create_final(&body, &token).await {
                Ok(ack) if ack.success => {
                    let message = if ack.message.is_empty() {
                        format!("Final diamonds recorded for {}", body.rough_name)
                    } else {
                        ack.message
                    };
                    toasts.success(message);
                    wizard.mark_complete(WizardTab::Final);
                    wizard.form.write().clear_fields(FINAL_FIELDS);
                }
                Ok(ack) => {
                    let message = if ack.message.is_empty() {
                        "The server rejected the final diamond entry".to_string()
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
    let rows = handovers.read_unchecked().clone().unwrap_or_default();
    let office_options = stats::office_names(&rows);
    let rough_options = stats::office_rough_names(&rows, form.value(WizardField::FinalOfficeName));

    rsx! {
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "Final Diamonds" }
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-x-4",
                    FormField {
                        label: "Office",
                        error: form.visible_error(WizardField::FinalOfficeName),
                        select {
                            class: "select select-bordered w-full",
                            value: form.value(WizardField::FinalOfficeName),
                            onchange: on_pick_office,
                            option { value: "", "Select an office" }
                            {office_options.iter().map(|name| rsx!(
                                option { value: "{name}", "{name}" }
                            ))}
                        }
                    }
                    FormField {
                        label: "Rough Stone",
                        error: form.visible_error(WizardField::FinalRoughName),
                        select {
                            class: "select select-bordered w-full",
                            value: form.value(WizardField::FinalRoughName),
                            onchange: move |evt: FormEvent| {
                                wizard.form.write().set(WizardField::FinalRoughName, evt.value())
                            },
                            option { value: "", "Select a stone" }
                            {rough_options.iter().map(|name| rsx!(
                                option { value: "{name}", "{name}" }
                            ))}
                        }
                    }
                    BoundInput {
                        form: wizard.form,
                        field: WizardField::SubmitDate,
                        label: "Submit Date",
                        input_type: "date",
                    }
                    BoundInput {
                        form: wizard.form,
                        field: WizardField::Topi,
                        label: "Topi",
                        input_type: "number",
                        step: "1",
                        min: "0",
                    }
                    BoundInput {
                        form: wizard.form,
                        field: WizardField::Patti,
                        label: "Patti",
                        input_type: "number",
                        step: "1",
                        min: "0",
                    }
                    BoundInput {
                        form: wizard.form,
                        field: WizardField::Simcard,
                        label: "Simcard",
                        input_type: "number",
                        step: "1",
                        min: "0",
                    }
                    BoundInput {
                        form: wizard.form,
                        field: WizardField::TotalWeight,
                        label: "Total Weight (ct)",
                        input_type: "number",
                        step: "0.01",
                        min: "0",
                    }
                    BoundInput {
                        form: wizard.form,
                        field: WizardField::FinalSize,
                        label: "Size",
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
                        "Save Final Diamonds"
                    }
                }
            }
        }
    }
}
