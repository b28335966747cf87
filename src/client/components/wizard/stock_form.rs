//! Rough stock tab: record a purchased stone against its vepari and dalal.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::components::{BoundInput, FormField};
use crate::client::form::wizard::{validate_stock, WizardField, WizardTab, STOCK_FIELDS};
use crate::client::store::{SessionStore, ToastStore, WizardStore};
use crate::model::contact::{ContactDto, ContactKind};

fn contact_options(kind: ContactKind) -> Resource<Vec<ContactDto>> {
    let mut session = use_context::<SessionStore>();
    let mut toasts = use_context::<ToastStore>();
    use_resource(move || async move {
        let Some(token) = session.token() else {
            return Vec::new();
        };
        match api::contacts::list(kind, &token).await {
            Ok(contacts) => contacts,
            Err(error) => {
                if !session.expire_if_unauthorized(&error) {
                    tracing::error!("fetching {} contacts: {error}", kind.label());
                    toasts.error(error.to_string());
                }
                Vec::new()
            }
        }
    })
}

#[component]
pub fn StockTab() -> Element {
    let mut session = use_context::<SessionStore>();
    let mut toasts = use_context::<ToastStore>();
    let mut wizard = use_context::<WizardStore>();
    let mut saving = use_signal(|| false);

    let veparis = contact_options(ContactKind::Vepari);
    let dalals = contact_options(ContactKind::Dalal);

    // Choosing a saved contact also fills in their mobile number.
    let on_pick_vepari = move |evt: FormEvent| {
        let name = evt.value();
        let contacts = veparis.read_unchecked().clone().unwrap_or_default();
        let mobile = contacts
            .iter()
            .find(|contact| contact.name == name)
            .map(|contact| contact.mobile.clone())
            .unwrap_or_default();
        let mut form = wizard.form.write();
        form.set(WizardField::VepariName, name);
        form.fill(WizardField::VepariMobile, mobile);
    };
    let on_pick_dalal = move |evt: FormEvent| {
        let name = evt.value();
        let contacts = dalals.read_unchecked().clone().unwrap_or_default();
        let mobile = contacts
            .iter()
            .find(|contact| contact.name == name)
            .map(|contact| contact.mobile.clone())
            .unwrap_or_default();
        let mut form = wizard.form.write();
        form.set(WizardField::DalalName, name);
        form.fill(WizardField::DalalMobile, mobile);
    };

    let on_save = move |_: MouseEvent| {
        let Some(token) = session.token() else {
            return;
        };
        let validated = {
            let mut form = wizard.form.write();
            form.touch_all(STOCK_FIELDS);
            match validate_stock(&form) {
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
            match api::stock::create(&body, &token).await {
                Ok(ack) if ack.success => {
                    let message = if ack.message.is_empty() {
                        format!("Rough stone {} saved", body.rough_name)
                    } else {
                        ack.message
                    };
                    toasts.success(message);
                    wizard.mark_complete(WizardTab::Stock);
                    wizard.form.write().clear_fields(STOCK_FIELDS);
                }
                Ok(ack) => {
                    let message = if ack.message.is_empty() {
                        "The server rejected the stock entry".to_string()
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
    let vepari_options = veparis.read_unchecked().clone().unwrap_or_default();
    let dalal_options = dalals.read_unchecked().clone().unwrap_or_default();

    rsx! {
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "Rough Stock" }
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-x-4",
                    BoundInput {
                        form: wizard.form,
                        field: WizardField::RoughName,
                        label: "Rough Name",
                    }
                    BoundInput {
                        form: wizard.form,
                        field: WizardField::Carat,
                        label: "Weight (ct)",
                        input_type: "number",
                        step: "0.01",
                        min: "0",
                    }
                    BoundInput {
                        form: wizard.form,
                        field: WizardField::Price,
                        label: "Purchase Price",
                        input_type: "number",
                        step: "0.01",
                        min: "0",
                    }
                    BoundInput {
                        form: wizard.form,
                        field: WizardField::Size,
                        label: "Size",
                    }
                    BoundInput {
                        form: wizard.form,
                        field: WizardField::Quality,
                        label: "Quality",
                    }
                    BoundInput {
                        form: wizard.form,
                        field: WizardField::Color,
                        label: "Color (%)",
                        input_type: "number",
                        step: "0.1",
                        min: "0",
                        max: "100",
                    }
                    BoundInput {
                        form: wizard.form,
                        field: WizardField::Whiteness,
                        label: "Whiteness (%)",
                        input_type: "number",
                        step: "0.1",
                        min: "0",
                        max: "100",
                    }
                    FormField {
                        label: "Vepari",
                        error: form.visible_error(WizardField::VepariName),
                        select {
                            class: "select select-bordered w-full",
                            value: form.value(WizardField::VepariName),
                            onchange: on_pick_vepari,
                            option { value: "", "Select a vepari" }
                            {vepari_options.iter().map(|contact| rsx!(
                                option { value: "{contact.name}", "{contact.name}" }
                            ))}
                        }
                    }
                    BoundInput {
                        form: wizard.form,
                        field: WizardField::VepariMobile,
                        label: "Vepari Mobile",
                    }
                    FormField {
                        label: "Dalal",
                        error: form.visible_error(WizardField::DalalName),
                        select {
                            class: "select select-bordered w-full",
                            value: form.value(WizardField::DalalName),
                            onchange: on_pick_dalal,
                            option { value: "", "Select a dalal" }
                            {dalal_options.iter().map(|contact| rsx!(
                                option { value: "{contact.name}", "{contact.name}" }
                            ))}
                        }
                    }
                    BoundInput {
                        form: wizard.form,
                        field: WizardField::DalalMobile,
                        label: "Dalal Mobile",
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
                        "Save Stone"
                    }
                }
            }
        }
    }
}
