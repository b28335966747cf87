//! The per-stage lifecycle panel: an assign card, a submit card, and the
//! stage's entry table, all driven by one configuration record.
//!
//! The panel keys every behavioral difference off its [`StageId`] prop, so
//! the processing tabs render the same component nine times. Mount it keyed
//! by stage so switching tabs starts from fresh resources and form state.

use chrono::Local;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaPlus};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::components::FormField;
use crate::client::form::FormState;
use crate::client::stage::config::{CounterpartyRule, StageId};
use crate::client::stage::form::{
    assign_candidates, eligible_row, recorded_assign_date, submit_candidates, validate_assign,
    validate_submit, AssignField, SubmitField, ASSIGN_FIELDS, SUBMIT_FIELDS,
};
use crate::client::store::{SessionStore, ToastStore};

fn today_value() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[component]
pub fn StagePanel(stage_id: StageId) -> Element {
    let config = stage_id.config();
    let mut session = use_context::<SessionStore>();
    let mut toasts = use_context::<ToastStore>();

    let mut assign_form = use_signal(|| {
        let mut form = FormState::default();
        form.fill(AssignField::AssignDate, today_value());
        form
    });
    let mut submit_form = use_signal(|| {
        let mut form = FormState::default();
        form.fill(SubmitField::SubmissionDate, today_value());
        form
    });
    let mut csv_file = use_signal(|| None::<(String, String)>);
    let mut assigning = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let mut entries = use_resource(move || async move {
        let Some(token) = session.token() else {
            return Vec::new();
        };
        match api::stages::entries(config, &token).await {
            Ok(rows) => rows,
            Err(error) => {
                if !session.expire_if_unauthorized(&error) {
                    tracing::error!("fetching {} entries: {error}", config.title);
                    toasts.error(error.to_string());
                }
                Vec::new()
            }
        }
    });
    let mut eligible = use_resource(move || async move {
        let Some(token) = session.token() else {
            return Vec::new();
        };
        match api::stages::eligible(config, &token).await {
            Ok(rows) => rows,
            Err(error) => {
                if !session.expire_if_unauthorized(&error) {
                    tracing::error!("fetching {} eligible packets: {error}", config.title);
                    toasts.error(error.to_string());
                }
                Vec::new()
            }
        }
    });

    let loading = entries.read_unchecked().is_none();
    let rows = entries.read_unchecked().clone().unwrap_or_default();
    let eligible_rows = eligible.read_unchecked().clone().unwrap_or_default();
    let assign_options = assign_candidates(&eligible_rows, &rows);
    let submit_options = submit_candidates(&rows);

    // Selecting a packet pulls its kapan, weight and counterparty from the
    // eligible row; planners are chosen here, never carried over.
    let on_pick_assign_packet = move |evt: FormEvent| {
        let packet = evt.value();
        let source = eligible.read_unchecked().clone().unwrap_or_default();
        let mut form = assign_form.write();
        form.set(AssignField::Packet, packet.clone());
        let row = eligible_row(&source, &packet);
        form.fill(
            AssignField::Kapan,
            row.map(|row| row.kapan_no.clone()).unwrap_or_default(),
        );
        form.fill(
            AssignField::Weight,
            row.map(|row| row.weight.to_string()).unwrap_or_default(),
        );
        if config.counterparty != CounterpartyRule::Planner {
            form.fill(
                AssignField::Party,
                row.map(|row| row.party_name.clone()).unwrap_or_default(),
            );
        }
    };

    let on_pick_submit_packet = move |evt: FormEvent| {
        submit_form.write().set(SubmitField::Packet, evt.value());
    };

    let on_pick_csv = move |evt: FormEvent| {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        spawn(async move {
            let name = file.name();
            match file.read_string().await {
                Ok(content) => {
                    csv_file.set(Some((name.clone(), content)));
                    submit_form.write().set(SubmitField::CsvFile, name);
                }
                Err(error) => {
                    tracing::error!("reading plan file: {error}");
                    toasts.error("Could not read the selected file");
                }
            }
        });
    };

    let on_assign = move |_: MouseEvent| {
        let Some(token) = session.token() else {
            return;
        };
        let today = Local::now().date_naive();
        let validated = {
            let mut form = assign_form.write();
            form.touch_all(ASSIGN_FIELDS);
            match validate_assign(config, &form, today) {
                Ok(request) => {
                    form.set_errors(Vec::new());
                    Some(request)
                }
                Err(errors) => {
                    form.set_errors(errors);
                    None
                }
            }
        };
        let Some(request) = validated else {
            return;
        };
        assigning.set(true);
        spawn(async move {
            match api::stages::assign(config, &request, &token).await {
                Ok(ack) if ack.success => {
                    let message = if ack.message.is_empty() {
                        format!("Packet {} assigned", request.packet_no)
                    } else {
                        ack.message
                    };
                    toasts.success(message);
                    let mut form = assign_form.write();
                    form.clear();
                    form.fill(AssignField::AssignDate, today_value());
                    drop(form);
                    let mut submit = submit_form.write();
                    submit.fill(SubmitField::Packet, request.packet_no);
                    submit.fill(SubmitField::SubmissionDate, today_value());
                    drop(submit);
                    entries.restart();
                    eligible.restart();
                }
                Ok(ack) => {
                    let message = if ack.message.is_empty() {
                        "The server rejected the assignment".to_string()
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
            assigning.set(false);
        });
    };

    let on_submit = move |_: MouseEvent| {
        let Some(token) = session.token() else {
            return;
        };
        let today = Local::now().date_naive();
        let recorded = entries.read_unchecked().clone().unwrap_or_default();
        let validated = {
            let mut form = submit_form.write();
            form.touch_all(SUBMIT_FIELDS);
            let assigned = recorded_assign_date(&recorded, form.value(SubmitField::Packet).trim());
            match validate_submit(config, &form, assigned, today) {
                Ok(request) => {
                    form.set_errors(Vec::new());
                    Some(request)
                }
                Err(errors) => {
                    form.set_errors(errors);
                    None
                }
            }
        };
        let Some(request) = validated else {
            return;
        };
        let csv = csv_file.peek().clone();
        submitting.set(true);
        spawn(async move {
            let result = if config.csv_upload {
                match csv {
                    Some((name, content)) => {
                        api::planning::submit_with_csv(
                            &request.packet_no,
                            request.submission_date,
                            &name,
                            &content,
                            &token,
                        )
                        .await
                    }
                    None => {
                        submitting.set(false);
                        return;
                    }
                }
            } else {
                api::stages::submit(config, &request, &token).await
            };
            match result {
                Ok(ack) if ack.success => {
                    let message = if ack.message.is_empty() {
                        format!("Packet {} submitted", request.packet_no)
                    } else {
                        ack.message
                    };
                    toasts.success(message);
                    let mut form = submit_form.write();
                    form.clear();
                    form.fill(SubmitField::SubmissionDate, today_value());
                    drop(form);
                    csv_file.set(None);
                    entries.restart();
                    eligible.restart();
                }
                Ok(ack) => {
                    let message = if ack.message.is_empty() {
                        "The server rejected the submission".to_string()
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
            submitting.set(false);
        });
    };

    let assign = assign_form.read();
    let submit = submit_form.read();
    let unit = config.weight_unit.suffix();
    let party_label = config.counterparty.party_label();
    let weight_label = format!("Weight ({unit})");
    let csv_name = csv_file.read().as_ref().map(|(name, _)| name.clone());

    rsx! {
        div { class: "flex flex-col gap-4",
            div { class: "grid grid-cols-1 lg:grid-cols-2 gap-4",
                div { class: "card bg-base-100 shadow-sm",
                    div { class: "card-body",
                        h2 { class: "card-title", "Assign Packet" }
                        FormField {
                            label: "Packet Number",
                            error: assign.visible_error(AssignField::Packet),
                            select {
                                class: "select select-bordered w-full",
                                value: assign.value(AssignField::Packet),
                                onchange: on_pick_assign_packet,
                                option { value: "", "Select a packet" }
                                {assign_options.iter().map(|row| rsx!(
                                    option { value: "{row.packet_no}", "{row.packet_no}" }
                                ))}
                            }
                        }
                        if config.counterparty.has_kapan() {
                            FormField {
                                label: "Kapan Number",
                                error: assign.visible_error(AssignField::Kapan),
                                input {
                                    class: "input input-bordered w-full",
                                    r#type: "text",
                                    value: assign.value(AssignField::Kapan),
                                    oninput: move |evt: FormEvent| {
                                        assign_form.write().set(AssignField::Kapan, evt.value())
                                    },
                                }
                            }
                        }
                        FormField {
                            label: "{party_label}",
                            error: assign.visible_error(AssignField::Party),
                            input {
                                class: "input input-bordered w-full",
                                r#type: "text",
                                value: assign.value(AssignField::Party),
                                oninput: move |evt: FormEvent| {
                                    assign_form.write().set(AssignField::Party, evt.value())
                                },
                            }
                        }
                        if config.counterparty.has_karigar() {
                            FormField {
                                label: "Karigar Name",
                                error: assign.visible_error(AssignField::Karigar),
                                input {
                                    class: "input input-bordered w-full",
                                    r#type: "text",
                                    value: assign.value(AssignField::Karigar),
                                    oninput: move |evt: FormEvent| {
                                        assign_form.write().set(AssignField::Karigar, evt.value())
                                    },
                                }
                            }
                        }
                        FormField {
                            label: "{weight_label}",
                            error: assign.visible_error(AssignField::Weight),
                            input {
                                class: "input input-bordered w-full",
                                r#type: "number",
                                step: "0.01",
                                min: "0",
                                value: assign.value(AssignField::Weight),
                                oninput: move |evt: FormEvent| {
                                    assign_form.write().set(AssignField::Weight, evt.value())
                                },
                            }
                        }
                        FormField {
                            label: "Assign Date",
                            error: assign.visible_error(AssignField::AssignDate),
                            input {
                                class: "input input-bordered w-full",
                                r#type: "date",
                                value: assign.value(AssignField::AssignDate),
                                oninput: move |evt: FormEvent| {
                                    assign_form.write().set(AssignField::AssignDate, evt.value())
                                },
                            }
                        }
                        div { class: "card-actions justify-end mt-2",
                            button {
                                class: "btn btn-primary",
                                disabled: assigning(),
                                onclick: on_assign,
                                if assigning() {
                                    span { class: "loading loading-spinner loading-sm" }
                                } else {
                                    Icon { width: 16, height: 16, icon: FaPlus }
                                }
                                "Assign"
                            }
                        }
                    }
                }
                div { class: "card bg-base-100 shadow-sm",
                    div { class: "card-body",
                        h2 { class: "card-title", "Submit Packet" }
                        FormField {
                            label: "Packet Number",
                            error: submit.visible_error(SubmitField::Packet),
                            select {
                                class: "select select-bordered w-full",
                                value: submit.value(SubmitField::Packet),
                                onchange: on_pick_submit_packet,
                                option { value: "", "Select a packet" }
                                {submit_options.iter().map(|row| rsx!(
                                    option { value: "{row.packet_no}", "{row.packet_no}" }
                                ))}
                            }
                        }
                        FormField {
                            label: "Submission Date",
                            error: submit.visible_error(SubmitField::SubmissionDate),
                            input {
                                class: "input input-bordered w-full",
                                r#type: "date",
                                value: submit.value(SubmitField::SubmissionDate),
                                oninput: move |evt: FormEvent| {
                                    submit_form.write().set(SubmitField::SubmissionDate, evt.value())
                                },
                            }
                        }
                        if config.csv_upload {
                            FormField {
                                label: "Plan Report (CSV)",
                                error: submit.visible_error(SubmitField::CsvFile),
                                input {
                                    class: "file-input file-input-bordered w-full",
                                    r#type: "file",
                                    accept: ".csv",
                                    onchange: on_pick_csv,
                                }
                            }
                            if let Some(name) = csv_name {
                                p { class: "text-xs opacity-70", "Selected: {name}" }
                            }
                        }
                        div { class: "card-actions justify-end mt-2",
                            button {
                                class: "btn btn-primary",
                                disabled: submitting(),
                                onclick: on_submit,
                                if submitting() {
                                    span { class: "loading loading-spinner loading-sm" }
                                } else {
                                    Icon { width: 16, height: 16, icon: FaCheck }
                                }
                                "Submit"
                            }
                        }
                    }
                }
            }
            div { class: "card bg-base-100 shadow-sm",
                div { class: "card-body",
                    h2 { class: "card-title", "{config.title} Entries" }
                    if loading {
                        div { class: "flex flex-col gap-2",
                            div { class: "skeleton h-8 w-full" }
                            div { class: "skeleton h-8 w-full" }
                            div { class: "skeleton h-8 w-full" }
                        }
                    } else if rows.is_empty() {
                        p { class: "text-sm opacity-70",
                            "No packets recorded at this stage yet."
                        }
                    } else {
                        div { class: "overflow-x-auto",
                            table { class: "table table-md",
                                thead {
                                    tr {
                                        th { "Packet" }
                                        if config.counterparty.has_kapan() {
                                            th { "Kapan" }
                                        }
                                        th { "{party_label}" }
                                        if config.counterparty.has_karigar() {
                                            th { "Karigar" }
                                        }
                                        th { "Weight ({unit})" }
                                        th { "Assign Date" }
                                        th { "Submit Date" }
                                        th { "Status" }
                                    }
                                }
                                tbody {
                                    {rows.iter().map(|row| {
                                        let submitted = row
                                            .submission_date
                                            .map(|date| date.to_string())
                                            .unwrap_or_else(|| "-".to_string());
                                        let badge = row.status.badge_class();
                                        let status = row.status.label();
                                        rsx!(
                                            tr {
                                                td { class: "font-mono", "{row.packet_no}" }
                                                if config.counterparty.has_kapan() {
                                                    td { "{row.kapan_no}" }
                                                }
                                                td { "{row.party_name}" }
                                                if config.counterparty.has_karigar() {
                                                    td { "{row.karigar_name}" }
                                                }
                                                td { "{row.weight}" }
                                                td { "{row.assign_date}" }
                                                td { "{submitted}" }
                                                td {
                                                    span { class: "badge {badge}", "{status}" }
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
