//! Inventory panel: searchable, paginated stock table with add, edit, and
//! delete. The editor reuses the rough stock fields and validation from the
//! management wizard.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::components::BoundInput;
use crate::client::config::ITEMS_PER_PAGE;
use crate::client::form::wizard::{validate_stock, WizardField, STOCK_FIELDS};
use crate::client::form::FormState;
use crate::client::stats;
use crate::client::store::{SessionStore, ToastStore};
use crate::model::stock::RoughStockDto;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Editor {
    Closed,
    Create,
    Edit(i64),
}

#[component]
pub fn InventoryPanel() -> Element {
    let mut session = use_context::<SessionStore>();
    let mut toasts = use_context::<ToastStore>();

    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut form = use_signal(FormState::<WizardField>::default);
    let mut editor = use_signal(|| Editor::Closed);
    let mut confirming = use_signal(|| None::<(i64, String)>);
    let mut saving = use_signal(|| false);

    let mut stocks = use_resource(move || async move {
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

    let mut open_create = move || {
        form.write().clear();
        editor.set(Editor::Create);
    };
    let mut open_edit = move |stock: RoughStockDto| {
        let mut state = form.write();
        state.clear();
        state.fill(WizardField::RoughName, stock.rough_name);
        state.fill(WizardField::Carat, stock.weight_carat.to_string());
        state.fill(WizardField::Price, stock.purchase_price.to_string());
        state.fill(WizardField::Size, stock.size);
        state.fill(WizardField::Quality, stock.quality);
        state.fill(WizardField::Color, stock.color_percent.to_string());
        state.fill(
            WizardField::Whiteness,
            stock
                .whiteness_percent
                .map(|value| value.to_string())
                .unwrap_or_default(),
        );
        state.fill(WizardField::VepariName, stock.vepari_name);
        state.fill(WizardField::VepariMobile, stock.vepari_mobile);
        state.fill(WizardField::DalalName, stock.dalal_name);
        state.fill(WizardField::DalalMobile, stock.dalal_mobile);
        drop(state);
        editor.set(Editor::Edit(stock.id));
    };

    let on_save = move |_: MouseEvent| {
        let Some(token) = session.token() else {
            return;
        };
        let validated = {
            let mut state = form.write();
            state.touch_all(STOCK_FIELDS);
            match validate_stock(&state) {
                Ok(body) => {
                    state.set_errors(Vec::new());
                    Some(body)
                }
                Err(errors) => {
                    state.set_errors(errors);
                    None
                }
            }
        };
        let Some(body) = validated else {
            return;
        };
        let target = *editor.peek();
        saving.set(true);
        spawn(async move {
            let result = match target {
                Editor::Edit(id) => api::stock::update(id, &body, &token).await,
                _ => api::stock::create(&body, &token).await,
            };
            match result {
                Ok(ack) if ack.success => {
                    let message = if ack.message.is_empty() {
                        format!("Rough stone {} saved", body.rough_name)
                    } else {
                        ack.message
                    };
                    toasts.success(message);
                    editor.set(Editor::Closed);
                    form.write().clear();
                    stocks.restart();
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

    let on_delete = move |_: MouseEvent| {
        let Some((id, name)) = confirming.peek().clone() else {
            return;
        };
        let Some(token) = session.token() else {
            return;
        };
        spawn(async move {
            match api::stock::delete(id, &token).await {
                Ok(ack) if ack.success => {
                    let message = if ack.message.is_empty() {
                        format!("Rough stone {name} deleted")
                    } else {
                        ack.message
                    };
                    toasts.success(message);
                    confirming.set(None);
                    stocks.restart();
                }
                Ok(ack) => {
                    let message = if ack.message.is_empty() {
                        "The server refused to delete the stone".to_string()
                    } else {
                        ack.message
                    };
                    toasts.error(message);
                    confirming.set(None);
                }
                Err(error) => {
                    if !session.expire_if_unauthorized(&error) {
                        toasts.error(error.to_string());
                    }
                    confirming.set(None);
                }
            }
        });
    };

    let loading = stocks.read_unchecked().is_none();
    let all_rows = stocks.read_unchecked().clone().unwrap_or_default();
    let query = search();
    let filtered = stats::filter_inventory(&all_rows, &query);
    let pages = stats::page_count(filtered.len(), ITEMS_PER_PAGE);
    let current = stats::clamp_page(page(), filtered.len(), ITEMS_PER_PAGE);
    let rows = stats::paginate(&filtered, current, ITEMS_PER_PAGE);
    let pager = format!("Page {current} of {pages}");
    let editor_state = editor();
    let editor_title = match editor_state {
        Editor::Edit(_) => "Edit Rough Stone",
        _ => "Add Rough Stone",
    };

    rsx! {
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body",
                div { class: "flex flex-wrap items-center justify-between gap-2",
                    h2 { class: "card-title", "Inventory" }
                    div { class: "flex gap-2",
                        input {
                            class: "input input-bordered input-sm w-64",
                            r#type: "search",
                            placeholder: "Search name, vepari, dalal, quality...",
                            value: "{query}",
                            oninput: move |evt: FormEvent| {
                                search.set(evt.value());
                                page.set(1);
                            },
                        }
                        button {
                            class: "btn btn-primary btn-sm",
                            onclick: move |_| open_create(),
                            Icon { width: 14, height: 14, icon: FaPlus }
                            "Add Stone"
                        }
                    }
                }
                if loading {
                    div { class: "flex flex-col gap-2",
                        div { class: "skeleton h-8 w-full" }
                        div { class: "skeleton h-8 w-full" }
                        div { class: "skeleton h-8 w-full" }
                    }
                } else if rows.is_empty() {
                    p { class: "text-sm opacity-70", "No stones match." }
                } else {
                    div { class: "overflow-x-auto",
                        table { class: "table table-md",
                            thead {
                                tr {
                                    th { "Rough Name" }
                                    th { "Weight (ct)" }
                                    th { "Remaining" }
                                    th { "Price" }
                                    th { "Quality" }
                                    th { "Vepari" }
                                    th { "Dalal" }
                                    th { "Status" }
                                    th {}
                                }
                            }
                            tbody {
                                {rows.iter().map(|row| {
                                    let stock = row.clone();
                                    let confirm = (row.id, row.rough_name.clone());
                                    let status = row
                                        .status
                                        .map(|status| (status.badge_class(), status.label()));
                                    rsx!(
                                        tr {
                                            td { "{row.rough_name}" }
                                            td { "{row.weight_carat}" }
                                            td { "{row.remaining_weight}" }
                                            td { "{row.purchase_price}" }
                                            td { "{row.quality}" }
                                            td { "{row.vepari_name}" }
                                            td { "{row.dalal_name}" }
                                            td {
                                                if let Some((badge, label)) = status {
                                                    span { class: "badge {badge}", "{label}" }
                                                } else {
                                                    span { class: "badge badge-neutral", "PENDING" }
                                                }
                                            }
                                            td { class: "flex gap-2 justify-end",
                                                button {
                                                    class: "btn btn-ghost btn-xs",
                                                    onclick: move |_: MouseEvent| open_edit(stock.clone()),
                                                    "Edit"
                                                }
                                                button {
                                                    class: "btn btn-ghost btn-xs text-error",
                                                    onclick: move |_: MouseEvent| {
                                                        confirming.set(Some(confirm.clone()))
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
                    div { class: "flex items-center justify-end gap-2 mt-2",
                        span { class: "text-sm opacity-70", "{pager}" }
                        div { class: "join",
                            button {
                                class: "join-item btn btn-sm",
                                disabled: current <= 1,
                                onclick: move |_| page.set(current - 1),
                                "Prev"
                            }
                            button {
                                class: "join-item btn btn-sm",
                                disabled: current >= pages,
                                onclick: move |_| page.set(current + 1),
                                "Next"
                            }
                        }
                    }
                }
            }
        }
        if editor_state != Editor::Closed {
            div { class: "modal modal-open",
                div { class: "modal-box max-w-2xl",
                    h3 { class: "font-bold text-lg", "{editor_title}" }
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-x-4",
                        BoundInput {
                            form: form,
                            field: WizardField::RoughName,
                            label: "Rough Name",
                        }
                        BoundInput {
                            form: form,
                            field: WizardField::Carat,
                            label: "Weight (ct)",
                            input_type: "number",
                            step: "0.01",
                            min: "0",
                        }
                        BoundInput {
                            form: form,
                            field: WizardField::Price,
                            label: "Purchase Price",
                            input_type: "number",
                            step: "0.01",
                            min: "0",
                        }
                        BoundInput {
                            form: form,
                            field: WizardField::Size,
                            label: "Size",
                        }
                        BoundInput {
                            form: form,
                            field: WizardField::Quality,
                            label: "Quality",
                        }
                        BoundInput {
                            form: form,
                            field: WizardField::Color,
                            label: "Color (%)",
                            input_type: "number",
                            step: "0.1",
                            min: "0",
                            max: "100",
                        }
                        BoundInput {
                            form: form,
                            field: WizardField::Whiteness,
                            label: "Whiteness (%)",
                            input_type: "number",
                            step: "0.1",
                            min: "0",
                            max: "100",
                        }
                        BoundInput {
                            form: form,
                            field: WizardField::VepariName,
                            label: "Vepari",
                        }
                        BoundInput {
                            form: form,
                            field: WizardField::VepariMobile,
                            label: "Vepari Mobile",
                        }
                        BoundInput {
                            form: form,
                            field: WizardField::DalalName,
                            label: "Dalal",
                        }
                        BoundInput {
                            form: form,
                            field: WizardField::DalalMobile,
                            label: "Dalal Mobile",
                        }
                    }
                    div { class: "modal-action",
                        button {
                            class: "btn",
                            onclick: move |_| editor.set(Editor::Closed),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: saving(),
                            onclick: on_save,
                            if saving() {
                                span { class: "loading loading-spinner loading-sm" }
                            }
                            "Save"
                        }
                    }
                }
            }
        }
        if let Some((_, name)) = confirming() {
            div { class: "modal modal-open",
                div { class: "modal-box",
                    h3 { class: "font-bold text-lg", "Delete Rough Stone" }
                    p { class: "py-2", "Delete {name}? This cannot be undone." }
                    div { class: "modal-action",
                        button {
                            class: "btn",
                            onclick: move |_| confirming.set(None),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-error",
                            onclick: on_delete,
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
