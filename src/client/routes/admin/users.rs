//! User administration: accounts table with activation toggle, create and
//! edit modal, and delete confirmation. The signed-in admin cannot delete
//! their own account.

use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::components::{BoundInput, FormField, Page};
use crate::client::form::user::{validate_user, UserField, USER_FIELDS};
use crate::client::form::FormState;
use crate::client::store::{SessionStore, ToastStore};
use crate::model::user::{Role, UserDto};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Editor {
    Closed,
    Create,
    Edit(i64),
}

#[component]
pub fn Users() -> Element {
    let mut session = use_context::<SessionStore>();
    let mut toasts = use_context::<ToastStore>();

    let mut form = use_signal(FormState::<UserField>::default);
    let mut editor = use_signal(|| Editor::Closed);
    let mut confirming = use_signal(|| None::<(i64, String)>);
    let mut saving = use_signal(|| false);

    let mut users = use_resource(move || async move {
        let Some(token) = session.token() else {
            return Vec::new();
        };
        match api::users::list(&token).await {
            Ok(rows) => rows,
            Err(error) => {
                if !session.expire_if_unauthorized(&error) {
                    tracing::error!("fetching users: {error}");
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
    let mut open_edit = move |user: UserDto| {
        let mut state = form.write();
        state.clear();
        state.fill(UserField::Username, user.username);
        state.fill(UserField::Email, user.email);
        state.fill(UserField::Role, user.role.as_str());
        drop(state);
        editor.set(Editor::Edit(user.id));
    };

    let on_save = move |_: MouseEvent| {
        let Some(token) = session.token() else {
            return;
        };
        let creating = *editor.peek() == Editor::Create;
        let validated = {
            let mut state = form.write();
            state.touch_all(USER_FIELDS);
            match validate_user(&state, creating) {
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
                Editor::Edit(id) => api::users::update(id, &body, &token).await,
                _ => api::users::create(&body, &token).await,
            };
            match result {
                Ok(ack) if ack.success => {
                    let message = if ack.message.is_empty() {
                        format!("User {} saved", body.username)
                    } else {
                        ack.message
                    };
                    toasts.success(message);
                    editor.set(Editor::Closed);
                    form.write().clear();
                    users.restart();
                }
                Ok(ack) => {
                    let message = if ack.message.is_empty() {
                        "The server rejected the account".to_string()
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
        let Some((id, username)) = confirming.peek().clone() else {
            return;
        };
        let Some(token) = session.token() else {
            return;
        };
        spawn(async move {
            match api::users::delete(id, &token).await {
                Ok(ack) if ack.success => {
                    let message = if ack.message.is_empty() {
                        format!("User {username} deleted")
                    } else {
                        ack.message
                    };
                    toasts.success(message);
                }
                Ok(ack) => {
                    let message = if ack.message.is_empty() {
                        "The server refused to delete the account".to_string()
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
            confirming.set(None);
            users.restart();
        });
    };

    let loading = users.read_unchecked().is_none();
    let rows = users.read_unchecked().clone().unwrap_or_default();
    let own_name = session.user().map(|user| user.name);
    let editor_state = editor();
    let editor_title = match editor_state {
        Editor::Edit(_) => "Edit User",
        _ => "Add User",
    };
    let password_label = match editor_state {
        Editor::Edit(_) => "Password (leave blank to keep)",
        _ => "Password",
    };
    let state = form.read();

    rsx! {
        Title { "Users | Hira" }
        Meta {
            name: "description",
            content: "Manage user accounts and access."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-5xl p-2",
                div { class: "card bg-base-100 shadow-sm",
                    div { class: "card-body",
                        div { class: "flex flex-wrap items-center justify-between gap-2",
                            h2 { class: "card-title", "Users" }
                            button {
                                class: "btn btn-primary btn-sm",
                                onclick: move |_| open_create(),
                                Icon { width: 14, height: 14, icon: FaPlus }
                                "Add User"
                            }
                        }
                        if loading {
                            div { class: "flex flex-col gap-2",
                                div { class: "skeleton h-8 w-full" }
                                div { class: "skeleton h-8 w-full" }
                                div { class: "skeleton h-8 w-full" }
                            }
                        } else if rows.is_empty() {
                            p { class: "text-sm opacity-70", "No accounts yet." }
                        } else {
                            div { class: "overflow-x-auto",
                                table { class: "table table-md",
                                    thead {
                                        tr {
                                            th { "Username" }
                                            th { "Email" }
                                            th { "Role" }
                                            th { "Active" }
                                            th {}
                                        }
                                    }
                                    tbody {
                                        {rows.iter().map(|row| {
                                            let user = row.clone();
                                            let confirm = (row.id, row.username.clone());
                                            let id = row.id;
                                            let active = row.is_active;
                                            let role = row.role.label();
                                            let role_badge = match row.role {
                                                Role::Admin => "badge-primary",
                                                Role::OfficeUser => "badge-neutral",
                                            };
                                            let own_account = own_name.as_deref() == Some(row.username.as_str());
                                            rsx!(
                                                tr {
                                                    td { "{row.username}" }
                                                    td { "{row.email}" }
                                                    td {
                                                        span { class: "badge {role_badge}", "{role}" }
                                                    }
                                                    td {
                                                        input {
                                                            r#type: "checkbox",
                                                            class: "toggle toggle-success toggle-sm",
                                                            checked: active,
                                                            onchange: move |_: FormEvent| {
                                                                let Some(token) = session.token() else {
                                                                    return;
                                                                };
                                                                spawn(async move {
                                                                    match api::users::set_status(id, !active, &token).await {
                                                                        Ok(ack) if ack.success => {
                                                                            users.restart();
                                                                        }
                                                                        Ok(ack) => {
                                                                            let message = if ack.message.is_empty() {
                                                                                "The server refused the status change".to_string()
                                                                            } else {
                                                                                ack.message
                                                                            };
                                                                            toasts.error(message);
                                                                            users.restart();
                                                                        }
                                                                        Err(error) => {
                                                                            if !session.expire_if_unauthorized(&error) {
                                                                                toasts.error(error.to_string());
                                                                            }
                                                                            users.restart();
                                                                        }
                                                                    }
                                                                });
                                                            },
                                                        }
                                                    }
                                                    td { class: "flex gap-2 justify-end",
                                                        button {
                                                            class: "btn btn-ghost btn-xs",
                                                            onclick: move |_: MouseEvent| open_edit(user.clone()),
                                                            "Edit"
                                                        }
                                                        button {
                                                            class: "btn btn-ghost btn-xs text-error",
                                                            disabled: own_account,
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
                        }
                    }
                }
            }
        }
        if editor_state != Editor::Closed {
            div { class: "modal modal-open",
                div { class: "modal-box",
                    h3 { class: "font-bold text-lg", "{editor_title}" }
                    BoundInput {
                        form: form,
                        field: UserField::Username,
                        label: "Username",
                    }
                    BoundInput {
                        form: form,
                        field: UserField::Email,
                        label: "Email",
                        input_type: "email",
                    }
                    BoundInput {
                        form: form,
                        field: UserField::Password,
                        label: "{password_label}",
                        input_type: "password",
                    }
                    FormField {
                        label: "Role",
                        error: state.visible_error(UserField::Role),
                        select {
                            class: "select select-bordered w-full",
                            value: state.value(UserField::Role),
                            onchange: move |evt: FormEvent| {
                                form.write().set(UserField::Role, evt.value())
                            },
                            option { value: "", "Select a role" }
                            option { value: "admin", "Admin" }
                            option { value: "office_user", "Office User" }
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
        if let Some((_, username)) = confirming() {
            div { class: "modal modal-open",
                div { class: "modal-box",
                    h3 { class: "font-bold text-lg", "Delete User" }
                    p { class: "py-2", "Delete {username}? This cannot be undone." }
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
