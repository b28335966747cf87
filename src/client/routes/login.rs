//! Sign-in and registration screen.

use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};

use crate::client::api;
use crate::client::components::{BoundInput, Page};
use crate::client::config::REMEMBERED_USERNAME_KEY;
use crate::client::form::auth::{
    validate_login, validate_register, AuthField, LOGIN_FIELDS, REGISTER_FIELDS,
};
use crate::client::form::FormState;
use crate::client::router::Route;
use crate::client::store::SessionStore;
use crate::model::auth::AuthSessionDto;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthTab {
    SignIn,
    Register,
}

#[component]
pub fn Login() -> Element {
    let mut session = use_context::<SessionStore>();
    let nav = navigator();

    let mut tab = use_signal(|| AuthTab::SignIn);
    let mut form = use_signal(|| {
        let mut state = FormState::default();
        if let Ok(username) = LocalStorage::get::<String>(REMEMBERED_USERNAME_KEY) {
            state.fill(AuthField::Username, username);
        }
        state
    });
    let mut remember = use_signal(|| {
        LocalStorage::get::<String>(REMEMBERED_USERNAME_KEY).is_ok()
    });
    let mut banner = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let mut finish_login = move |auth: AuthSessionDto| {
        if *remember.peek() {
            let _ = LocalStorage::set(REMEMBERED_USERNAME_KEY, &auth.username);
        } else {
            LocalStorage::delete(REMEMBERED_USERNAME_KEY);
        }
        session.login(auth);
        nav.push(Route::Home {});
    };

    let on_submit = move |_: MouseEvent| {
        banner.set(None);
        if *tab.peek() == AuthTab::Register {
            let validated = {
                let mut form = form.write();
                form.touch_all(REGISTER_FIELDS);
                match validate_register(&form) {
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
            submitting.set(true);
            spawn(async move {
                match api::auth::register(&body).await {
                    Ok(auth) => finish_login(auth),
                    Err(error) => banner.set(Some(error.to_string())),
                }
                submitting.set(false);
            });
        } else {
            let validated = {
                let mut form = form.write();
                form.touch_all(LOGIN_FIELDS);
                match validate_login(&form) {
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
            submitting.set(true);
            spawn(async move {
                match api::auth::login(&body).await {
                    Ok(auth) => finish_login(auth),
                    Err(error) => banner.set(Some(error.to_string())),
                }
                submitting.set(false);
            });
        }
    };

    let registering = tab() == AuthTab::Register;
    let title = if registering { "Create Account" } else { "Sign In" };
    let submit_label = if registering { "Register" } else { "Sign In" };
    let sign_in_tab = if registering { "tab" } else { "tab tab-active" };
    let register_tab = if registering { "tab tab-active" } else { "tab" };

    rsx! {
        Title { "Sign In | Hira" }
        Meta {
            name: "description",
            content: "Sign in to the Hira diamond processing console."
        }
        Page { class: "flex items-center justify-center",
            div { class: "card bg-base-100 shadow-sm w-full max-w-md",
                div { class: "card-body",
                    div { role: "tablist", class: "tabs tabs-boxed",
                        button {
                            role: "tab",
                            class: sign_in_tab,
                            onclick: move |_| {
                                tab.set(AuthTab::SignIn);
                                banner.set(None);
                            },
                            "Sign In"
                        }
                        button {
                            role: "tab",
                            class: register_tab,
                            onclick: move |_| {
                                tab.set(AuthTab::Register);
                                banner.set(None);
                            },
                            "Register"
                        }
                    }
                    h2 { class: "card-title mt-2", "{title}" }
                    if let Some(message) = banner() {
                        div { role: "alert", class: "alert alert-error",
                            span { "{message}" }
                        }
                    }
                    BoundInput {
                        form: form,
                        field: AuthField::Username,
                        label: "Username",
                    }
                    if registering {
                        BoundInput {
                            form: form,
                            field: AuthField::Email,
                            label: "Email",
                            input_type: "email",
                        }
                    }
                    BoundInput {
                        form: form,
                        field: AuthField::Password,
                        label: "Password",
                        input_type: "password",
                    }
                    if registering {
                        BoundInput {
                            form: form,
                            field: AuthField::ConfirmPassword,
                            label: "Confirm Password",
                            input_type: "password",
                        }
                    } else {
                        label { class: "label cursor-pointer justify-start gap-2",
                            input {
                                r#type: "checkbox",
                                class: "checkbox checkbox-sm",
                                checked: remember(),
                                onchange: move |evt: FormEvent| {
                                    remember.set(evt.value() == "true")
                                },
                            }
                            span { class: "label-text", "Remember my username" }
                        }
                    }
                    div { class: "card-actions justify-end mt-2",
                        button {
                            class: "btn btn-primary w-full",
                            disabled: submitting(),
                            onclick: on_submit,
                            if submitting() {
                                span { class: "loading loading-spinner loading-sm" }
                            }
                            "{submit_label}"
                        }
                    }
                }
            }
        }
    }
}
