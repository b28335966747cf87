use dioxus::prelude::*;

use crate::client::store::toast::{ToastKind, ToastStore};

/// Renders the current toast in the top-right corner. Clicking it dismisses
/// early; otherwise the store's timer takes it down.
#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_context::<ToastStore>();

    let Some(toast) = toasts.current() else {
        return rsx!();
    };
    let alert_class = match toast.kind {
        ToastKind::Success => "alert alert-success",
        ToastKind::Error => "alert alert-error",
    };

    rsx!(
        div { class: "toast toast-top toast-end z-50",
            div {
                class: "{alert_class} cursor-pointer shadow-md",
                onclick: move |_| toasts.dismiss(),
                span { "{toast.message}" }
            }
        }
    )
}
