use std::hash::Hash;

use dioxus::prelude::*;

use crate::client::form::FormState;

/// Labeled input wrapper with an inline validation message.
#[component]
pub fn FormField(label: String, error: Option<String>, children: Element) -> Element {
    rsx!(
        label { class: "form-control w-full",
            div { class: "label",
                span { class: "label-text", "{label}" }
            }
            {children}
            if let Some(error) = error {
                div { class: "label",
                    span { class: "label-text-alt text-error", "{error}" }
                }
            }
        }
    )
}

/// Text-like input bound to one field of a [`FormState`] signal. Covers the
/// text, number, and date inputs; selects and file pickers stay hand-rolled.
#[component]
pub fn BoundInput<F: Copy + Eq + Hash + 'static>(
    form: Signal<FormState<F>>,
    field: F,
    label: String,
    #[props(default)] input_type: Option<String>,
    #[props(default)] step: Option<String>,
    #[props(default)] min: Option<String>,
    #[props(default)] max: Option<String>,
) -> Element {
    let state = form.read();
    let kind = input_type.unwrap_or_else(|| "text".to_string());
    rsx!(
        FormField {
            label,
            error: state.visible_error(field),
            input {
                class: "input input-bordered w-full",
                r#type: "{kind}",
                step,
                min,
                max,
                value: state.value(field),
                oninput: move |evt: FormEvent| form.write().set(field, evt.value()),
            }
        }
    )
}
