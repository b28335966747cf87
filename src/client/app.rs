use dioxus::document::Stylesheet;
use dioxus::prelude::*;

use crate::client::components::ToastHost;
use crate::client::router::Route;
use crate::client::store::{SessionStore, ToastStore};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    use_context_provider(SessionStore::restore);
    use_context_provider(ToastStore::new);

    rsx! {
        Stylesheet { href: TAILWIND_CSS }
        ToastHost {}
        Router::<Route> {}
    }
}
