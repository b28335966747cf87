use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaGem;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn BrandTitle() -> Element {
    rsx!(
        Link {
            to: Route::Home {},
            div { class: "flex items-center gap-2",
                Icon {
                    width: 20,
                    height: 20,
                    icon: FaGem
                }
                p { class: "text-xl",
                    "Hira"
                }
                p { class: "text-xs",
                    "Diamond Processing"
                }
            }
        }
    )
}
