use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChartPie, FaGem, FaListCheck};
use dioxus_free_icons::Icon;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::SessionStore;

#[component]
pub fn ActionButtons() -> Element {
    let session = use_context::<SessionStore>();

    rsx!(
        ul { class: "flex flex-wrap justify-center gap-2",
            if session.is_logged_in() {
                li {
                    Link {
                        to: Route::Management {},
                        class: "btn btn-primary w-44",
                        "Open Management"
                    }
                }
                if session.is_admin() {
                    li {
                        Link {
                            to: Route::Dashboard {},
                            class: "btn btn-outline w-44",
                            "Admin Dashboard"
                        }
                    }
                }
            } else {
                li {
                    Link {
                        to: Route::Login {},
                        class: "btn btn-primary w-44",
                        "Sign In"
                    }
                }
            }
        }
    )
}

#[component]
fn FeatureCard(title: String, body: String, icon: Element) -> Element {
    rsx!(
        div { class: "card bg-base-100 shadow-sm w-full max-w-80",
            div { class: "card-body items-center text-center",
                {icon}
                h2 { class: "card-title", "{title}" }
                p { class: "text-sm opacity-80", "{body}" }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Hira Home" }
        Meta {
            name: "description",
            content: "Management console for rough diamond purchasing, processing, and planning."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-6 py-8",
                div { class: "flex items-center gap-3",
                    Icon { width: 40, height: 40, icon: FaGem }
                    div {
                        p { class: "text-3xl font-bold", "Hira" }
                        p { class: "text-sm opacity-70", "Diamond Processing Management" }
                    }
                }
                p { class: "max-w-xl text-center",
                    "Track every stone from rough purchase through the nine processing
                    stages to the finished goods, with planning reports and an admin
                    dashboard over the whole inventory."
                }
                ActionButtons {}
                div { class: "flex flex-wrap justify-center gap-4 px-4",
                    FeatureCard {
                        title: "Inventory Intake",
                        body: "Record rough purchases with vepari and dalal details,
                            weights, pricing, and quality grades.",
                        icon: rsx!(Icon { width: 32, height: 32, icon: FaGem }),
                    }
                    FeatureCard {
                        title: "Nine-Stage Pipeline",
                        body: "Assign packets stage by stage, from nung separation
                            through planning and sawing to polishing, and submit them
                            back with their results.",
                        icon: rsx!(Icon { width: 32, height: 32, icon: FaListCheck }),
                    }
                    FeatureCard {
                        title: "Admin Dashboard",
                        body: "Inventory search, processing logs, transactions, and
                            live charts over stock weight, status, and quality.",
                        icon: rsx!(Icon { width: 32, height: 32, icon: FaChartPie }),
                    }
                }
            }
        }
    )
}
