use dioxus::prelude::*;

use crate::client::components::BrandTitle;
use crate::client::router::Route;
use crate::client::store::SessionStore;

#[component]
pub fn Navbar() -> Element {
    let mut session = use_context::<SessionStore>();
    let nav = navigator();
    let user = session.user();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                BrandTitle {}
            }
            div {
                class: "navbar-center",
                ul { class: "menu menu-horizontal gap-1",
                    li {
                        Link { to: Route::Home {}, "Home" }
                    }
                    if session.is_logged_in() {
                        li {
                            Link { to: Route::Management {}, "Management" }
                        }
                    }
                    if session.is_admin() {
                        li {
                            Link { to: Route::Dashboard {}, "Dashboard" }
                        }
                        li {
                            Link { to: Route::Users {}, "Users" }
                        }
                    }
                }
            }
            div {
                class: "navbar-end",
                if let Some(user) = user {
                    div { class: "flex items-center gap-3",
                        div { class: "flex flex-col items-end",
                            p { class: "text-sm font-semibold",
                                "{user.name}"
                            }
                            p { class: "text-xs",
                                {user.role.label()}
                            }
                        }
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| {
                                session.logout();
                                nav.push(Route::Home {});
                            },
                            "Logout"
                        }
                    }
                } else {
                    Link {
                        to: Route::Login {},
                        class: "btn btn-primary",
                        "Sign In"
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
