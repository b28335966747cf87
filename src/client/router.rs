use dioxus::prelude::*;

use crate::client::{
    components::{Navbar, RequireAdmin, RequireUser},
    routes::{Dashboard, Home, Login, Management, NotFound, PlanningDetail, Users},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[layout(RequireUser)]

    #[route("/management")]
    Management {},

    #[route("/planning/:id")]
    PlanningDetail { id: i64 },

    #[layout(RequireAdmin)]

    #[route("/dashboard")]
    Dashboard {},

    #[route("/admin/users")]
    Users {},

    #[end_layout]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
