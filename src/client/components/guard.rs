use dioxus::prelude::*;

use crate::client::router::Route;
use crate::client::store::SessionStore;

/// Layout that renders its child routes only with a live session and sends
/// everyone else to the sign-in screen. Losing the session while inside,
/// through logout or expiry, redirects the same way.
#[component]
pub fn RequireUser() -> Element {
    let session = use_context::<SessionStore>();
    let nav = navigator();
    let logged_in = session.is_logged_in();

    use_effect(move || {
        if !session.is_logged_in() {
            nav.replace(Route::Login {});
        }
    });

    if logged_in {
        rsx!( Outlet::<Route> {} )
    } else {
        rsx!()
    }
}

/// Layout below [`RequireUser`] that additionally demands the admin role.
#[component]
pub fn RequireAdmin() -> Element {
    let session = use_context::<SessionStore>();
    let nav = navigator();
    let is_admin = session.is_admin();

    use_effect(move || {
        if !session.is_admin() {
            nav.replace(Route::Home {});
        }
    });

    if is_admin {
        rsx!( Outlet::<Route> {} )
    } else {
        rsx!()
    }
}
