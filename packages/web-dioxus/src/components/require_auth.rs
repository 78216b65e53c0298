//! Session guard for protected admin routes

use dioxus::prelude::*;
use partner_core::GuardDecision;

use crate::auth::use_auth;
use crate::routes::Route;
use super::Redirect;

/// Layout that renders its child route only for an authenticated session.
///
/// Without a credential the user lands on login; the requested path is not
/// remembered.
#[component]
pub fn RequireAuth() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();

    match route.access(auth.credential().as_ref()) {
        Some(GuardDecision::Redirect(path)) => {
            tracing::debug!(from = ?route, to = %path, "Guard redirect");
            rsx! {
                Redirect { to: Route::from(path) }
            }
        }
        _ => rsx! {
            Outlet::<Route> {}
        },
    }
}
