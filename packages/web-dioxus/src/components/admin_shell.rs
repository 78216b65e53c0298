//! Admin layout: sidebar, header and footer around the routed page

use dioxus::prelude::*;
use partner_core::{AdminPath, LayoutState, ShellLayout};

use crate::auth::use_auth;
use crate::routes::Route;
use super::{AdminFooter, AdminHeader, AdminSidebar};

/// Shell wrapping every admin route, login included.
///
/// Chrome is shown only off the login page and with a session; the content
/// offset follows the sidebar width.
#[component]
pub fn AdminShell() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let layout = use_context::<Signal<LayoutState>>();

    let on_login_route = route.admin_path() == Some(AdminPath::Login);
    let shell = ShellLayout::compute(
        on_login_route,
        auth.is_authenticated(),
        layout.read().is_expanded,
    );

    let handle_logout = move |_| {
        auth.logout();
        navigator.replace(Route::AdminLogin {});
    };

    rsx! {
        if shell.show_chrome {
            AdminSidebar {}
            AdminHeader { on_logout: handle_logout }
            AdminFooter { offset: shell.footer_offset() }
        }

        div {
            class: shell.content_class(),
            Outlet::<Route> {}
        }
    }
}
