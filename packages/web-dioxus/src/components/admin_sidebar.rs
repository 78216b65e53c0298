//! Admin sidebar navigation

use dioxus::prelude::*;
use partner_core::LayoutState;

use crate::routes::Route;

/// Collapsible sidebar; a drawer with backdrop on mobile
#[component]
pub fn AdminSidebar() -> Element {
    let mut layout = use_context::<Signal<LayoutState>>();
    let state = *layout.read();

    let width = if state.is_expanded { "w-64" } else { "w-20" };
    let drawer = if state.is_open { "translate-x-0" } else { "-translate-x-full lg:translate-x-0" };

    rsx! {
        // Mobile backdrop
        if state.is_open {
            div {
                class: "fixed inset-0 bg-black/40 z-[950] lg:hidden",
                onclick: move |_| layout.write().close_mobile(),
            }
        }

        aside {
            class: "fixed inset-y-0 left-0 z-[960] bg-slate-900 text-white flex flex-col transition-all duration-300 {width} {drawer}",

            // Brand + collapse toggle
            div {
                class: "h-20 md:h-24 flex items-center justify-between px-4 border-b border-white/10",
                if state.is_expanded {
                    span { class: "font-bold text-lg tracking-wide", "ABA Admin" }
                }
                button {
                    class: "hidden lg:inline-flex p-2 rounded-lg hover:bg-white/10",
                    aria_label: if state.is_expanded { "Collapse sidebar" } else { "Expand sidebar" },
                    onclick: move |_| layout.write().toggle_expanded(),
                    if state.is_expanded { "\u{00AB}" } else { "\u{00BB}" }
                }
                button {
                    class: "lg:hidden p-2 rounded-lg hover:bg-white/10",
                    aria_label: "Close sidebar",
                    onclick: move |_| layout.write().close_mobile(),
                    "\u{2715}"
                }
            }

            // Nav links
            nav {
                class: "flex-1 py-4 space-y-1",
                SidebarLink { to: Route::AdminDashboard {}, label: "Dashboard", icon: "\u{1F3E0}", expanded: state.is_expanded }
                SidebarLink { to: Route::GlobalSettings {}, label: "Global Settings", icon: "\u{2699}\u{FE0F}", expanded: state.is_expanded }
                SidebarLink { to: Route::SliderManager {}, label: "Slider", icon: "\u{1F5BC}\u{FE0F}", expanded: state.is_expanded }
                SidebarLink { to: Route::ContactsManager {}, label: "Contacts", icon: "\u{2709}\u{FE0F}", expanded: state.is_expanded }
                SidebarLink { to: Route::CareersManager {}, label: "Careers", icon: "\u{1F4BC}", expanded: state.is_expanded }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SidebarLinkProps {
    to: Route,
    label: &'static str,
    icon: &'static str,
    expanded: bool,
}

#[component]
fn SidebarLink(props: SidebarLinkProps) -> Element {
    let route = use_route::<Route>();
    let mut layout = use_context::<Signal<LayoutState>>();
    let is_active = route == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active {
                "mx-3 flex items-center gap-3 px-3 py-2 rounded-lg text-sm font-medium bg-orange-500 text-white"
            } else {
                "mx-3 flex items-center gap-3 px-3 py-2 rounded-lg text-sm font-medium text-slate-300 hover:bg-white/10 hover:text-white"
            },
            onclick: move |_| layout.write().close_mobile(),
            span { class: "text-lg", "{props.icon}" }
            if props.expanded {
                span { "{props.label}" }
            }
        }
    }
}
