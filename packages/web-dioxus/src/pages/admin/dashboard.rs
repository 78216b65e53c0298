//! Admin dashboard page

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

/// Admin landing page with links into each manager
#[component]
pub fn AdminDashboard() -> Element {
    let auth = use_auth();
    let name = auth
        .credential()
        .map(|c| c.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Dashboard" }
            p { class: "text-gray-600 mb-6", "Welcome back, {name}." }

            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Quick Actions" }
                div {
                    class: "flex flex-wrap gap-3",
                    QuickActionLink {
                        to: Route::GlobalSettings {},
                        label: "Global Settings",
                        icon: "\u{2699}\u{FE0F}"
                    }
                    QuickActionLink {
                        to: Route::SliderManager {},
                        label: "Edit Hero Slider",
                        icon: "\u{1F5BC}\u{FE0F}"
                    }
                    QuickActionLink {
                        to: Route::ContactsManager {},
                        label: "Review Contacts",
                        icon: "\u{2709}\u{FE0F}"
                    }
                    QuickActionLink {
                        to: Route::CareersManager {},
                        label: "Manage Careers",
                        icon: "\u{1F4BC}"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct QuickActionLinkProps {
    to: Route,
    label: &'static str,
    icon: &'static str,
}

#[component]
fn QuickActionLink(props: QuickActionLinkProps) -> Element {
    rsx! {
        Link {
            to: props.to.clone(),
            class: "inline-flex items-center gap-2 px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors",
            span { "{props.icon}" }
            "{props.label}"
        }
    }
}
