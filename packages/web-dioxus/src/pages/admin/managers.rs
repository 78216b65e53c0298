//! Content manager pages.
//!
//! Editing lives in the backend admin API; these views only give each
//! section a place in the shell.

use dioxus::prelude::*;

#[component]
pub fn GlobalSettings() -> Element {
    rsx! {
        ManagerPage {
            title: "Global Settings",
            description: "Site-wide contact details and branding."
        }
    }
}

#[component]
pub fn SliderManager() -> Element {
    rsx! {
        ManagerPage {
            title: "Hero Slider",
            description: "Slides and overlay text shown on the public home page."
        }
    }
}

#[component]
pub fn ContactsManager() -> Element {
    rsx! {
        ManagerPage {
            title: "Contacts",
            description: "Consultation requests submitted from the contact form."
        }
    }
}

#[component]
pub fn CareersManager() -> Element {
    rsx! {
        ManagerPage {
            title: "Careers",
            description: "Open positions and received applications."
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ManagerPageProps {
    title: &'static str,
    description: &'static str,
}

#[component]
fn ManagerPage(props: ManagerPageProps) -> Element {
    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-2", "{props.title}" }
            p { class: "text-gray-600 mb-6", "{props.description}" }
            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 text-gray-500 text-sm",
                "Nothing to show yet."
            }
        }
    }
}
