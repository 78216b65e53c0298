//! Home page component

use dioxus::prelude::*;

use crate::components::Hero;

/// Home page: hero slideshow over a short services summary
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-white",

            Hero {}

            section {
                id: "services",
                class: "max-w-6xl mx-auto px-6 py-16 grid gap-8 md:grid-cols-3",
                ServiceCard {
                    title: "ABA Therapy",
                    body: "One-to-one sessions built around each child's goals."
                }
                ServiceCard {
                    title: "Parent Training",
                    body: "Practical strategies families can use every day."
                }
                ServiceCard {
                    title: "School Support",
                    body: "Working alongside teachers to carry progress into the classroom."
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ServiceCardProps {
    title: &'static str,
    body: &'static str,
}

#[component]
fn ServiceCard(props: ServiceCardProps) -> Element {
    rsx! {
        div {
            class: "rounded-2xl border border-gray-200 p-6 shadow-sm",
            h3 { class: "text-xl font-semibold text-gray-900 mb-2", "{props.title}" }
            p { class: "text-gray-600", "{props.body}" }
        }
    }
}
