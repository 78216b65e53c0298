//! Admin search results

use dioxus::prelude::*;
use partner_core::SearchQuery;

/// Results view for a query submitted from the header search bar
#[component]
pub fn AdminSearch(q: SearchQuery) -> Element {
    let q = q.into_inner();

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Search" }
            if q.is_empty() {
                p { class: "text-gray-600", "Enter a term in the search bar above." }
            } else {
                p {
                    class: "text-gray-600 mb-6",
                    "Results for "
                    span { class: "font-semibold text-gray-900", "\u{201C}{q}\u{201D}" }
                }
                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 text-gray-500 text-sm",
                    "No matches found."
                }
            }
        }
    }
}
