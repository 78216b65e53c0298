//! Admin footer

use dioxus::prelude::*;
use partner_core::SidebarOffset;

/// Fixed footer, offset to clear the sidebar
#[component]
pub fn AdminFooter(offset: SidebarOffset) -> Element {
    let left = offset.left_class();

    rsx! {
        footer {
            class: "fixed bottom-0 right-0 left-0 h-12 bg-white border-t border-gray-200 flex items-center justify-center text-sm text-gray-500 transition-all duration-300 {left}",
            "Autism ABA Partner Admin"
        }
    }
}
