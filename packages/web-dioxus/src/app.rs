//! Root application component

use dioxus::prelude::*;
use partner_core::LayoutState;

use crate::auth::AuthProvider;
use crate::routes::Route;

/// Root application component
#[component]
pub fn App() -> Element {
    // Sidebar state outlives individual admin pages; resets on reload
    use_context_provider(|| Signal::new(LayoutState::default()));

    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/main.css") }

        // Auth context provider wraps the entire app
        AuthProvider {
            Router::<Route> {}
        }
    }
}
