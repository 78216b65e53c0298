//! Authentication context provider

use dioxus::prelude::*;
use partner_core::config;
use partner_core::session::{Credential, SessionStore};

use super::storage::tab_storage;

/// Authentication context that provides the session to the entire app
#[derive(Clone, Copy)]
pub struct AuthContext {
    store: Signal<SessionStore>,
}

impl AuthContext {
    /// Current credential, if logged in
    pub fn credential(&self) -> Option<Credential> {
        self.store.read().credential().cloned()
    }

    /// Check if the user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.store.read().is_authenticated()
    }

    /// Persist a credential produced by the login form
    pub fn login(&self, credential: Credential) -> partner_core::Result<()> {
        let mut store = self.store;
        store.with_mut(|store| store.login(credential))
    }

    /// Clear the session. The caller routes to login afterwards.
    pub fn logout(&self) {
        let mut store = self.store;
        store.write().logout();
    }
}

/// Auth provider component that wraps the app
#[component]
pub fn AuthProvider(children: Element) -> Element {
    // Storage is read exactly once, when the provider mounts
    let store = use_signal(|| SessionStore::open(tab_storage(), config::current().session_key));

    use_context_provider(|| AuthContext { store });

    children
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    thread_local! {
        static LOGGED_IN: Cell<Option<bool>> = const { Cell::new(None) };
    }

    #[component]
    fn SignsIn() -> Element {
        let auth = use_auth();
        use_hook(move || {
            let credential = Credential::new(json!({"username": "admin"})).unwrap();
            let stored = auth.login(credential).is_ok();
            LOGGED_IN.with(|flag| flag.set(Some(stored && auth.is_authenticated())));
        });
        rsx! {}
    }

    fn app() -> Element {
        rsx! {
            AuthProvider { SignsIn {} }
        }
    }

    #[test]
    fn test_login_through_context_authenticates() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        assert_eq!(LOGGED_IN.with(|flag| flag.get()), Some(true));
    }
}
