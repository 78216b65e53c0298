//! Tab-scoped storage backing the session store

use partner_core::session::SessionStorage;

/// `window.sessionStorage`, falling back to memory when unavailable
#[cfg(feature = "web")]
pub fn tab_storage() -> Box<dyn SessionStorage> {
    match BrowserSessionStorage::new() {
        Some(storage) => Box::new(storage),
        None => {
            tracing::warn!("sessionStorage unavailable, session will not survive reloads");
            Box::new(partner_core::MemoryStorage::new())
        }
    }
}

/// In-memory storage outside the browser
#[cfg(not(feature = "web"))]
pub fn tab_storage() -> Box<dyn SessionStorage> {
    Box::new(partner_core::MemoryStorage::new())
}

#[cfg(feature = "web")]
pub use browser::BrowserSessionStorage;

#[cfg(feature = "web")]
mod browser {
    use partner_core::error::{PortalError, Result};
    use partner_core::session::SessionStorage;

    /// Wrapper around the browser's `sessionStorage`
    pub struct BrowserSessionStorage {
        storage: web_sys::Storage,
    }

    impl BrowserSessionStorage {
        pub fn new() -> Option<Self> {
            let storage = web_sys::window()?.session_storage().ok()??;
            Some(Self { storage })
        }
    }

    fn storage_error(err: wasm_bindgen::JsValue) -> PortalError {
        PortalError::Storage(format!("{err:?}"))
    }

    impl SessionStorage for BrowserSessionStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>> {
            self.storage.get_item(key).map_err(storage_error)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<()> {
            self.storage.set_item(key, value).map_err(storage_error)
        }

        fn remove_item(&self, key: &str) -> Result<()> {
            self.storage.remove_item(key).map_err(storage_error)
        }
    }
}
