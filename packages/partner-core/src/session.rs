//! Tab-scoped admin session
//!
//! The credential is an opaque JSON value. It is read from storage once when
//! the store is opened and written only by [`SessionStore::login`] and
//! [`SessionStore::logout`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::Result;

const DEFAULT_DISPLAY_NAME: &str = "Admin User";
const DEFAULT_EMAIL: &str = "admin@example.com";

/// Opaque value representing a logged-in admin.
///
/// Falsy JSON values (`null`, `false`, `0`, `""`) never form a credential.
#[derive(Debug, Clone, PartialEq)]
pub struct Credential(Value);

impl Credential {
    /// Wrap a value, rejecting falsy ones
    pub fn new(value: Value) -> Option<Self> {
        let truthy = match &value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        };
        truthy.then_some(Self(value))
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Name shown in the profile menu
    pub fn display_name(&self) -> &str {
        self.field("name")
            .or_else(|| self.field("username"))
            .unwrap_or(DEFAULT_DISPLAY_NAME)
    }

    /// Email shown in the profile menu
    pub fn email(&self) -> &str {
        self.field("email").unwrap_or(DEFAULT_EMAIL)
    }

    fn field(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Key/value storage scoped to the browser tab
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<S: SessionStorage + ?Sized> SessionStorage for Rc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

/// In-memory storage for tests and non-browser targets
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with a single raw entry
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Single source of truth for the admin session
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
    key: String,
    credential: Option<Credential>,
}

impl SessionStore {
    /// Open the store, reading any persisted credential.
    ///
    /// Missing, unreadable or malformed entries yield an empty session.
    pub fn open(storage: Box<dyn SessionStorage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let credential = match storage.get_item(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<Value>(&raw) {
                Ok(value) => Credential::new(value),
                Err(e) => {
                    warn!(error = %e, "Ignoring malformed stored credential");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Session storage unreadable");
                None
            }
        };

        debug!(authenticated = credential.is_some(), "Session store opened");

        Self {
            storage,
            key,
            credential,
        }
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// Persist the credential and hold it in memory
    pub fn login(&mut self, credential: Credential) -> Result<()> {
        let raw = serde_json::to_string(credential.value())?;
        self.storage.set_item(&self.key, &raw)?;
        self.credential = Some(credential);
        info!("Admin session started");
        Ok(())
    }

    /// Clear the persisted and in-memory credential.
    ///
    /// The in-memory credential is dropped even if storage refuses the
    /// removal, so the tab is never left authenticated.
    pub fn logout(&mut self) {
        if let Err(e) = self.storage.remove_item(&self.key) {
            warn!(error = %e, "Failed to clear stored credential");
        }
        self.credential = None;
        info!("Admin session ended");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortalError;
    use serde_json::json;

    const KEY: &str = "admin_creds";

    struct BrokenStorage;

    impl SessionStorage for BrokenStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Err(PortalError::Storage("denied".to_string()))
        }
        fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
            Err(PortalError::Storage("denied".to_string()))
        }
        fn remove_item(&self, _key: &str) -> Result<()> {
            Err(PortalError::Storage("denied".to_string()))
        }
    }

    #[test]
    fn test_falsy_values_are_not_credentials() {
        for value in [json!(null), json!(false), json!(0), json!("")] {
            assert!(Credential::new(value).is_none());
        }
        assert!(Credential::new(json!({"username": "admin"})).is_some());
        assert!(Credential::new(json!("token")).is_some());
    }

    #[test]
    fn test_open_empty_storage() {
        let store = SessionStore::open(Box::new(MemoryStorage::new()), KEY);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_open_restores_persisted_credential() {
        let storage = MemoryStorage::with_item(KEY, r#"{"username":"admin","password":"pw"}"#);
        let store = SessionStore::open(Box::new(storage), KEY);
        assert!(store.is_authenticated());
        assert_eq!(store.credential().unwrap().display_name(), "admin");
    }

    #[test]
    fn test_open_ignores_malformed_entry() {
        let storage = MemoryStorage::with_item(KEY, "{not json");
        let store = SessionStore::open(Box::new(storage), KEY);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_open_treats_stored_null_as_logged_out() {
        let storage = MemoryStorage::with_item(KEY, "null");
        let store = SessionStore::open(Box::new(storage), KEY);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_open_survives_unreadable_storage() {
        let store = SessionStore::open(Box::new(BrokenStorage), KEY);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_login_then_logout() {
        let mut store = SessionStore::open(Box::new(MemoryStorage::new()), KEY);
        let credential = Credential::new(json!({"username": "admin"})).unwrap();

        store.login(credential.clone()).unwrap();
        assert_eq!(store.credential(), Some(&credential));

        store.logout();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_login_fails_when_storage_rejects_write() {
        let mut store = SessionStore::open(Box::new(BrokenStorage), KEY);
        let credential = Credential::new(json!({"username": "admin"})).unwrap();
        assert!(store.login(credential).is_err());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_logout_clears_memory_even_if_storage_fails() {
        let storage = MemoryStorage::with_item(KEY, r#"{"username":"admin"}"#);
        let mut store = SessionStore::open(Box::new(storage), KEY);
        store.storage = Box::new(BrokenStorage);
        store.logout();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_profile_defaults() {
        let credential = Credential::new(json!(true)).unwrap();
        assert_eq!(credential.display_name(), "Admin User");
        assert_eq!(credential.email(), "admin@example.com");
    }
}
