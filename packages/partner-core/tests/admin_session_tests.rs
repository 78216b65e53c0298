use std::rc::Rc;
use std::time::Duration;

use partner_core::header::{HeaderCommand, HeaderController, HeaderEvent};
use partner_core::routing::{guard, AdminPath, GuardDecision};
use partner_core::session::{Credential, MemoryStorage, SessionStore};
use partner_core::timer;
use serde_json::json;

const KEY: &str = "admin_creds";

fn logged_in_store(storage: Rc<MemoryStorage>) -> SessionStore {
    let mut store = SessionStore::open(Box::new(storage), KEY);
    let credential = Credential::new(json!({"username": "admin", "password": "secret"})).unwrap();
    store.login(credential).unwrap();
    store
}

#[test]
fn test_no_credential_renders_login_instead_of_settings() {
    let store = SessionStore::open(Box::new(MemoryStorage::new()), KEY);
    assert_eq!(
        guard(Some(AdminPath::Settings), store.credential()),
        GuardDecision::Redirect(AdminPath::Login)
    );
}

#[test]
fn test_persisted_credential_survives_reopen() {
    let storage = Rc::new(MemoryStorage::new());
    let _store = logged_in_store(storage.clone());

    let reopened = SessionStore::open(Box::new(storage), KEY);
    assert!(reopened.is_authenticated());
    assert_eq!(
        guard(Some(AdminPath::Slider), reopened.credential()),
        GuardDecision::Render(AdminPath::Slider)
    );
}

#[test]
fn test_escape_dismisses_confirmation_without_logging_out() {
    let storage = Rc::new(MemoryStorage::new());
    let store = logged_in_store(storage);
    let mut header = HeaderController::default();

    assert_eq!(header.decide(&HeaderEvent::LogoutRequested), None);
    assert!(header.modal_open());

    assert_eq!(header.decide(&HeaderEvent::EscapePressed), None);
    assert!(!header.modal_open());
    assert!(store.is_authenticated());
}

#[tokio::test(start_paused = true)]
async fn test_confirmed_logout_clears_session_after_delay() {
    let storage = Rc::new(MemoryStorage::new());
    let mut store = logged_in_store(storage.clone());
    let mut header = HeaderController::default();

    header.decide(&HeaderEvent::LogoutRequested);
    let delay = match header.decide(&HeaderEvent::LogoutConfirmed) {
        Some(HeaderCommand::StartLogoutDelay(delay)) => delay,
        other => panic!("expected logout delay, got {other:?}"),
    };
    assert_eq!(delay, Duration::from_millis(1500));
    assert!(header.logging_out());

    let started = tokio::time::Instant::now();
    let command = timer::after_delay(delay, || header.decide(&HeaderEvent::LogoutDelayElapsed)).await;
    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert_eq!(command, Some(HeaderCommand::InvokeLogout));

    store.logout();
    assert!(!store.is_authenticated());
    assert!(!header.logging_out());
    assert_eq!(
        guard(Some(AdminPath::Dashboard), store.credential()),
        GuardDecision::Redirect(AdminPath::Login)
    );

    let reopened = SessionStore::open(Box::new(storage), KEY);
    assert!(!reopened.is_authenticated());
}
