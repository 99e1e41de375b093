// tests/session_flow_tests.rs - Session lifecycle against token storage
//
// Exercises the public session API on the native storage backend: the
// same store/load/clear contract the browser build gets from
// localStorage. Tests share one process-local token slot, so each takes
// the lock below before touching it.

use std::sync::{Mutex, MutexGuard};

use leptos::prelude::*;

use rk_storefront::web_app::api::ApiClient;
use rk_storefront::web_app::session::Session;
use rk_storefront::web_app::storage;

static TOKEN_SLOT_LOCK: Mutex<()> = Mutex::new(());

fn lock() -> MutexGuard<'static, ()> {
    TOKEN_SLOT_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn client() -> ApiClient {
    ApiClient::with_base("http://localhost:8000")
}

#[test]
fn test_startup_without_token_is_unauthenticated() {
    let _guard = lock();
    storage::clear_token();

    let session = Session::new(client());
    assert_eq!(session.token(), "");
    assert!(session.user().get_untracked().is_none());
}

#[test]
fn test_persisted_token_survives_fresh_initialization() {
    let _guard = lock();
    storage::clear_token();

    // What a successful login leaves behind
    storage::store_token("tok-after-login");

    // Simulated reload: a brand new session picks the token up without
    // re-prompting for credentials
    let session = Session::new(client());
    assert_eq!(session.token(), "tok-after-login");

    session.logout();
}

#[test]
fn test_logout_clears_token_and_storage() {
    let _guard = lock();
    storage::store_token("tok-current");

    let session = Session::new(client());
    assert_eq!(session.token(), "tok-current");

    session.logout();
    assert_eq!(session.token(), "");
    assert!(session.user().get_untracked().is_none());
    assert_eq!(storage::load_token(), "");

    // A second logout stays a no-op
    session.logout();
    assert_eq!(storage::load_token(), "");
}

#[test]
fn test_logout_of_one_handle_clears_shared_storage() {
    let _guard = lock();
    storage::store_token("tok-shared");

    let session = Session::new(client());
    session.logout();

    // A later initialization must not resurrect the session
    let fresh = Session::new(client());
    assert_eq!(fresh.token(), "");
}
