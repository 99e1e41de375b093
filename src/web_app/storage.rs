// web_app/storage.rs - Bearer token persistence
//
// The token lives under a single fixed key. In the browser that is
// localStorage; native builds (tests) use a process-local slot with the
// same contract so session logic stays exercisable off-browser.

/// Storage key for the persisted bearer token
pub const TOKEN_KEY: &str = "rk_token";

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        fn local_storage() -> Option<web_sys::Storage> {
            web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        }

        /// Read any previously persisted token; empty when absent.
        pub fn load_token() -> String {
            local_storage()
                .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
                .unwrap_or_default()
        }

        /// Persist the token across reloads.
        pub fn store_token(token: &str) {
            match local_storage() {
                Some(storage) => {
                    if storage.set_item(TOKEN_KEY, token).is_err() {
                        tracing::error!("failed to persist bearer token");
                    }
                }
                None => tracing::error!("localStorage unavailable; token not persisted"),
            }
        }

        /// Erase the persisted token; idempotent.
        pub fn clear_token() {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    } else {
        use std::sync::Mutex;

        static TOKEN_SLOT: Mutex<Option<String>> = Mutex::new(None);

        /// Read any previously persisted token; empty when absent.
        pub fn load_token() -> String {
            TOKEN_SLOT
                .lock()
                .map(|slot| slot.clone().unwrap_or_default())
                .unwrap_or_default()
        }

        /// Persist the token for the lifetime of the process.
        pub fn store_token(token: &str) {
            if let Ok(mut slot) = TOKEN_SLOT.lock() {
                *slot = Some(token.to_string());
            }
        }

        /// Erase the persisted token; idempotent.
        pub fn clear_token() {
            if let Ok(mut slot) = TOKEN_SLOT.lock() {
                *slot = None;
            }
        }
    }
}

/// Serializes tests that touch the shared native token slot.
#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) fn test_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
