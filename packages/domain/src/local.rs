//! # localStorage session — browser-side cached user
//!
//! [`LocalStorageSession`] is the [`SessionStore`] used on the web platform. It
//! reads the entry written by the sign-in flow from `window.localStorage`.
//!
//! Storage can be unavailable (private mode, sandboxed iframes). Every method
//! then degrades to "no session" instead of failing.

use crate::session::{SessionStore, USER_INFO_KEY};

/// localStorage-backed SessionStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageSession;

impl LocalStorageSession {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStorageSession {
    fn get_raw(&self) -> Option<String> {
        Self::storage()?.get_item(USER_INFO_KEY).ok().flatten()
    }

    fn set_raw(&self, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(USER_INFO_KEY, value).is_err() {
                tracing::warn!("localStorage rejected the session entry");
            }
        }
    }

    fn remove_raw(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(USER_INFO_KEY);
        }
    }
}
