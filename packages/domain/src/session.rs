//! # Cached session — the page's view of the sign-in state
//!
//! The sign-in flow stores the current user as JSON under [`USER_INFO_KEY`].
//! The main page reads it synchronously on mount and clears it on logout; it
//! never writes it otherwise.
//!
//! Backends only move raw strings. Decoding happens here, so a corrupted entry
//! behaves like an empty session on every platform.

use crate::models::UserInfo;

/// Storage key of the serialised [`UserInfo`].
pub const USER_INFO_KEY: &str = "dimigo-user";

/// Key/value storage holding the cached user.
pub trait SessionStore {
    fn get_raw(&self) -> Option<String>;
    fn set_raw(&self, value: &str);
    fn remove_raw(&self);

    /// The cached user, or `None` if absent or unreadable.
    fn load_user(&self) -> Option<UserInfo> {
        let raw = self.get_raw()?;
        match serde_json::from_str(&raw) {
            Ok(info) => Some(info),
            Err(e) => {
                tracing::warn!("Ignoring unreadable cached user: {}", e);
                None
            }
        }
    }

    fn save_user(&self, info: &UserInfo) {
        match serde_json::to_string(info) {
            Ok(raw) => self.set_raw(&raw),
            Err(e) => tracing::error!("Failed to serialise user info: {}", e),
        }
    }

    fn clear(&self) {
        self.remove_raw();
    }
}
