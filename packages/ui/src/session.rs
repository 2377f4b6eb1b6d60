//! Session context: the cached user as seen by the page.

use dioxus::prelude::*;
use domain::{SessionStore, UserInfo};

/// Cached user; `None` until the store has been read on the client.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub user: Option<UserInfo>,
}

/// Get the current session state.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// The session store for the current platform.
pub fn make_session_store() -> impl SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        domain::LocalStorageSession::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        static MEMORY: std::sync::OnceLock<domain::MemorySession> = std::sync::OnceLock::new();
        MEMORY.get_or_init(domain::MemorySession::new).clone()
    }
}

/// Provider component that reads the cached user once the page is mounted.
/// Wrap your app with this component to enable [`use_session`].
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session = use_signal(SessionState::default);

    // Effects only run on the client, where the storage lives
    use_effect(move || {
        let user = make_session_store().load_user();
        session.set(SessionState { user });
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::UserType;

    #[test]
    fn test_platform_store_is_shared() {
        let info = UserInfo {
            name: "김디미".to_string(),
            user_type: UserType::Student,
            grade: Some(3),
            class: Some(6),
            photo: Vec::new(),
        };
        make_session_store().save_user(&info);
        assert_eq!(make_session_store().load_user(), Some(info));

        make_session_store().clear();
        assert!(make_session_store().load_user().is_none());
    }
}
