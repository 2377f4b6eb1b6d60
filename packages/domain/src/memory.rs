use std::sync::{Arc, Mutex, PoisonError};

use crate::session::SessionStore;

/// In-memory SessionStore for testing and non-browser targets.
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    value: Arc<Mutex<Option<String>>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get_raw(&self) -> Option<String> {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_raw(&self, value: &str) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = Some(value.to_string());
    }

    fn remove_raw(&self) {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{UserInfo, UserType};

    fn student() -> UserInfo {
        UserInfo {
            name: "김디미".to_string(),
            user_type: UserType::Student,
            grade: Some(1),
            class: Some(3),
            photo: vec!["p.jpg".to_string()],
        }
    }

    #[test]
    fn test_save_load_clear() {
        let session = MemorySession::new();
        assert!(session.load_user().is_none());

        session.save_user(&student());
        assert_eq!(session.load_user(), Some(student()));

        session.clear();
        assert!(session.load_user().is_none());
        assert!(session.get_raw().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let session = MemorySession::new();
        let other = session.clone();
        session.save_user(&student());
        assert_eq!(other.load_user().map(|u| u.name), Some("김디미".to_string()));
    }

    #[test]
    fn test_corrupt_entry_reads_as_empty() {
        let session = MemorySession::new();
        session.set_raw("{not json");
        assert!(session.load_user().is_none());

        session.set_raw(r#"{"userType":"S"}"#);
        assert!(session.load_user().is_none());
    }
}
