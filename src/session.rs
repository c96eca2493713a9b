use crate::dto::UserRecord;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// The client-held pair representing a logged-in state: the bearer token and
/// the cached user snapshot captured at login or the latest profile fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserRecord,
}

/// Key/value persistence seam. The browser build runs on `LocalStorage`;
/// tests inject an in-memory backend.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage =
            Self::storage().ok_or_else(|| "local storage unavailable".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("storage write failed: {e:?}"))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Explicit owner of the persisted session. Screens never touch storage keys
/// directly; everything goes through `load`/`save`/`clear`.
#[derive(Clone)]
pub struct SessionStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Reads the persisted session. Absent unless both the token and a
    /// parseable user record are present; malformed data fails soft. A stray
    /// `user` entry without a token does NOT count as a session.
    pub fn load(&self) -> Option<Session> {
        let token = self.backend.get(TOKEN_KEY)?;
        let raw = self.backend.get(USER_KEY)?;
        let user = serde_json::from_str(&raw).ok()?;
        Some(Session { token, user })
    }

    /// Persists token and user snapshot as a unit.
    pub fn save(&self, session: &Session) -> Result<(), String> {
        let user =
            serde_json::to_string(&session.user).map_err(|e| e.to_string())?;
        self.backend.set(TOKEN_KEY, &session.token)?;
        self.backend.set(USER_KEY, &user)
    }

    /// Removes both halves of the session. Best-effort; a missing backend is
    /// already as cleared as it gets.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }
}

pub type BrowserSessionStore = SessionStore<LocalStorage>;

pub fn browser() -> BrowserSessionStore {
    SessionStore::new(LocalStorage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryBackend {
        entries: RefCell<HashMap<String, String>>,
    }

    impl StorageBackend for MemoryBackend {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) {
            self.entries.borrow_mut().remove(key);
        }
    }

    fn sample_session() -> Session {
        Session {
            token: "t1".into(),
            user: UserRecord {
                id: Some("u1".into()),
                name: "Asha".into(),
                email: "asha@example.com".into(),
                role: "doctor".into(),
                verified: true,
                ..Default::default()
            },
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = SessionStore::new(MemoryBackend::default());
        let session = sample_session();
        store.save(&session).expect("save");
        assert_eq!(store.load(), Some(session));
    }

    #[test]
    fn clear_removes_both_keys() {
        let store = SessionStore::new(MemoryBackend::default());
        store.save(&sample_session()).expect("save");
        store.clear();
        assert_eq!(store.load(), None);
        assert!(store.backend.get(TOKEN_KEY).is_none());
        assert!(store.backend.get(USER_KEY).is_none());
    }

    #[test]
    fn malformed_user_json_reads_as_absent() {
        let store = SessionStore::new(MemoryBackend::default());
        store.backend.set(TOKEN_KEY, "t1").expect("set");
        store.backend.set(USER_KEY, "{not json").expect("set");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn user_without_token_is_not_a_session() {
        let store = SessionStore::new(MemoryBackend::default());
        store
            .backend
            .set(USER_KEY, r#"{"name":"Asha","role":"user"}"#)
            .expect("set");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn token_without_user_is_not_a_session() {
        let store = SessionStore::new(MemoryBackend::default());
        store.backend.set(TOKEN_KEY, "t1").expect("set");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let store = SessionStore::new(MemoryBackend::default());
        store.save(&sample_session()).expect("save");
        let mut refreshed = sample_session();
        refreshed.token = "t2".into();
        refreshed.user.name = "Asha K".into();
        store.save(&refreshed).expect("save");
        assert_eq!(store.load(), Some(refreshed));
    }
}
