use crate::state::session::Session;
use std::{cell::RefCell, collections::HashMap, rc::Rc};
use thiserror::Error;
use web_sys::{Storage, Window};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("No window object")]
    NoWindow,
    #[error("No localStorage")]
    Unavailable,
    #[error("failed to write `{0}` to localStorage")]
    Write(&'static str),
    #[error("failed to remove `{0}` from localStorage")]
    Remove(&'static str),
}

pub fn window() -> Result<Window, StorageError> {
    web_sys::window().ok_or(StorageError::NoWindow)
}

pub fn local_storage() -> Result<Storage, StorageError> {
    window()?
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

/// Persistence for the client-held session.
///
/// `load` never fails: anything missing or unreadable is treated as signed out.
pub trait SessionStore {
    fn load(&self) -> Session;
    fn save(&self, session: &Session) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// Builds a session from raw stored values. Unparseable roles are dropped.
pub fn session_from_entries(token: Option<String>, role: Option<String>) -> Session {
    Session {
        token: token.filter(|t| !t.is_empty()),
        role: role.and_then(|raw| raw.parse().ok()),
    }
}

fn entries_for(session: &Session) -> [(&'static str, Option<String>); 2] {
    [
        (TOKEN_KEY, session.token().map(str::to_string)),
        (ROLE_KEY, session.role.map(|role| role.to_string())),
    ]
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Session {
        let Ok(storage) = local_storage() else {
            return Session::signed_out();
        };
        let read = |key: &str| storage.get_item(key).ok().flatten();
        session_from_entries(read(TOKEN_KEY), read(ROLE_KEY))
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        let storage = local_storage()?;
        for (key, value) in entries_for(session) {
            match value {
                Some(value) => storage
                    .set_item(key, &value)
                    .map_err(|_| StorageError::Write(key))?,
                None => storage
                    .remove_item(key)
                    .map_err(|_| StorageError::Remove(key))?,
            }
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let storage = local_storage()?;
        for key in [TOKEN_KEY, ROLE_KEY] {
            storage
                .remove_item(key)
                .map_err(|_| StorageError::Remove(key))?;
        }
        Ok(())
    }
}

/// In-process store used when no browser storage is around (host rendering, tests).
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        );
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Session {
        session_from_entries(self.get(TOKEN_KEY), self.get(ROLE_KEY))
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        let mut entries = self.entries.borrow_mut();
        for (key, value) in entries_for(session) {
            match value {
                Some(value) => {
                    entries.insert(key.to_string(), value);
                }
                None => {
                    entries.remove(key);
                }
            }
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut entries = self.entries.borrow_mut();
        entries.remove(TOKEN_KEY);
        entries.remove(ROLE_KEY);
        Ok(())
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::state::session::Role;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browser_store_persists_to_local_storage() {
        let store = BrowserSessionStore;
        store.save(&Session::new("t1", Role::Admin)).unwrap();

        let storage = local_storage().unwrap();
        assert_eq!(storage.get_item(TOKEN_KEY).unwrap().as_deref(), Some("t1"));
        assert_eq!(storage.get_item(ROLE_KEY).unwrap().as_deref(), Some("ADMIN"));
        assert_eq!(store.load(), Session::new("t1", Role::Admin));

        store.clear().unwrap();
        assert_eq!(store.load(), Session::signed_out());
    }

    #[wasm_bindgen_test]
    fn browser_store_ignores_tampered_role() {
        let storage = local_storage().unwrap();
        storage.set_item(TOKEN_KEY, "t1").unwrap();
        storage.set_item(ROLE_KEY, "SUPERUSER").unwrap();

        assert_eq!(BrowserSessionStore.load().role, None);
        BrowserSessionStore.clear().unwrap();
    }
}
