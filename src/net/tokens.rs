//! Credential-pair storage.
//!
//! The access/refresh token pair lives in browser `localStorage` under two
//! fixed keys and is owned exclusively by [`TokenStore`]: written on
//! login/register/refresh, cleared on logout or an unrecoverable refresh
//! failure. Outside a browser context every read returns `None` and writes
//! are dropped.

#[cfg(test)]
#[path = "tokens_test.rs"]
mod tokens_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

const ACCESS_KEY: &str = "access_token";
const REFRESH_KEY: &str = "refresh_token";

/// Key-value storage seam behind the token store.
pub trait TokenBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// Facade over the persisted credential pair.
///
/// Pure storage: no network calls and no session-state side effects.
#[derive(Clone)]
pub struct TokenStore {
    backend: Rc<dyn TokenBackend>,
}

impl TokenStore {
    /// Store backed by the browser's `localStorage`; a null backend when
    /// compiled without a browser environment.
    pub fn persistent() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self { backend: Rc::new(LocalStorageBackend) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self { backend: Rc::new(NullBackend) }
        }
    }

    /// Store backed by a process-local map. Used in tests.
    pub fn in_memory() -> Self {
        Self::with_backend(Rc::new(MemoryBackend::default()))
    }

    /// Store over an arbitrary backend.
    pub fn with_backend(backend: Rc<dyn TokenBackend>) -> Self {
        Self { backend }
    }

    pub fn access(&self) -> Option<String> {
        self.backend.read(ACCESS_KEY)
    }

    pub fn refresh(&self) -> Option<String> {
        self.backend.read(REFRESH_KEY)
    }

    /// Overwrite both halves of the credential pair.
    pub fn store(&self, access: &str, refresh: &str) {
        self.backend.write(ACCESS_KEY, access);
        self.backend.write(REFRESH_KEY, refresh);
    }

    /// Remove both halves of the credential pair.
    pub fn clear(&self) {
        self.backend.delete(ACCESS_KEY);
        self.backend.delete(REFRESH_KEY);
    }
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryBackend {
    values: RefCell<HashMap<String, String>>,
}

impl TokenBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn delete(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Backend used outside the browser: reads are empty, writes are dropped.
pub struct NullBackend;

impl TokenBackend for NullBackend {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&self, _key: &str, _value: &str) {}

    fn delete(&self, _key: &str) {}
}

/// Backend over `window.localStorage`.
#[cfg(feature = "hydrate")]
pub struct LocalStorageBackend;

#[cfg(feature = "hydrate")]
impl LocalStorageBackend {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl TokenBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn delete(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
