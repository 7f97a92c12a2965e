//! Key-value persistence behind a small trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! Theme preference and registration drafts are the only persisted state.
//! Components receive a `KeyValueStore` instead of reaching for
//! `window.localStorage` directly, so tests can swap in `MemoryStore`.
//!
//! TRADE-OFFS
//! ==========
//! Storage is synchronous and single-threaded on the page, so the trait
//! takes `&self` and `MemoryStore` uses a `RefCell` rather than a lock.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::SiteError;

/// Synchronous string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError>;
    fn set(&self, key: &str, value: &str) -> Result<(), SiteError>;
    fn remove(&self, key: &str) -> Result<(), SiteError>;
}

/// In-process store used by tests and as the fallback when the browser
/// refuses `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SiteError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// `window.localStorage` backend.
#[cfg(feature = "csr")]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "csr")]
impl LocalStore {
    /// Open the page's local storage.
    pub fn open() -> Result<Self, SiteError> {
        let window = web_sys::window().ok_or(SiteError::StorageUnavailable)?;
        let storage = window
            .local_storage()
            .map_err(|_| SiteError::StorageUnavailable)?
            .ok_or(SiteError::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

#[cfg(feature = "csr")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        self.storage
            .get_item(key)
            .map_err(|_| SiteError::Storage { op: "get", key: key.to_owned() })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| SiteError::Storage { op: "set", key: key.to_owned() })
    }

    fn remove(&self, key: &str) -> Result<(), SiteError> {
        self.storage
            .remove_item(key)
            .map_err(|_| SiteError::Storage { op: "remove", key: key.to_owned() })
    }
}

/// Load and decode a JSON value stored under `key`.
///
/// Returns `Ok(None)` when nothing is stored; a stored value that fails to
/// decode is an error so callers can report it.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, SiteError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Encode `value` as JSON and store it under `key`, replacing any prior value.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), SiteError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
