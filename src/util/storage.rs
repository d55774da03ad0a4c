//! Durable key-value storage for assignments that failed to save.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build persists into `window.localStorage`; tests and non-browser
//! hosts use [`MemoryStore`]. The fallback mapping is only written after a
//! failed save and is never read back to initialize the display.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::OverlayError;
use crate::net::types::PokemonAssignment;

/// String key-value store with `localStorage` semantics.
pub trait FallbackStore {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`OverlayError::Storage`] if the backend rejects the write
    /// (quota exceeded, storage disabled).
    fn set_item(&self, key: &str, value: &str) -> Result<(), OverlayError>;
}

/// Load a JSON value stored under `key`.
pub fn load_json<T: DeserializeOwned>(store: &dyn FallbackStore, key: &str) -> Option<T> {
    let raw = store.get_item(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value under `key`.
///
/// # Errors
///
/// Returns an error if `value` cannot be serialized or the store rejects it.
pub fn save_json<T: Serialize>(store: &dyn FallbackStore, key: &str, value: &T) -> Result<(), OverlayError> {
    let raw = serde_json::to_string(value).map_err(|e| OverlayError::Storage(e.to_string()))?;
    store.set_item(key, &raw)
}

/// Usernames mapped to their last unsaved assignment payloads.
pub type FallbackAssignments = serde_json::Map<String, serde_json::Value>;

/// Read the fallback mapping; a missing or unreadable entry counts as empty.
pub fn fallback_assignments(store: &dyn FallbackStore, key: &str) -> FallbackAssignments {
    load_json(store, key).unwrap_or_default()
}

/// Merge `assignment` for `username` into the fallback mapping under `key`,
/// overwriting any previous entry for that user.
///
/// # Errors
///
/// Returns an error if the updated mapping cannot be written.
pub fn record_fallback_assignment(
    store: &dyn FallbackStore,
    key: &str,
    username: &str,
    assignment: &PokemonAssignment,
) -> Result<(), OverlayError> {
    let mut stored = fallback_assignments(store, key);
    stored.insert(username.to_owned(), assignment.as_value().clone());
    save_json(store, key, &stored)
}

/// In-process store for tests and hosts without `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FallbackStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), OverlayError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store backed by `window.localStorage`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "hydrate")]
impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl FallbackStore for LocalStorageStore {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), OverlayError> {
        let storage = Self::storage().ok_or_else(|| OverlayError::Storage("localStorage unavailable".to_owned()))?;
        storage
            .set_item(key, value)
            .map_err(|e| OverlayError::Storage(format!("{e:?}")))
    }
}
