//! Storage Adapter
//!
//! Collections live as JSON strings in a key-value store. The store is a
//! capability handed to each manager rather than an ambient global, so tests
//! run against an in-memory fake and can inject corrupt values.

use std::cell::RefCell;
use std::collections::HashMap;

use leptos::logging;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const PANTRY_KEY: &str = "pantryItems";
pub const WASTE_KEY: &str = "wasteItems";

/// Minimal persistence capability
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Browser `localStorage` backend
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                logging::error!("failed to write {} to localStorage", key);
            }
        }
    }
}

/// In-memory backend for tests and headless use
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

/// Load a collection, substituting the bundled samples when the key is
/// missing or the stored value does not parse. The parse error goes to the
/// console only; the caller always gets a usable collection.
pub fn load_collection<T, S>(store: &S, key: &str, fallback: fn() -> Vec<T>) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStore,
{
    match store.get(key) {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                logging::error!("failed to load {}: {}", key, err);
                fallback()
            }
        },
        None => fallback(),
    }
}

/// Overwrite the stored collection wholesale. No merge, no partial update.
pub fn save_collection<T, S>(store: &S, key: &str, items: &[T])
where
    T: Serialize,
    S: KeyValueStore,
{
    match serde_json::to_string(items) {
        Ok(raw) => store.set(key, &raw),
        Err(err) => logging::error!("failed to save {}: {}", key, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PantryItem;
    use crate::samples;

    #[test]
    fn test_missing_key_yields_samples() {
        let store = MemoryStore::new();
        let items: Vec<PantryItem> =
            load_collection(&store, PANTRY_KEY, samples::sample_pantry_items);
        assert_eq!(items, samples::sample_pantry_items());
    }

    #[test]
    fn test_corrupt_value_yields_samples() {
        let store = MemoryStore::new();
        store.set(PANTRY_KEY, "{not json[");
        let items: Vec<PantryItem> =
            load_collection(&store, PANTRY_KEY, samples::sample_pantry_items);
        assert_eq!(items, samples::sample_pantry_items());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = MemoryStore::new();
        let mut items = samples::sample_pantry_items();
        items.truncate(2);
        save_collection(&store, PANTRY_KEY, &items);
        let loaded: Vec<PantryItem> =
            load_collection(&store, PANTRY_KEY, samples::sample_pantry_items);
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_save_overwrites_prior_value() {
        let store = MemoryStore::new();
        save_collection(&store, PANTRY_KEY, &samples::sample_pantry_items());
        let empty: Vec<PantryItem> = Vec::new();
        save_collection(&store, PANTRY_KEY, &empty);
        let loaded: Vec<PantryItem> =
            load_collection(&store, PANTRY_KEY, samples::sample_pantry_items);
        assert!(loaded.is_empty());
    }
}
