//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! in-memory mirror of the two persisted collections; components read from
//! here, mutations go through the managers and then refresh this store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{PantryItem, WasteItem};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Pantry collection as last loaded from storage
    pub pantry_items: Vec<PantryItem>,
    /// Waste log as last loaded from storage
    pub waste_items: Vec<WasteItem>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the pantry collection after a reload or mutation
pub fn store_set_pantry(store: &AppStore, items: Vec<PantryItem>) {
    *store.pantry_items().write() = items;
}

/// Replace the waste log after a reload or mutation
pub fn store_set_waste(store: &AppStore, items: Vec<WasteItem>) {
    *store.waste_items().write() = items;
}
