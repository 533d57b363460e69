//! Pantry Manager
//!
//! CRUD over the pantry collection plus the expiry-window rules. Note the
//! two expiry predicates differ on purpose: the table highlights anything
//! within (or past) three days, while the dashboard list drops items that
//! have already expired.

use chrono::NaiveDate;

use crate::models::{next_entry_id, Category, PantryItem, Unit, WasteDraft};
use crate::samples;
use crate::storage::{self, KeyValueStore, PANTRY_KEY};

/// Whole days until the item expires; negative once past
pub fn days_until_expiry(item: &PantryItem, today: NaiveDate) -> i64 {
    (item.expiry_date - today).num_days()
}

/// Table-highlight rule: within three days, already-expired included
pub fn is_expiring(item: &PantryItem, today: NaiveDate) -> bool {
    days_until_expiry(item, today) <= 3
}

/// Dashboard rule: expiring within three days but not yet expired
pub fn expiring_soon(items: &[PantryItem], today: NaiveDate) -> Vec<PantryItem> {
    items
        .iter()
        .filter(|item| {
            let days = days_until_expiry(item, today);
            (0..=3).contains(&days)
        })
        .cloned()
        .collect()
}

/// Rough discarded-weight estimate in kg for a converted pantry item
pub fn estimated_waste_weight(item: &PantryItem) -> f64 {
    match item.unit {
        Unit::Kg => item.quantity,
        Unit::G => item.quantity / 1000.0,
        Unit::Pcs => item.quantity * 0.1,
        _ => 0.1,
    }
}

pub struct PantryManager<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PantryManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<PantryItem> {
        storage::load_collection(&self.store, PANTRY_KEY, samples::sample_pantry_items)
    }

    /// Validates, appends and persists a new item. The `String` error is the
    /// alert text shown to the user; nothing is persisted on failure.
    pub fn add(
        &self,
        name: &str,
        quantity: f64,
        unit: Unit,
        category: Category,
        expiry_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<PantryItem, String> {
        let name = name.trim();
        if name.is_empty() || !(quantity > 0.0) {
            return Err("Please enter a valid name and quantity.".to_string());
        }

        let item = PantryItem {
            id: next_entry_id(),
            name: name.to_string(),
            quantity,
            unit,
            category,
            added_date: today,
            expiry_date,
        };

        let mut items = self.list();
        items.push(item.clone());
        storage::save_collection(&self.store, PANTRY_KEY, &items);
        Ok(item)
    }

    /// Removes by id and persists. Removing an unknown id is a no-op.
    pub fn remove(&self, id: &str) -> Vec<PantryItem> {
        let mut items = self.list();
        items.retain(|item| item.id != id);
        storage::save_collection(&self.store, PANTRY_KEY, &items);
        items
    }

    /// Removes the item and hands back a draft for the waste log form. The
    /// removal happens immediately; the draft only becomes a waste entry
    /// when the user submits the log form.
    pub fn convert_to_waste(&self, id: &str) -> Option<WasteDraft> {
        let items = self.list();
        let item = items.iter().find(|item| item.id == id)?;
        let draft = WasteDraft {
            name: item.name.clone(),
            category: item.category,
            weight: estimated_waste_weight(item),
        };
        self.remove(id);
        Some(draft)
    }
}
