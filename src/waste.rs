//! Waste Log Manager
//!
//! Append-only log of discarded food plus the current-calendar-month
//! aggregate used by the summary line and the eco report.

use chrono::{Datelike, NaiveDate};

use crate::models::{next_entry_id, Category, WasteItem, WasteReason};
use crate::samples;
use crate::storage::{self, KeyValueStore, WASTE_KEY};

/// Sum of weights logged in the same calendar month and year as `today`
/// (local calendar, not a rolling 30 days)
pub fn monthly_total(items: &[WasteItem], today: NaiveDate) -> f64 {
    items
        .iter()
        .filter(|item| item.date.month() == today.month() && item.date.year() == today.year())
        .map(|item| item.weight)
        .sum()
}

/// Display form of the monthly total
pub fn format_weight(total: f64) -> String {
    format!("{:.2} kg", total)
}

pub struct WasteManager<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> WasteManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<WasteItem> {
        storage::load_collection(&self.store, WASTE_KEY, samples::sample_waste_items)
    }

    /// Validates, appends and persists a waste entry dated today. Entries
    /// are immutable once logged and never deleted in normal flow.
    pub fn log(
        &self,
        name: &str,
        weight: f64,
        category: Category,
        reason: WasteReason,
        today: NaiveDate,
    ) -> Result<WasteItem, String> {
        let name = name.trim();
        if name.is_empty() || !(weight > 0.0) {
            return Err("Enter a valid item name and weight.".to_string());
        }

        let item = WasteItem {
            id: next_entry_id(),
            name: name.to_string(),
            weight,
            category,
            reason,
            date: today,
        };

        let mut items = self.list();
        items.push(item.clone());
        storage::save_collection(&self.store, WASTE_KEY, &items);
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 4).unwrap()
    }

    fn make_entry(id: &str, weight: f64, date: NaiveDate) -> WasteItem {
        WasteItem {
            id: id.to_string(),
            name: format!("Entry {}", id),
            weight,
            category: Category::Vegetable,
            reason: WasteReason::Spoiled,
            date,
        }
    }

    fn seeded_manager(items: &[WasteItem]) -> WasteManager<MemoryStore> {
        let store = MemoryStore::new();
        storage::save_collection(&store, WASTE_KEY, items);
        WasteManager::new(store)
    }

    #[test]
    fn test_log_appends_entry_dated_today() {
        let manager = seeded_manager(&samples::sample_waste_items());
        let before = manager.list();

        let logged = manager
            .log("Lettuce", 0.12, Category::Vegetable, WasteReason::Spoiled, today())
            .unwrap();

        let after = manager.list();
        assert_eq!(after.len(), before.len() + 1);
        let stored = after.last().unwrap();
        assert_eq!(stored, &logged);
        assert_eq!(stored.date, today());
        assert!(before.iter().all(|item| item.id != logged.id));
    }

    #[test]
    fn test_log_rejects_invalid_input_without_mutating() {
        let manager = seeded_manager(&samples::sample_waste_items());
        let before = manager.list();

        for (name, weight) in [("", 0.2), ("  ", 0.2), ("Bread", 0.0), ("Bread", -1.0), ("Bread", f64::NAN)] {
            let result = manager.log(name, weight, Category::Grain, WasteReason::Expired, today());
            assert_eq!(result, Err("Enter a valid item name and weight.".to_string()));
        }
        assert_eq!(manager.list(), before);
    }

    #[test]
    fn test_monthly_total_only_counts_current_month() {
        let items = vec![
            make_entry("1", 0.3, NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()),
            make_entry("2", 0.2, NaiveDate::from_ymd_opt(2025, 5, 28).unwrap()),
            make_entry("3", 0.15, NaiveDate::from_ymd_opt(2025, 4, 28).unwrap()),
            // same month, previous year
            make_entry("4", 9.0, NaiveDate::from_ymd_opt(2024, 5, 4).unwrap()),
        ];
        let total = monthly_total(&items, today());
        assert!((total - 0.5).abs() < 1e-9);
        assert_eq!(format_weight(total), "0.50 kg");
    }

    #[test]
    fn test_monthly_total_of_empty_log_is_zero() {
        assert_eq!(monthly_total(&[], today()), 0.0);
        assert_eq!(format_weight(0.0), "0.00 kg");
    }
}
