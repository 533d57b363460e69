//! Domain Models
//!
//! Entity records persisted to local storage, plus the closed enums behind
//! the form selects. Field names keep the camelCase spelling of the stored
//! JSON so previously saved data stays readable.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tracked quantity of a food good with an expiry date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryItem {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub category: Category,
    pub added_date: NaiveDate,
    pub expiry_date: NaiveDate,
}

/// A record of food discarded, with weight (kg) and reason
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteItem {
    pub id: String,
    pub name: String,
    pub weight: f64,
    #[serde(rename = "type")]
    pub category: Category,
    pub reason: WasteReason,
    pub date: NaiveDate,
}

/// Prefill for the waste log form, produced when a pantry item is
/// converted to waste. Becomes a [`WasteItem`] only once the user submits.
#[derive(Debug, Clone, PartialEq)]
pub struct WasteDraft {
    pub name: String,
    pub category: Category,
    pub weight: f64,
}

/// Static catalog entry (read-only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<String>,
    pub sustainability_score: u32,
    pub instructions: String,
}

/// Monthly sustainability report. Derived at render time, never persisted;
/// only `total_waste` is live, the rest are baseline metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoReport {
    pub current_month: String,
    pub total_waste: f64,
    pub waste_reduction: f64,
    pub percent_change: f64,
    pub composition: Vec<(Category, f64)>,
    pub environmental_impact: EnvironmentalImpact,
    pub sustainability_tips: Vec<String>,
    pub eco_rank: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalImpact {
    pub co2_saved: f64,
    pub water_saved: f64,
}

/// Measurement unit of a pantry quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Pcs,
    Kg,
    G,
    L,
}

impl Unit {
    /// `(value, label)` pairs for form selects
    pub const ALL: &'static [(Unit, &'static str)] = &[
        (Unit::Pcs, "pcs"),
        (Unit::Kg, "kg"),
        (Unit::G, "g"),
        (Unit::L, "l"),
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Unit::Pcs => "pcs",
            Unit::Kg => "kg",
            Unit::G => "g",
            Unit::L => "l",
        }
    }

    pub fn from_value(value: &str) -> Option<Unit> {
        Unit::ALL.iter().find(|(u, _)| u.value() == value).map(|(u, _)| *u)
    }
}

/// Food category, shared between pantry items and waste entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vegetable,
    Fruit,
    Dairy,
    Protein,
    Grain,
    Other,
}

impl Category {
    pub const ALL: &'static [(Category, &'static str)] = &[
        (Category::Vegetable, "Vegetable"),
        (Category::Fruit, "Fruit"),
        (Category::Dairy, "Dairy"),
        (Category::Protein, "Protein"),
        (Category::Grain, "Grain"),
        (Category::Other, "Other"),
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Category::Vegetable => "vegetable",
            Category::Fruit => "fruit",
            Category::Dairy => "dairy",
            Category::Protein => "protein",
            Category::Grain => "grain",
            Category::Other => "other",
        }
    }

    pub fn from_value(value: &str) -> Option<Category> {
        Category::ALL.iter().find(|(c, _)| c.value() == value).map(|(c, _)| *c)
    }
}

/// Why a waste entry was discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WasteReason {
    Spoiled,
    Expired,
    Overbought,
    Other,
}

impl WasteReason {
    pub const ALL: &'static [(WasteReason, &'static str)] = &[
        (WasteReason::Spoiled, "Spoiled"),
        (WasteReason::Expired, "Expired"),
        (WasteReason::Overbought, "Overbought"),
        (WasteReason::Other, "Other"),
    ];

    pub fn value(&self) -> &'static str {
        match self {
            WasteReason::Spoiled => "spoiled",
            WasteReason::Expired => "expired",
            WasteReason::Overbought => "overbought",
            WasteReason::Other => "other",
        }
    }

    pub fn from_value(value: &str) -> Option<WasteReason> {
        WasteReason::ALL.iter().find(|(r, _)| r.value() == value).map(|(r, _)| *r)
    }
}

/// Local calendar date; the "today" every operation runs against
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// Last id handed out, so two creations in the same millisecond still differ.
// Uniqueness only needs to hold within one session.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

#[cfg(target_arch = "wasm32")]
fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Fresh time-based entry id (millisecond clock, bumped on collision)
pub fn next_entry_id() -> String {
    let now = now_millis();
    let mut prev = LAST_ID.load(Ordering::Relaxed);
    loop {
        let id = now.max(prev + 1);
        match LAST_ID.compare_exchange(prev, id, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return id.to_string(),
            Err(current) => prev = current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_unique_within_session() {
        let ids: Vec<String> = (0..100).map(|_| next_entry_id()).collect();
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id), "duplicate id {}", id);
        }
    }

    #[test]
    fn test_enum_round_trips_through_stored_form() {
        for (unit, _) in Unit::ALL {
            assert_eq!(Unit::from_value(unit.value()), Some(*unit));
        }
        for (cat, _) in Category::ALL {
            assert_eq!(Category::from_value(cat.value()), Some(*cat));
        }
        for (reason, _) in WasteReason::ALL {
            assert_eq!(WasteReason::from_value(reason.value()), Some(*reason));
        }
        assert_eq!(Unit::from_value("bogus"), None);
    }

    #[test]
    fn test_pantry_item_uses_stored_field_names() {
        let item = PantryItem {
            id: "1".to_string(),
            name: "Carrots".to_string(),
            quantity: 5.0,
            unit: Unit::Pcs,
            category: Category::Vegetable,
            added_date: NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2025, 5, 7).unwrap(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["addedDate"], "2025-04-30");
        assert_eq!(json["expiryDate"], "2025-05-07");
        assert_eq!(json["unit"], "pcs");
        assert_eq!(json["category"], "vegetable");
    }

    #[test]
    fn test_waste_item_category_stored_as_type() {
        let item = WasteItem {
            id: "1".to_string(),
            name: "Bread".to_string(),
            weight: 0.2,
            category: Category::Grain,
            reason: WasteReason::Expired,
            date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "grain");
        assert_eq!(json["reason"], "expired");
    }
}
