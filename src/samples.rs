//! Bundled Sample Data
//!
//! Demo datasets substituted whenever a stored collection is missing or
//! unreadable, the static recipe catalog, and the baseline eco report.

use chrono::NaiveDate;

use crate::models::{
    Category, EcoReport, EnvironmentalImpact, PantryItem, Recipe, Unit, WasteItem, WasteReason,
};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid sample date")
}

pub fn sample_pantry_items() -> Vec<PantryItem> {
    vec![
        PantryItem {
            id: "1".to_string(),
            name: "Carrots".to_string(),
            quantity: 5.0,
            unit: Unit::Pcs,
            category: Category::Vegetable,
            added_date: ymd(2025, 4, 30),
            expiry_date: ymd(2025, 5, 7),
        },
        PantryItem {
            id: "2".to_string(),
            name: "Apples".to_string(),
            quantity: 6.0,
            unit: Unit::Pcs,
            category: Category::Fruit,
            added_date: ymd(2025, 5, 1),
            expiry_date: ymd(2025, 5, 15),
        },
        PantryItem {
            id: "3".to_string(),
            name: "Milk".to_string(),
            quantity: 1.0,
            unit: Unit::L,
            category: Category::Dairy,
            added_date: ymd(2025, 5, 2),
            expiry_date: ymd(2025, 5, 6),
        },
        PantryItem {
            id: "4".to_string(),
            name: "Chicken Breast".to_string(),
            quantity: 0.5,
            unit: Unit::Kg,
            category: Category::Protein,
            added_date: ymd(2025, 5, 1),
            expiry_date: ymd(2025, 5, 5),
        },
        PantryItem {
            id: "5".to_string(),
            name: "Pasta".to_string(),
            quantity: 1.0,
            unit: Unit::Kg,
            category: Category::Grain,
            added_date: ymd(2025, 4, 20),
            expiry_date: ymd(2025, 12, 31),
        },
    ]
}

pub fn sample_waste_items() -> Vec<WasteItem> {
    vec![
        WasteItem {
            id: "1".to_string(),
            name: "Tomatoes".to_string(),
            weight: 0.3,
            category: Category::Vegetable,
            reason: WasteReason::Spoiled,
            date: ymd(2025, 4, 28),
        },
        WasteItem {
            id: "2".to_string(),
            name: "Bread".to_string(),
            weight: 0.2,
            category: Category::Grain,
            reason: WasteReason::Expired,
            date: ymd(2025, 5, 1),
        },
        WasteItem {
            id: "3".to_string(),
            name: "Yogurt".to_string(),
            weight: 0.15,
            category: Category::Dairy,
            reason: WasteReason::Expired,
            date: ymd(2025, 5, 2),
        },
    ]
}

/// Fixed recipe catalog (read-only)
pub fn recipe_catalog() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "recipe1".to_string(),
            name: "Vegetable Stir Fry".to_string(),
            ingredients: vec![
                "carrot".to_string(),
                "broccoli".to_string(),
                "bell pepper".to_string(),
                "onion".to_string(),
            ],
            sustainability_score: 85,
            instructions: "1. Chop all vegetables.\n2. Heat oil in pan.\n3. Stir fry vegetables for 5-7 minutes.\n4. Add sauce and serve.".to_string(),
        },
        Recipe {
            id: "recipe2".to_string(),
            name: "Fruit Smoothie".to_string(),
            ingredients: vec![
                "banana".to_string(),
                "apple".to_string(),
                "yogurt".to_string(),
                "honey".to_string(),
            ],
            sustainability_score: 90,
            instructions: "1. Peel and chop fruits.\n2. Add all ingredients to blender.\n3. Blend until smooth.\n4. Serve immediately.".to_string(),
        },
        Recipe {
            id: "recipe3".to_string(),
            name: "Pasta Primavera".to_string(),
            ingredients: vec![
                "pasta".to_string(),
                "tomato".to_string(),
                "zucchini".to_string(),
                "spinach".to_string(),
            ],
            sustainability_score: 80,
            instructions: "1. Cook pasta according to package.\n2. Saute vegetables.\n3. Combine pasta and vegetables.\n4. Season and serve.".to_string(),
        },
    ]
}

/// Baseline report metrics. Only `total_waste` is recomputed from the live
/// waste log; everything else stays fixed.
pub fn baseline_report() -> EcoReport {
    EcoReport {
        current_month: "May 2025".to_string(),
        total_waste: 0.65,
        waste_reduction: 0.35,
        percent_change: 35.0,
        composition: vec![
            (Category::Vegetable, 0.3),
            (Category::Grain, 0.2),
            (Category::Dairy, 0.15),
        ],
        environmental_impact: EnvironmentalImpact {
            co2_saved: 0.88,
            water_saved: 350.0,
        },
        sustainability_tips: vec![
            "Store bread in the freezer to extend its shelf life.".to_string(),
            "Use vegetable scraps to make homemade stock.".to_string(),
            "Plan your meals based on what needs to be used first.".to_string(),
        ],
        eco_rank: "Eco Champion".to_string(),
    }
}
