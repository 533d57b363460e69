//! Recipe Matcher
//!
//! Filters the fixed catalog against what the pantry currently holds. The
//! ingredient match is a loose substring check in both directions, so
//! "Carrots" matches "carrot" and "pepper" matches "bell pepper". A recipe
//! qualifies when at least half of its ingredients are on hand.

use crate::models::{PantryItem, Recipe};

/// How many dashboard suggestions to show
pub const DASHBOARD_SUGGESTIONS: usize = 3;

/// Qualifying recipes in catalog order (not sorted by score)
pub fn find_matching_recipes(pantry: &[PantryItem], catalog: &[Recipe]) -> Vec<Recipe> {
    let pantry_names: Vec<String> = pantry.iter().map(|item| item.name.to_lowercase()).collect();

    catalog
        .iter()
        .filter(|recipe| {
            let matched = recipe
                .ingredients
                .iter()
                .filter(|ingredient| {
                    pantry_names
                        .iter()
                        .any(|name| name.contains(ingredient.as_str()) || ingredient.contains(name.as_str()))
                })
                .count();
            matched as f64 >= recipe.ingredients.len() as f64 / 2.0
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Unit};
    use crate::samples;
    use chrono::NaiveDate;

    fn pantry_with(names: &[&str]) -> Vec<PantryItem> {
        let date = NaiveDate::from_ymd_opt(2025, 5, 4).unwrap();
        names
            .iter()
            .enumerate()
            .map(|(i, name)| PantryItem {
                id: i.to_string(),
                name: name.to_string(),
                quantity: 1.0,
                unit: Unit::Pcs,
                category: Category::Other,
                added_date: date,
                expiry_date: date,
            })
            .collect()
    }

    #[test]
    fn test_half_of_ingredients_qualifies() {
        // Carrots/Onions cover 2 of the stir fry's 4 ingredients
        let matches = find_matching_recipes(&pantry_with(&["Carrots", "Onions"]), &samples::recipe_catalog());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Vegetable Stir Fry");
        assert_eq!(matches[0].sustainability_score, 85);
    }

    #[test]
    fn test_one_of_four_does_not_qualify() {
        let matches = find_matching_recipes(&pantry_with(&["Carrots"]), &samples::recipe_catalog());
        assert!(matches.is_empty());
    }

    #[test]
    fn test_fractional_threshold_compares_directly() {
        // 2 of 3 passes because 2 >= 1.5
        let catalog = vec![Recipe {
            id: "r".to_string(),
            name: "Trio".to_string(),
            ingredients: vec!["carrot".to_string(), "onion".to_string(), "ginger".to_string()],
            sustainability_score: 50,
            instructions: String::new(),
        }];
        let matches = find_matching_recipes(&pantry_with(&["Carrot", "Onion"]), &catalog);
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_substring_match_works_in_both_directions() {
        // pantry name contained in ingredient, and ingredient contained in pantry name
        let matches = find_matching_recipes(
            &pantry_with(&["pepper", "baby broccoli"]),
            &samples::recipe_catalog(),
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Vegetable Stir Fry");
    }

    #[test]
    fn test_no_overlap_returns_empty_set() {
        let matches = find_matching_recipes(&pantry_with(&["Anchovies", "Capers"]), &samples::recipe_catalog());
        assert!(matches.is_empty());
    }

    #[test]
    fn test_results_keep_catalog_order() {
        // Everything on hand: all three recipes, catalog order, not by score
        let pantry = pantry_with(&[
            "carrot", "broccoli", "bell pepper", "onion",
            "banana", "apple", "yogurt", "honey",
            "pasta", "tomato", "zucchini", "spinach",
        ]);
        let matches = find_matching_recipes(&pantry, &samples::recipe_catalog());
        let names: Vec<&str> = matches.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Vegetable Stir Fry", "Fruit Smoothie", "Pasta Primavera"]);
    }

    #[test]
    fn test_empty_pantry_matches_nothing() {
        let matches = find_matching_recipes(&[], &samples::recipe_catalog());
        assert!(matches.is_empty());
    }
}
