//! Eco Report Generator
//!
//! Merges the live monthly waste total into the baseline report. Every other
//! metric (reduction, percent change, composition, impact, tips, rank) stays
//! at its baseline value rather than being recomputed from the waste history.
//! That limitation is part of the observable behavior and is kept as-is.

use chrono::NaiveDate;

use crate::models::{EcoReport, WasteItem};
use crate::samples;
use crate::waste;

/// Baseline report with `total_waste` replaced by this month's live total
pub fn generate(waste_items: &[WasteItem], today: NaiveDate) -> EcoReport {
    let mut report = samples::baseline_report();
    report.total_waste = waste::monthly_total(waste_items, today);
    report
}

/// "Driving N km less" equivalence shown next to the CO2 figure
pub fn driving_equivalent_km(co2_saved: f64) -> f64 {
    co2_saved * 4.0
}

/// Saved water expressed as days of household usage (250 l/day)
pub fn water_usage_days(water_saved: f64) -> i64 {
    (water_saved / 250.0).round() as i64
}

/// Width of the dashboard progress bar
pub fn progress_bar_percent(percent_change: f64) -> f64 {
    percent_change.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, WasteReason};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 4).unwrap()
    }

    fn make_entry(weight: f64, date: NaiveDate) -> WasteItem {
        WasteItem {
            id: "x".to_string(),
            name: "Entry".to_string(),
            weight,
            category: Category::Dairy,
            reason: WasteReason::Expired,
            date,
        }
    }

    #[test]
    fn test_generate_overwrites_only_total_waste() {
        let items = vec![
            make_entry(0.4, today()),
            make_entry(0.25, NaiveDate::from_ymd_opt(2025, 4, 20).unwrap()),
        ];
        let report = generate(&items, today());
        assert!((report.total_waste - 0.4).abs() < 1e-9);

        let baseline = samples::baseline_report();
        assert_eq!(report.current_month, baseline.current_month);
        assert_eq!(report.waste_reduction, baseline.waste_reduction);
        assert_eq!(report.percent_change, baseline.percent_change);
        assert_eq!(report.composition, baseline.composition);
        assert_eq!(report.environmental_impact, baseline.environmental_impact);
        assert_eq!(report.sustainability_tips, baseline.sustainability_tips);
        assert_eq!(report.eco_rank, baseline.eco_rank);
    }

    #[test]
    fn test_generate_with_empty_log_reports_zero() {
        let report = generate(&[], today());
        assert_eq!(report.total_waste, 0.0);
    }

    #[test]
    fn test_display_equivalences() {
        assert!((driving_equivalent_km(0.88) - 3.52).abs() < 1e-9);
        assert_eq!(water_usage_days(350.0), 1);
        assert_eq!(water_usage_days(700.0), 3);
        assert_eq!(water_usage_days(0.0), 0);
    }

    #[test]
    fn test_progress_bar_clamps_to_percent_range() {
        assert_eq!(progress_bar_percent(35.0), 35.0);
        assert_eq!(progress_bar_percent(-10.0), 0.0);
        assert_eq!(progress_bar_percent(140.0), 100.0);
    }
}
