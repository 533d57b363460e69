//! Eco Report View Component
//!
//! Monthly summary, environmental impact equivalences and tips.

use leptos::prelude::*;

use crate::eco;
use crate::models::local_today;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn EcoReportView() -> impl IntoView {
    let store = use_app_store();

    let report = move || eco::generate(&store.waste_items().get(), local_today());

    view! {
        <section class="eco-report">
            <h2>"Eco Report"</h2>

            <div class="card monthly-summary">
                <h3>"Monthly Summary"</h3>
                <p>"Month: "<strong>{move || report().current_month}</strong></p>
                <p>"Total Food Waste: "<strong>{move || format!("{:.2} kg", report().total_waste)}</strong></p>
                <p>
                    "Waste Reduction: "
                    <strong>{move || format!("{:.2} kg", report().waste_reduction)}</strong>
                    {move || format!(" ({:.1}% less than last month)", report().percent_change)}
                </p>
                <p>
                    "Your Eco Rank: "
                    <span class="eco-badge">{move || report().eco_rank}</span>
                </p>
            </div>

            <div class="card env-impact">
                <h3>"Environmental Impact"</h3>
                <p>"By reducing food waste, you've saved:"</p>
                <ul>
                    <li>
                        <strong>{move || format!("{:.2} kg", report().environmental_impact.co2_saved)}</strong>
                        " of CO2 emissions"
                    </li>
                    <li>
                        <strong>{move || format!("{} liters", report().environmental_impact.water_saved)}</strong>
                        " of water"
                    </li>
                </ul>
                <p>"That's equivalent to:"</p>
                <ul>
                    <li>{move || format!(
                        "Driving {:.1} km less in a car",
                        eco::driving_equivalent_km(report().environmental_impact.co2_saved)
                    )}</li>
                    <li>{move || format!(
                        "{} days of household water usage",
                        eco::water_usage_days(report().environmental_impact.water_saved)
                    )}</li>
                </ul>
            </div>

            <div class="card personalized-tips">
                <h3>"Sustainability Tips"</h3>
                {move || report().sustainability_tips.into_iter().map(|tip| view! {
                    <div class="sustainability-tip">{tip}</div>
                }).collect_view()}
            </div>
        </section>
    }
}
