//! Dashboard Component
//!
//! Expiring-soon warnings, top recipe suggestions and the eco rank card.

use leptos::prelude::*;

use crate::eco;
use crate::models::local_today;
use crate::pantry;
use crate::recipes::{self, DASHBOARD_SUGGESTIONS};
use crate::samples;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_app_store();

    let expiring = move || pantry::expiring_soon(&store.pantry_items().get(), local_today());
    let matches = move || {
        recipes::find_matching_recipes(&store.pantry_items().get(), &samples::recipe_catalog())
    };
    let report = move || eco::generate(&store.waste_items().get(), local_today());

    view! {
        <section class="dashboard">
            <div class="card expiring-items">
                <h3>"Expiring Soon"</h3>
                <Show
                    when=move || !expiring().is_empty()
                    fallback=|| view! { <p>"No items expiring soon. Great job!"</p> }
                >
                    <p>{move || format!("You have {} items expiring soon:", expiring().len())}</p>
                    <ul>
                        {move || expiring().into_iter().map(|item| view! {
                            <li>
                                <strong>{item.name.clone()}</strong>
                                {format!(" ({} {}) expires on {}", item.quantity, item.unit.value(), item.expiry_date)}
                            </li>
                        }).collect_view()}
                    </ul>
                    <p>"Consider using these items soon to reduce waste!"</p>
                </Show>
            </div>

            <div class="card recipe-suggestions">
                <h3>"Recipe Suggestions"</h3>
                <Show
                    when=move || !matches().is_empty()
                    fallback=|| view! { <p>"No recipe suggestions available."</p> }
                >
                    <p>{move || format!("We found {} recipes you can make with your pantry items!", matches().len())}</p>
                    <ul>
                        {move || matches().into_iter().take(DASHBOARD_SUGGESTIONS).map(|recipe| view! {
                            <li>
                                <strong>{recipe.name.clone()}</strong>
                                " - Sustainability Score: "
                                <span class="eco-badge">{format!("{}%", recipe.sustainability_score)}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                </Show>
            </div>

            <div class="card eco-rank">
                <h3>"Eco Rank"</h3>
                <p>
                    "Your current rank: "
                    <span class="eco-badge">{move || report().eco_rank}</span>
                </p>
                <p>{move || format!(
                    "You've reduced your food waste by {:.1}% compared to last month!",
                    report().percent_change
                )}</p>
                <div class="progress">
                    <div
                        class="progress-bar"
                        style=move || format!(
                            "width: {}%",
                            eco::progress_bar_percent(report().percent_change)
                        )
                    >
                        {move || format!(
                            "{}%",
                            eco::progress_bar_percent(report().percent_change).round()
                        )}
                    </div>
                </div>
            </div>
        </section>
    }
}
