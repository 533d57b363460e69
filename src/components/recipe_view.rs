//! Recipe View Component
//!
//! Full list of matching recipes with ingredients and instructions.

use leptos::prelude::*;

use crate::recipes;
use crate::samples;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RecipeView() -> impl IntoView {
    let store = use_app_store();

    let matches = move || {
        recipes::find_matching_recipes(&store.pantry_items().get(), &samples::recipe_catalog())
    };

    view! {
        <section class="recipes">
            <h2>"Recipes"</h2>
            <Show
                when=move || !matches().is_empty()
                fallback=|| view! {
                    <p>"No recipe suggestions available. Add more items to your pantry!"</p>
                }
            >
                {move || matches().into_iter().map(|recipe| view! {
                    <div class="card recipe-card">
                        <h4>{recipe.name.clone()}</h4>
                        <p>
                            "Sustainability Score: "
                            <span class="eco-badge">{format!("{}%", recipe.sustainability_score)}</span>
                        </p>
                        <p><strong>"Ingredients: "</strong>{recipe.ingredients.join(", ")}</p>
                        <p><strong>"Instructions:"</strong></p>
                        <pre>{recipe.instructions.clone()}</pre>
                    </div>
                }).collect_view()}
            </Show>
        </section>
    }
}
