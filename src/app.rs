//! EcoPantry App
//!
//! Root component: provides the context and store, reloads the stored
//! collections whenever something mutates, and lays out the tabbed views.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AlertStack, Dashboard, EcoReportView, PantryView, RecipeView, TabBar, WasteView};
use crate::context::{Alert, AppContext, Tab};
use crate::models::WasteDraft;
use crate::pantry::PantryManager;
use crate::storage::LocalStorage;
use crate::store::{store_set_pantry, store_set_waste, AppState, AppStore};
use crate::waste::WasteManager;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (active_tab, set_active_tab) = signal(Tab::Dashboard);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (waste_draft, set_waste_draft) = signal::<Option<WasteDraft>>(None);
    let (alerts, set_alerts) = signal(Vec::<Alert>::new());

    let store: AppStore = Store::new(AppState::default());

    // Provide context to all children
    provide_context(AppContext::new(
        (active_tab, set_active_tab),
        (reload_trigger, set_reload_trigger),
        (waste_draft, set_waste_draft),
        (alerts, set_alerts),
    ));
    provide_context(store);

    // Reload both collections on mount and after every mutation
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        store_set_pantry(&store, PantryManager::new(LocalStorage).list());
        store_set_waste(&store, WasteManager::new(LocalStorage).list());
    });

    let tab_class = move |tab: Tab| {
        move || {
            if active_tab.get() == tab {
                "tab-content active"
            } else {
                "tab-content"
            }
        }
    };

    view! {
        <div class="app-layout">
            <header>
                <h1>"EcoPantry"</h1>
                <TabBar />
            </header>

            <AlertStack />

            <main class="main-content">
                <div class=tab_class(Tab::Dashboard)>
                    <Dashboard />
                </div>
                <div class=tab_class(Tab::Pantry)>
                    <PantryView />
                </div>
                <div class=tab_class(Tab::Waste)>
                    <WasteView />
                </div>
                <div class=tab_class(Tab::Recipes)>
                    <RecipeView />
                </div>
                <div class=tab_class(Tab::Report)>
                    <EcoReportView />
                </div>
            </main>
        </div>
    }
}
