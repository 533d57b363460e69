//! Waste View Component
//!
//! Log-waste form (prefilled when a pantry item was just converted), the
//! waste table and the monthly summary line.

use leptos::prelude::*;

use crate::context::{AlertLevel, AppContext};
use crate::models::{local_today, Category, WasteItem, WasteReason};
use crate::storage::LocalStorage;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::waste::{self, WasteManager};

#[component]
pub fn WasteView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (weight, set_weight) = signal(String::new());
    let (category, set_category) = signal(Category::Vegetable);
    let (reason, set_reason) = signal(WasteReason::Spoiled);

    // Apply a conversion draft handed over from the pantry view
    Effect::new(move |_| {
        if let Some(draft) = ctx.waste_draft.get() {
            set_name.set(draft.name);
            set_weight.set(draft.weight.to_string());
            set_category.set(draft.category);
            ctx.clear_waste_draft();
        }
    });

    let on_log = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let parsed_weight: f64 = weight.get().trim().parse().unwrap_or(f64::NAN);

        let manager = WasteManager::new(LocalStorage);
        match manager.log(&name.get(), parsed_weight, category.get(), reason.get(), local_today()) {
            Ok(item) => {
                set_name.set(String::new());
                set_weight.set(String::new());
                set_category.set(Category::Vegetable);
                set_reason.set(WasteReason::Spoiled);
                // Also refreshes the eco report, which derives from the log
                ctx.reload();
                ctx.notify(format!("{} logged as waste", item.name), AlertLevel::Success);
            }
            Err(message) => ctx.notify(message, AlertLevel::Danger),
        }
    };

    let monthly_line = move || {
        let total = waste::monthly_total(&store.waste_items().get(), local_today());
        waste::format_weight(total)
    };

    view! {
        <section class="waste">
            <h2>"Waste Log"</h2>

            <form class="log-waste-form" on:submit=on_log>
                <input
                    type="text"
                    placeholder="Item name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    step="any"
                    placeholder="Weight (kg)"
                    prop:value=move || weight.get()
                    on:input=move |ev| set_weight.set(event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    if let Some(parsed) = Category::from_value(&event_target_value(&ev)) {
                        set_category.set(parsed);
                    }
                }>
                    {Category::ALL.iter().map(|(option, label)| {
                        let option = *option;
                        view! {
                            <option value=option.value() selected=move || category.get() == option>
                                {*label}
                            </option>
                        }
                    }).collect_view()}
                </select>
                <select on:change=move |ev| {
                    if let Some(parsed) = WasteReason::from_value(&event_target_value(&ev)) {
                        set_reason.set(parsed);
                    }
                }>
                    {WasteReason::ALL.iter().map(|(option, label)| {
                        let option = *option;
                        view! {
                            <option value=option.value() selected=move || reason.get() == option>
                                {*label}
                            </option>
                        }
                    }).collect_view()}
                </select>
                <button type="submit" class="btn">"Log Waste"</button>
            </form>

            <div class="waste-summary">
                <p>"This month's total food waste: "<strong>{monthly_line}</strong></p>
            </div>

            <table class="waste-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Name"</th>
                        <th>"Weight (kg)"</th>
                        <th>"Type"</th>
                        <th>"Reason"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || store.waste_items().get().is_empty()>
                        <tr><td colspan="5">"No waste logged yet"</td></tr>
                    </Show>
                    <For
                        each=move || store.waste_items().get()
                        key=|item| item.id.clone()
                        children=move |item: WasteItem| {
                            view! {
                                <tr>
                                    <td>{item.date.to_string()}</td>
                                    <td>{item.name.clone()}</td>
                                    <td>{item.weight}</td>
                                    <td>{item.category.value()}</td>
                                    <td>{item.reason.value()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
