//! Pantry View Component
//!
//! Add-item form and the pantry table with expiry highlighting.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::context::{AlertLevel, AppContext};
use crate::models::{local_today, Category, PantryItem, Unit};
use crate::pantry::{self, PantryManager};
use crate::storage::LocalStorage;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PantryView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (unit, set_unit) = signal(Unit::Pcs);
    let (category, set_category) = signal(Category::Vegetable);
    // Expiry defaults to today, like the date input it backs
    let (expiry, set_expiry) = signal(local_today().to_string());

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let today = local_today();
        let parsed_quantity: f64 = quantity.get().trim().parse().unwrap_or(f64::NAN);
        let expiry_date =
            NaiveDate::parse_from_str(&expiry.get(), "%Y-%m-%d").unwrap_or(today);

        let manager = PantryManager::new(LocalStorage);
        match manager.add(&name.get(), parsed_quantity, unit.get(), category.get(), expiry_date, today) {
            Ok(item) => {
                set_name.set(String::new());
                set_quantity.set(String::new());
                set_unit.set(Unit::Pcs);
                set_category.set(Category::Vegetable);
                set_expiry.set(today.to_string());
                ctx.reload();
                ctx.notify(format!("{} added to pantry", item.name), AlertLevel::Success);
            }
            Err(message) => ctx.notify(message, AlertLevel::Danger),
        }
    };

    view! {
        <section class="pantry">
            <h2>"Pantry"</h2>

            <form class="add-item-form" on:submit=on_add>
                <input
                    type="text"
                    placeholder="Item name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    step="any"
                    placeholder="Quantity"
                    prop:value=move || quantity.get()
                    on:input=move |ev| set_quantity.set(event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    if let Some(parsed) = Unit::from_value(&event_target_value(&ev)) {
                        set_unit.set(parsed);
                    }
                }>
                    {Unit::ALL.iter().map(|(option, label)| {
                        let option = *option;
                        view! {
                            <option value=option.value() selected=move || unit.get() == option>
                                {*label}
                            </option>
                        }
                    }).collect_view()}
                </select>
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
                <input
                    type="date"
                    prop:value=move || expiry.get()
                    on:input=move |ev| set_expiry.set(event_target_value(&ev))
                />
                <button type="submit" class="btn">"Add Item"</button>
            </form>

            <table class="pantry-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Quantity"</th>
                        <th>"Category"</th>
                        <th>"Expiry"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || store.pantry_items().get().is_empty()>
                        <tr><td colspan="5">"No items in pantry"</td></tr>
                    </Show>
                    <For
                        each=move || store.pantry_items().get()
                        key=|item| item.id.clone()
                        children=move |item: PantryItem| {
                            let today = local_today();
                            let days = pantry::days_until_expiry(&item, today);
                            let flagged = pantry::is_expiring(&item, today);
                            let expiry_cell = if flagged {
                                format!("{} ({} days)", item.expiry_date, days)
                            } else {
                                item.expiry_date.to_string()
                            };
                            let remove_id = item.id.clone();
                            let convert_id = item.id.clone();

                            let on_remove = move |_| {
                                PantryManager::new(LocalStorage).remove(&remove_id);
                                ctx.reload();
                                ctx.notify("Item removed from pantry", AlertLevel::Success);
                            };
                            // Removal is immediate; the draft still needs the
                            // user to submit the waste form before it is logged
                            let on_convert = move |_| {
                                if let Some(draft) =
                                    PantryManager::new(LocalStorage).convert_to_waste(&convert_id)
                                {
                                    ctx.prefill_waste(draft);
                                }
                                ctx.reload();
                                ctx.notify("Item removed from pantry", AlertLevel::Success);
                            };

                            view! {
                                <tr>
                                    <td>{item.name.clone()}</td>
                                    <td>{format!("{} {}", item.quantity, item.unit.value())}</td>
                                    <td>{item.category.value()}</td>
                                    <td class=if flagged { "expiring" } else { "" }>{expiry_cell}</td>
                                    <td>
                                        <button class="btn btn-danger btn-sm" on:click=on_remove>"Remove"</button>
                                        <button class="btn btn-sm" on:click=on_convert>"Log as Waste"</button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
