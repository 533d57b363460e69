//! Tab Bar Component
//!
//! Nav links switching between the five views.

use leptos::prelude::*;

use crate::context::{AppContext, Tab};

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="tab-bar">
            {Tab::ALL.iter().map(|(tab, label)| {
                let tab = *tab;
                let is_active = move || ctx.active_tab.get() == tab;
                view! {
                    <a
                        href="#"
                        class=move || if is_active() { "nav-link active" } else { "nav-link" }
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.switch_tab(tab);
                        }
                    >
                        {*label}
                    </a>
                }
            }).collect_view()}
        </nav>
    }
}
