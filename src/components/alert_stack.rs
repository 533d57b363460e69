//! Alert Stack Component
//!
//! Renders the transient alerts from the context. Dismissal is handled by
//! the context itself, so this is display only.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn AlertStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="alerts">
            <For
                each=move || ctx.alerts.get()
                key=|alert| alert.id
                children=move |alert| {
                    view! {
                        <div class=alert.level.class()>{alert.message.clone()}</div>
                    }
                }
            />
        </div>
    }
}
