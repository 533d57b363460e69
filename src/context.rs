//! Application Context
//!
//! Shared state provided via Leptos Context API: active tab, reload trigger,
//! the pantry-to-waste draft handoff, and transient alerts.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::WasteDraft;

/// How long an alert stays on screen
pub const ALERT_DISMISS_MS: u32 = 5000;

/// The five views behind the tab selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Pantry,
    Waste,
    Recipes,
    Report,
}

impl Tab {
    /// `(tab, label)` pairs in display order
    pub const ALL: &'static [(Tab, &'static str)] = &[
        (Tab::Dashboard, "Dashboard"),
        (Tab::Pantry, "Pantry"),
        (Tab::Waste, "Waste Log"),
        (Tab::Recipes, "Recipes"),
        (Tab::Report, "Eco Report"),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Success,
    Danger,
}

impl AlertLevel {
    pub fn class(&self) -> &'static str {
        match self {
            AlertLevel::Success => "alert alert-success",
            AlertLevel::Danger => "alert alert-danger",
        }
    }
}

/// Transient user-facing message, auto-dismissed
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: u32,
    pub message: String,
    pub level: AlertLevel,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently shown tab - read
    pub active_tab: ReadSignal<Tab>,
    set_active_tab: WriteSignal<Tab>,
    /// Bumped after every mutation so views reload from storage - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
    /// Pending prefill for the waste log form - read
    pub waste_draft: ReadSignal<Option<WasteDraft>>,
    set_waste_draft: WriteSignal<Option<WasteDraft>>,
    /// Alerts currently on screen - read
    pub alerts: ReadSignal<Vec<Alert>>,
    set_alerts: WriteSignal<Vec<Alert>>,
    next_alert_id: StoredValue<u32>,
}

impl AppContext {
    pub fn new(
        active_tab: (ReadSignal<Tab>, WriteSignal<Tab>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        waste_draft: (ReadSignal<Option<WasteDraft>>, WriteSignal<Option<WasteDraft>>),
        alerts: (ReadSignal<Vec<Alert>>, WriteSignal<Vec<Alert>>),
    ) -> Self {
        Self {
            active_tab: active_tab.0,
            set_active_tab: active_tab.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            waste_draft: waste_draft.0,
            set_waste_draft: waste_draft.1,
            alerts: alerts.0,
            set_alerts: alerts.1,
            next_alert_id: StoredValue::new(0),
        }
    }

    pub fn switch_tab(&self, tab: Tab) {
        self.set_active_tab.set(tab);
    }

    /// Trigger a reload of the stored collections
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Hand a conversion draft to the waste log form and show that tab
    pub fn prefill_waste(&self, draft: WasteDraft) {
        self.set_waste_draft.set(Some(draft));
        self.switch_tab(Tab::Waste);
    }

    /// Called by the waste form once the draft has been applied
    pub fn clear_waste_draft(&self) {
        self.set_waste_draft.set(None);
    }

    /// Show a transient alert; it dismisses itself after [`ALERT_DISMISS_MS`]
    pub fn notify(&self, message: impl Into<String>, level: AlertLevel) {
        let id = self.next_alert_id.get_value();
        self.next_alert_id.set_value(id + 1);

        let alert = Alert { id, message: message.into(), level };
        self.set_alerts.update(|alerts| alerts.push(alert));

        let set_alerts = self.set_alerts;
        spawn_local(async move {
            TimeoutFuture::new(ALERT_DISMISS_MS).await;
            set_alerts.update(|alerts| alerts.retain(|alert| alert.id != id));
        });
    }
}
