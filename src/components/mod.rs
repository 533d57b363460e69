//! UI Components
//!
//! One Leptos component per view, plus the tab bar and alert stack.

mod alert_stack;
mod dashboard;
mod eco_report_view;
mod pantry_view;
mod recipe_view;
mod tab_bar;
mod waste_view;

pub use alert_stack::AlertStack;
pub use dashboard::Dashboard;
pub use eco_report_view::EcoReportView;
pub use pantry_view::PantryView;
pub use recipe_view::RecipeView;
pub use tab_bar::TabBar;
pub use waste_view::WasteView;
