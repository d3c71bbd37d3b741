//! Dioxus components for the diet tracker page.
//!
//! Each card keeps its own form state in a signal. The shared goal and summary
//! live in the [`store::Dashboard`] signal provided by [`DashboardProvider`].

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod activity_log;
pub use activity_log::{log_activity, log_response, use_activity_log, ActivityLog, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};

pub mod actions;

mod backend;
pub use backend::Backend;

mod provider;
pub use provider::{use_api, use_confirm_delete, use_dashboard, DashboardProvider};

mod goal_form;
pub use goal_form::GoalFormCard;

mod meal_form;
pub use meal_form::MealFormCard;

mod summary;
pub use summary::SummaryCard;

mod snacks;
pub use snacks::SnackCard;

pub mod views;

#[cfg(test)]
mod testing;
