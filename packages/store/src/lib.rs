//! # Client state for the diet tracker
//!
//! Plain Rust state objects behind every card of the page. They know nothing about
//! rendering; the `ui` crate keeps each one in a signal and calls into it.
//!
//! | Type | Owns |
//! |------|------|
//! | [`Dashboard`] | Shared goal and summary (single writer), delete confirmation |
//! | [`GoalForm`] | Goal inputs, validation, submit status |
//! | [`MealForm`] | Date/type, food search, manual entry, pending items, submit status |
//! | [`SnackPanel`] | On-demand snack recommendations |
//! | [`Feedback`] | Busy flag + last message/error of one action |
//!
//! Nothing here performs I/O. Every request is split into a `start…` half that
//! validates and returns what to send, and a `finish…` half that records the
//! backend's answer; the caller makes the request in between.

pub mod dashboard;
pub mod display;
pub mod feedback;
pub mod goal_form;
pub mod meal_form;
pub mod messages;
pub mod snacks;

pub use dashboard::{Dashboard, DeleteOutcome, PendingDelete};
pub use feedback::Feedback;
pub use goal_form::GoalForm;
pub use meal_form::{ItemSource, ManualEntry, MealForm, PendingItem};
pub use snacks::SnackPanel;
