//! UI Components
//!
//! Leptos components for the sidebar.

mod log_panel;
mod type_selector;
mod workout_form;
mod workout_list;

pub use log_panel::LogPanel;
pub use workout_form::WorkoutForm;
pub use workout_list::WorkoutList;
