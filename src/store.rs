//! Sidebar Store
//!
//! The list of recorded workouts as the sidebar renders it.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::Workout;

/// Display state for the sidebar
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Copies of the controller's workouts, in logging order
    pub workouts: Vec<Workout>,
}

pub type AppStore = Store<AppState>;

/// Store provided by `App`; only the workout list reads it
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Append a freshly recorded workout to the list
pub fn store_add_workout(store: &AppStore, workout: Workout) {
    store.workouts().write().push(workout);
}
