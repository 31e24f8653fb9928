//! Workout List Component
//!
//! Sidebar list of recorded workouts, oldest first.

use leptos::prelude::*;

use crate::models::{Activity, Workout};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn Detail(icon: &'static str, value: String, unit: &'static str) -> impl IntoView {
    view! {
        <div class="workout__details">
            <span class="workout__icon">{icon}</span>
            <span class="workout__value">{value}</span>
            <span class="workout__unit">{unit}</span>
        </div>
    }
}

#[component]
fn WorkoutCard(workout: Workout) -> impl IntoView {
    let workout_type = workout.workout_type();
    let metrics = match *workout.activity() {
        Activity::Running { cadence, pace } => view! {
            <Detail icon="⚡️" value=format!("{:.1}", pace) unit="min/km" />
            <Detail icon="🦶🏼" value=cadence.to_string() unit="spm" />
        }.into_any(),
        Activity::Cycling { elevation_gain, speed } => view! {
            <Detail icon="⚡️" value=format!("{:.1}", speed) unit="km/h" />
            <Detail icon="⛰" value=elevation_gain.to_string() unit="m" />
        }.into_any(),
    };

    view! {
        <li class=format!("workout workout--{}", workout_type.as_str()) data-id=workout.id().to_string()>
            <h2 class="workout__title">{workout.description().to_string()}</h2>
            <Detail icon=workout_type.glyph() value=workout.distance().to_string() unit="km" />
            <Detail icon="⏱" value=workout.duration().to_string() unit="min" />
            {metrics}
        </li>
    }
}

#[component]
pub fn WorkoutList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="workouts">
            // Ids can repeat within one millisecond, so key by position
            <For
                each=move || store.workouts().get().into_iter().enumerate()
                key=|(index, _)| *index
                children=|(_, workout)| view! { <WorkoutCard workout=workout /> }
            />
        </ul>
    }
}
