//! Type Selector Component
//!
//! Running / cycling select for the workout form.

use leptos::prelude::*;

use crate::models::WorkoutType;

/// Workout type options
pub const WORKOUT_TYPES: &[WorkoutType] = &[WorkoutType::Running, WorkoutType::Cycling];

#[component]
pub fn TypeSelector(
    current_type: RwSignal<WorkoutType>,
    on_change: impl Fn(WorkoutType) + 'static,
) -> impl IntoView {
    view! {
        <select
            class="form__input form__input--type"
            on:change=move |ev| on_change(WorkoutType::from_str(&event_target_value(&ev)))
        >
            {WORKOUT_TYPES.iter().map(|workout_type| {
                let workout_type = *workout_type;
                view! {
                    <option
                        value=workout_type.as_str()
                        prop:selected=move || current_type.get() == workout_type
                    >
                        {workout_type.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
