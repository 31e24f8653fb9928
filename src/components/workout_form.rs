//! Workout Form Component
//!
//! Inputs for a new workout. Shown after a map click.

use leptos::prelude::*;

use crate::components::type_selector::TypeSelector;
use crate::form::FormSignals;

fn row_class(hidden: bool) -> &'static str {
    if hidden { "form__row form__row--hidden" } else { "form__row" }
}

/// One labelled numeric input bound to a signal
#[component]
fn NumberRow(
    label: &'static str,
    placeholder: &'static str,
    input_class: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] hidden: Option<RwSignal<bool>>,
    #[prop(optional)] input_ref: Option<NodeRef<leptos::html::Input>>,
) -> impl IntoView {
    let input_ref = input_ref.unwrap_or_else(NodeRef::new);
    view! {
        <div class=move || row_class(hidden.map(|h| h.get()).unwrap_or(false))>
            <label class="form__label">{label}</label>
            <input
                class=format!("form__input {}", input_class)
                placeholder=placeholder
                node_ref=input_ref
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn WorkoutForm(
    form: FormSignals,
    on_submit: impl Fn() + 'static,
    on_type_change: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <form
            class=move || if form.visible.get() { "form" } else { "form hidden" }
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                on_submit();
            }
        >
            <div class="form__row">
                <label class="form__label">"Type"</label>
                <TypeSelector
                    current_type=form.workout_type
                    on_change=move |workout_type| {
                        form.workout_type.set(workout_type);
                        on_type_change();
                    }
                />
            </div>
            <NumberRow
                label="Distance"
                placeholder="km"
                input_class="form__input--distance"
                value=form.distance
                input_ref=form.distance_input
            />
            <NumberRow
                label="Duration"
                placeholder="min"
                input_class="form__input--duration"
                value=form.duration
            />
            <NumberRow
                label="Cadence"
                placeholder="step/min"
                input_class="form__input--cadence"
                value=form.cadence
                hidden=form.cadence_hidden
            />
            <NumberRow
                label="Elev Gain"
                placeholder="meters"
                input_class="form__input--elevation"
                value=form.elevation
                hidden=form.elevation_hidden
            />
            <button class="form__btn">"OK"</button>
        </form>
    }
}
