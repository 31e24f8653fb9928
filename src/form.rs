//! Workout Form State
//!
//! The form the controller drives, and its signal-backed implementation.

use leptos::html;
use leptos::prelude::*;

use crate::models::WorkoutType;

/// Raw values of the form at submit time
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormValues {
    pub workout_type: WorkoutType,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

/// Form operations used by the controller
pub trait FormView {
    /// Make the form visible
    fn show(&self);
    /// Give focus to the distance input
    fn focus_distance(&self);
    /// Flip visibility of the cadence and elevation rows
    fn toggle_type_rows(&self);
    fn values(&self) -> FormValues;
    /// Empty all four numeric inputs
    fn clear_inputs(&self);
}

/// Text to number the way a browser's unary `+` does it: surrounding
/// whitespace is ignored, an empty string is 0, `Infinity` and unsigned
/// `0x`/`0o`/`0b` integer literals are accepted and anything else
/// unparsable is NaN.
pub fn parse_number(raw: &str) -> f64 {
    let text = raw.trim();
    if text.is_empty() {
        return 0.0;
    }
    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(value) = parse_radix_literal(text) {
        return value;
    }
    // Rust also accepts "inf" and "NaN" spellings; those are not numbers here
    if text.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) {
        return f64::NAN;
    }
    text.parse().unwrap_or(f64::NAN)
}

/// `0x1F`, `0o17`, `0b101`; a sign in front is not allowed
fn parse_radix_literal(text: &str) -> Option<f64> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }
    // Digits are validated; only overflow past u128 remains
    let value = u128::from_str_radix(digits, radix).map_or(f64::INFINITY, |v| v as f64);
    Some(value)
}

/// Reactive form state shared between the form component and the controller
#[derive(Clone, Copy)]
pub struct FormSignals {
    pub visible: RwSignal<bool>,
    pub workout_type: RwSignal<WorkoutType>,
    pub distance: RwSignal<String>,
    pub duration: RwSignal<String>,
    pub cadence: RwSignal<String>,
    pub elevation: RwSignal<String>,
    pub cadence_hidden: RwSignal<bool>,
    pub elevation_hidden: RwSignal<bool>,
    pub distance_input: NodeRef<html::Input>,
}

impl FormSignals {
    /// Hidden form, running selected, cadence row shown
    pub fn new() -> Self {
        Self {
            visible: RwSignal::new(false),
            workout_type: RwSignal::new(WorkoutType::Running),
            distance: RwSignal::new(String::new()),
            duration: RwSignal::new(String::new()),
            cadence: RwSignal::new(String::new()),
            elevation: RwSignal::new(String::new()),
            cadence_hidden: RwSignal::new(false),
            elevation_hidden: RwSignal::new(true),
            distance_input: NodeRef::new(),
        }
    }
}

impl FormView for FormSignals {
    fn show(&self) {
        self.visible.set(true);
    }

    fn focus_distance(&self) {
        if let Some(input) = self.distance_input.get_untracked() {
            if let Err(e) = input.focus() {
                tracing::warn!("[FORM] focus failed: {:?}", e);
            }
        }
    }

    fn toggle_type_rows(&self) {
        self.cadence_hidden.update(|hidden| *hidden = !*hidden);
        self.elevation_hidden.update(|hidden| *hidden = !*hidden);
    }

    fn values(&self) -> FormValues {
        FormValues {
            workout_type: self.workout_type.get_untracked(),
            distance: self.distance.get_untracked(),
            duration: self.duration.get_untracked(),
            cadence: self.cadence.get_untracked(),
            elevation: self.elevation.get_untracked(),
        }
    }

    fn clear_inputs(&self) {
        for field in [self.distance, self.duration, self.cadence, self.elevation] {
            field.set(String::new());
        }
    }
}
