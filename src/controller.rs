//! Workout Controller
//!
//! Owns the logged workouts and turns map clicks and form submissions
//! into new entries. Collaborators are injected so the controller runs
//! without a browser.

use chrono::{DateTime, Local};

use crate::error::{AppError, AppResult};
use crate::form::{parse_number, FormValues, FormView};
use crate::map_view::{popup_options, MapView};
use crate::models::{Coords, Workout, WorkoutType};
use crate::notify::Notifier;

pub struct WorkoutController<M, F, N> {
    map: M,
    form: F,
    notifier: N,
    zoom: u8,
    /// Location of the last map click, used for the next workout
    pending: Option<Coords>,
    workouts: Vec<Workout>,
    clock: fn() -> DateTime<Local>,
}

impl<M: MapView, F: FormView, N: Notifier> WorkoutController<M, F, N> {
    pub fn new(map: M, form: F, notifier: N, zoom: u8) -> Self {
        Self {
            map,
            form,
            notifier,
            zoom,
            pending: None,
            workouts: Vec::new(),
            clock: Local::now,
        }
    }

    /// Replace the time source used for new workouts
    pub fn with_clock(mut self, clock: fn() -> DateTime<Local>) -> Self {
        self.clock = clock;
        self
    }

    /// Workouts in logging order
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Finish startup with the result of the position request.
    ///
    /// On failure the user is told and the map stays uninitialized.
    pub fn load_map(
        &mut self,
        position: AppResult<Coords>,
        on_click: impl FnMut(Coords) + 'static,
    ) -> AppResult<()> {
        let center = match position {
            Ok(center) => center,
            Err(e) => {
                tracing::warn!("[APP] {}", e);
                self.report(&e);
                return Err(e);
            }
        };

        self.map.initialize(center, self.zoom)?;
        self.map.on_click(Box::new(on_click))
    }

    /// Map click: open the form pinned to `coords`
    pub fn show_form(&mut self, coords: Coords) {
        tracing::debug!("[FORM] clicked {:.5},{:.5}", coords.lat, coords.lng);
        self.pending = Some(coords);
        self.form.show();
        self.form.focus_distance();
    }

    /// Type selector change: swap the cadence and elevation rows
    pub fn toggle_workout_type(&self) {
        self.form.toggle_type_rows();
    }

    /// Form submit: validate, record, render and clear the inputs.
    ///
    /// Rejected input leaves the form and the workout list untouched.
    /// The form stays visible after a successful submit.
    pub fn new_workout(&mut self) -> AppResult<&Workout> {
        let Some(coords) = self.pending else {
            tracing::error!("[FORM] submit without a map click");
            return Err(AppError::MapNotReady);
        };

        let values = self.form.values();
        let workout = match build_workout(&values, coords, (self.clock)()) {
            Ok(workout) => workout,
            Err(e) => {
                tracing::info!("[FORM] rejected: {}", e);
                self.report(&e);
                return Err(e);
            }
        };

        let workout_type = workout.workout_type();
        if let Ok(json) = serde_json::to_string(&workout) {
            tracing::debug!("[FORM] recorded {}", json);
        }
        self.workouts.push(workout);

        if let Err(e) = self.map.render_marker(coords, workout_type.glyph(), &popup_options(workout_type)) {
            tracing::error!("[MAP] marker not rendered: {}", e);
        }
        self.form.clear_inputs();

        let index = self.workouts.len() - 1;
        Ok(&self.workouts[index])
    }

    fn report(&self, error: &AppError) {
        if let Some(message) = error.user_message() {
            self.notifier.alert(message);
        }
    }
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|v| *v > 0.0)
}

/// Validate the form values and build the matching workout.
///
/// Elevation gain only has to be finite; cadence, distance and duration
/// must also be positive.
pub fn build_workout(values: &FormValues, coords: Coords, created_at: DateTime<Local>) -> AppResult<Workout> {
    let distance = parse_number(&values.distance);
    let duration = parse_number(&values.duration);

    match values.workout_type {
        WorkoutType::Running => {
            let cadence = parse_number(&values.cadence);
            let inputs = [distance, duration, cadence];
            if !all_finite(&inputs) || !all_positive(&inputs) {
                return Err(AppError::InvalidInput(format!(
                    "running distance={} duration={} cadence={}",
                    distance, duration, cadence
                )));
            }
            Ok(Workout::running(coords, distance, duration, cadence, created_at))
        }
        WorkoutType::Cycling => {
            let elevation = parse_number(&values.elevation);
            if !all_finite(&[distance, duration, elevation]) || !all_positive(&[distance, duration]) {
                return Err(AppError::InvalidInput(format!(
                    "cycling distance={} duration={} elevation={}",
                    distance, duration, elevation
                )));
            }
            Ok(Workout::cycling(coords, distance, duration, elevation, created_at))
        }
    }
}
