//! Workout Models
//!
//! A logged workout and its two activity variants.

use chrono::{DateTime, Datelike, Local};
use serde::Serialize;

// English month names, indexed by `month0()`
const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Length of the timestamp-derived workout id
pub const ID_LEN: usize = 10;

/// Geographic position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Workout type tag, drives icons and CSS class names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    #[default]
    Running,
    Cycling,
}

impl WorkoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "cycling" => WorkoutType::Cycling,
            _ => WorkoutType::Running,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Cycling => "Cycling",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            WorkoutType::Running => "🏃‍♂️",
            WorkoutType::Cycling => "🚴‍♀️",
        }
    }

    /// CSS class of the map popup, e.g. `running-popup`
    pub fn popup_class(&self) -> String {
        format!("{}-popup", self.as_str())
    }
}

/// Variant-specific inputs and the metric derived from them
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Activity {
    Running {
        /// steps/min
        cadence: f64,
        /// min/km
        pace: f64,
    },
    Cycling {
        /// meters, may be zero or negative
        elevation_gain: f64,
        /// km/h
        speed: f64,
    },
}

impl Activity {
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            Activity::Running { .. } => WorkoutType::Running,
            Activity::Cycling { .. } => WorkoutType::Cycling,
        }
    }
}

/// A single logged workout.
///
/// Built only from already validated numbers; the constructors do no checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workout {
    id: String,
    created_at: DateTime<Local>,
    coords: Coords,
    /// km
    distance: f64,
    /// min
    duration: f64,
    description: String,
    #[serde(flatten)]
    activity: Activity,
}

impl Workout {
    pub fn running(
        coords: Coords,
        distance: f64,
        duration: f64,
        cadence: f64,
        created_at: DateTime<Local>,
    ) -> Self {
        let pace = duration / distance;
        Self::new(coords, distance, duration, Activity::Running { cadence, pace }, created_at)
    }

    pub fn cycling(
        coords: Coords,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
        created_at: DateTime<Local>,
    ) -> Self {
        let speed = distance / (duration / 60.0);
        Self::new(coords, distance, duration, Activity::Cycling { elevation_gain, speed }, created_at)
    }

    fn new(
        coords: Coords,
        distance: f64,
        duration: f64,
        activity: Activity,
        created_at: DateTime<Local>,
    ) -> Self {
        Self {
            id: short_id(&created_at),
            description: describe(activity.workout_type(), &created_at),
            created_at,
            coords,
            distance,
            duration,
            activity,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// e.g. "Running on April 14"
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    pub fn workout_type(&self) -> WorkoutType {
        self.activity.workout_type()
    }

    pub fn pace(&self) -> Option<f64> {
        match self.activity {
            Activity::Running { pace, .. } => Some(pace),
            Activity::Cycling { .. } => None,
        }
    }

    pub fn speed(&self) -> Option<f64> {
        match self.activity {
            Activity::Cycling { speed, .. } => Some(speed),
            Activity::Running { .. } => None,
        }
    }
}

/// Last `ID_LEN` digits of the creation time in milliseconds.
/// Workouts created within the same millisecond share an id.
fn short_id(created_at: &DateTime<Local>) -> String {
    let millis = created_at.timestamp_millis().to_string();
    let start = millis.len().saturating_sub(ID_LEN);
    millis[start..].to_string()
}

fn describe(workout_type: WorkoutType, created_at: &DateTime<Local>) -> String {
    format!(
        "{} on {} {}",
        workout_type.label(),
        MONTHS[created_at.month0() as usize],
        created_at.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_millis(millis: i64) -> DateTime<Local> {
        Local.timestamp_millis_opt(millis).unwrap()
    }

    fn here() -> Coords {
        Coords::new(48.2, 16.37)
    }

    #[test]
    fn test_running_pace() {
        let workout = Workout::running(here(), 5.0, 30.0, 180.0, at_millis(1_700_000_000_000));
        assert_eq!(workout.pace(), Some(6.0));
        assert_eq!(workout.speed(), None);
        assert_eq!(workout.workout_type(), WorkoutType::Running);
        assert_eq!(
            workout.activity(),
            &Activity::Running { cadence: 180.0, pace: 6.0 }
        );
    }

    #[test]
    fn test_pace_matches_division() {
        for (distance, duration) in [(3.7, 22.5), (0.4, 1.9), (42.195, 181.0)] {
            let workout = Workout::running(here(), distance, duration, 170.0, at_millis(0));
            assert_eq!(workout.pace(), Some(duration / distance));
        }
    }

    #[test]
    fn test_cycling_speed() {
        let workout = Workout::cycling(here(), 20.0, 60.0, 400.0, at_millis(1_700_000_000_000));
        assert_eq!(workout.speed(), Some(20.0));
        assert_eq!(workout.pace(), None);
        assert_eq!(workout.workout_type(), WorkoutType::Cycling);
    }

    #[test]
    fn test_cycling_speed_ignores_elevation() {
        for elevation in [0.0, -35.0, 1200.0] {
            let workout = Workout::cycling(here(), 27.0, 95.0, elevation, at_millis(0));
            assert_eq!(workout.speed(), Some(27.0 / (95.0 / 60.0)));
        }
    }

    #[test]
    fn test_id_is_last_ten_digits() {
        let workout = Workout::running(here(), 1.0, 1.0, 1.0, at_millis(1_712_345_678_901));
        assert_eq!(workout.id(), "2345678901");
        assert_eq!(workout.id().len(), ID_LEN);
    }

    #[test]
    fn test_ids_differ_for_distinct_millis() {
        let a = Workout::running(here(), 1.0, 1.0, 1.0, at_millis(1_712_345_678_901));
        let b = Workout::cycling(here(), 1.0, 1.0, 1.0, at_millis(1_712_345_678_902));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_short_timestamp_keeps_all_digits() {
        let workout = Workout::running(here(), 1.0, 1.0, 1.0, at_millis(12_345));
        assert_eq!(workout.id(), "12345");
    }

    #[test]
    fn test_description_uses_local_month_and_day() {
        let created_at = Local.with_ymd_and_hms(2024, 4, 14, 9, 30, 0).unwrap();
        let running = Workout::running(here(), 5.0, 30.0, 180.0, created_at);
        let cycling = Workout::cycling(here(), 5.0, 30.0, 0.0, created_at);
        assert_eq!(running.description(), "Running on April 14");
        assert_eq!(cycling.description(), "Cycling on April 14");
    }

    #[test]
    fn test_workout_type_tags() {
        assert_eq!(WorkoutType::from_str("cycling"), WorkoutType::Cycling);
        assert_eq!(WorkoutType::from_str("running"), WorkoutType::Running);
        assert_eq!(WorkoutType::Running.popup_class(), "running-popup");
        assert_eq!(WorkoutType::Cycling.popup_class(), "cycling-popup");
        assert_ne!(WorkoutType::Running.glyph(), WorkoutType::Cycling.glyph());
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let workout = Workout::cycling(here(), 20.0, 60.0, 400.0, at_millis(1_700_000_000_000));
        let json = serde_json::to_value(&workout).unwrap();
        assert_eq!(json["type"], "cycling");
        assert_eq!(json["elevation_gain"], 400.0);
        assert_eq!(json["speed"], 20.0);
        assert_eq!(json["coords"]["lat"], 48.2);
    }
}
