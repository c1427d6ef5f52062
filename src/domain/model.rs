use serde::{Deserialize, Serialize};

/// One raw tuple from the sensor feed: a workout type code plus positional
/// numeric fields, meaning depends on the code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorPackage {
    pub workout: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout: &str, data: Vec<f64>) -> Self {
        Self {
            workout: workout.to_string(),
            data,
        }
    }
}

/// Per-variant extra fields. The set is closed: there is no undifferentiated
/// base workout, so every constructed sample has a complete calorie formula.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutKind {
    Running,
    SportsWalking { height_cm: f64 },
    Swimming { pool_length_m: f64, pool_lap_count: u32 },
}

/// A validated workout sample: fields shared by all variants plus the
/// variant tag. Immutable once built by the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSample {
    pub action_count: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
    pub kind: WorkoutKind,
}

/// Computed statistics for one sample, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutReport {
    pub workout_name: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

/// Transform-stage output: one report and one rendered line per valid
/// package, a CSV rendition of all reports, and the codes that were skipped.
#[derive(Debug, Clone)]
pub struct SummaryBatch {
    pub reports: Vec<WorkoutReport>,
    pub lines: Vec<String>,
    pub csv_output: String,
    pub skipped: Vec<String>,
}
