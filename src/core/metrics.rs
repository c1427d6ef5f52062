use crate::domain::model::{WorkoutKind, WorkoutReport, WorkoutSample};

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;

/// Calorie coefficients for running, from the standard treadmill
/// metabolic equation.
mod running {
    pub const LEN_STEP_M: f64 = 0.65;
    pub const MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const MEAN_SPEED_SHIFT: f64 = 1.79;
}

/// Calorie coefficients for sports walking. The squared-speed term divided
/// by height in meters models the power-to-mass ratio.
mod walking {
    pub const LEN_STEP_M: f64 = 0.65;
    pub const KMH_TO_MS: f64 = 0.278;
    pub const CM_IN_M: f64 = 100.0;
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Calorie coefficients for swimming. Stroke length feeds the generic
/// distance only; mean speed comes from the pool instead.
mod swimming {
    pub const LEN_STEP_M: f64 = 1.38;
    pub const MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

impl WorkoutSample {
    /// Distance covered per action, in meters.
    pub fn step_length_m(&self) -> f64 {
        match self.kind {
            WorkoutKind::Running => running::LEN_STEP_M,
            WorkoutKind::SportsWalking { .. } => walking::LEN_STEP_M,
            WorkoutKind::Swimming { .. } => swimming::LEN_STEP_M,
        }
    }

    /// Generic action-based distance in km, shared by all variants.
    pub fn distance_km(&self) -> f64 {
        f64::from(self.action_count) * self.step_length_m() / M_IN_KM
    }

    /// Average speed in km/h. Swimming overrides the action-based formula
    /// with the distance actually swum in the pool.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self.kind {
            WorkoutKind::Swimming {
                pool_length_m,
                pool_lap_count,
            } => pool_length_m * f64::from(pool_lap_count) / M_IN_KM / self.duration_h,
            _ => self.distance_km() / self.duration_h,
        }
    }

    /// Calories burned over the whole workout, in kcal.
    pub fn calories_kcal(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        match self.kind {
            WorkoutKind::Running => {
                (running::MEAN_SPEED_MULTIPLIER * speed + running::MEAN_SPEED_SHIFT)
                    * self.weight_kg
                    / M_IN_KM
                    * (self.duration_h * MIN_IN_H)
            }
            WorkoutKind::SportsWalking { height_cm } => {
                (walking::WEIGHT_MULTIPLIER * self.weight_kg
                    + (speed * walking::KMH_TO_MS).powi(2) / (height_cm / walking::CM_IN_M)
                        * walking::SPEED_HEIGHT_MULTIPLIER
                        * self.weight_kg)
                    * (self.duration_h * MIN_IN_H)
            }
            WorkoutKind::Swimming { .. } => {
                (speed + swimming::MEAN_SPEED_SHIFT)
                    * swimming::WEIGHT_MULTIPLIER
                    * self.weight_kg
                    * self.duration_h
            }
        }
    }

    pub fn workout_name(&self) -> &'static str {
        match self.kind {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking { .. } => "SportsWalking",
            WorkoutKind::Swimming { .. } => "Swimming",
        }
    }

    /// Derive the one report this sample produces.
    pub fn report(&self) -> WorkoutReport {
        WorkoutReport {
            workout_name: self.workout_name().to_string(),
            duration_h: self.duration_h,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}
