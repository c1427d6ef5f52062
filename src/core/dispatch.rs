use crate::domain::model::{SensorPackage, WorkoutKind, WorkoutSample};
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{validate_non_negative, validate_positive};

pub const RUNNING_CODE: &str = "RUN";
pub const WALKING_CODE: &str = "WLK";
pub const SWIMMING_CODE: &str = "SWM";

const RUNNING_ARITY: usize = 3;
const WALKING_ARITY: usize = 4;
const SWIMMING_ARITY: usize = 5;

/// Build a validated sample from one raw sensor package.
///
/// Field order is fixed per code:
/// - `RUN`: action_count, duration_h, weight_kg
/// - `WLK`: action_count, duration_h, weight_kg, height_cm
/// - `SWM`: action_count, duration_h, weight_kg, pool_length_m, pool_lap_count
///
/// An unrecognized code is recoverable (the caller skips the package); a
/// wrong field count or invalid value aborts the batch.
pub fn read_package(package: &SensorPackage) -> Result<WorkoutSample> {
    let data = &package.data;
    match package.workout.as_str() {
        RUNNING_CODE => {
            check_arity(RUNNING_CODE, RUNNING_ARITY, data.len())?;
            build_sample(data[0], data[1], data[2], WorkoutKind::Running)
        }
        WALKING_CODE => {
            check_arity(WALKING_CODE, WALKING_ARITY, data.len())?;
            validate_positive("height_cm", data[3])?;
            build_sample(
                data[0],
                data[1],
                data[2],
                WorkoutKind::SportsWalking { height_cm: data[3] },
            )
        }
        SWIMMING_CODE => {
            check_arity(SWIMMING_CODE, SWIMMING_ARITY, data.len())?;
            validate_non_negative("pool_length_m", data[3])?;
            build_sample(
                data[0],
                data[1],
                data[2],
                WorkoutKind::Swimming {
                    pool_length_m: data[3],
                    pool_lap_count: to_count("pool_lap_count", data[4])?,
                },
            )
        }
        other => Err(TrackerError::UnknownWorkoutType {
            code: other.to_string(),
        }),
    }
}

fn check_arity(code: &str, expected: usize, actual: usize) -> Result<()> {
    if actual != expected {
        return Err(TrackerError::ArityMismatch {
            code: code.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

fn build_sample(action: f64, duration: f64, weight: f64, kind: WorkoutKind) -> Result<WorkoutSample> {
    validate_positive("duration_h", duration)?;
    validate_non_negative("weight_kg", weight)?;

    Ok(WorkoutSample {
        action_count: to_count("action_count", action)?,
        duration_h: duration,
        weight_kg: weight,
        kind,
    })
}

/// Counters arrive on the wire as plain numbers but must be whole and
/// non-negative.
fn to_count(field_name: &str, value: f64) -> Result<u32> {
    validate_non_negative(field_name, value)?;
    if value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(TrackerError::InvalidSample {
            message: format!("{} must be a whole number (got {})", field_name, value),
        });
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_running_sample_with_positional_binding() {
        let package = SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]);
        let sample = read_package(&package).unwrap();

        assert_eq!(sample.action_count, 15000);
        assert_eq!(sample.duration_h, 1.0);
        assert_eq!(sample.weight_kg, 75.0);
        assert_eq!(sample.kind, WorkoutKind::Running);
    }

    #[test]
    fn test_builds_walking_sample_with_height() {
        let package = SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]);
        let sample = read_package(&package).unwrap();

        assert_eq!(sample.action_count, 9000);
        assert_eq!(sample.kind, WorkoutKind::SportsWalking { height_cm: 180.0 });
    }

    #[test]
    fn test_builds_swimming_sample_with_pool_fields() {
        let package = SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]);
        let sample = read_package(&package).unwrap();

        assert_eq!(sample.action_count, 720);
        assert_eq!(
            sample.kind,
            WorkoutKind::Swimming {
                pool_length_m: 25.0,
                pool_lap_count: 40,
            }
        );
    }

    #[test]
    fn test_stored_fields_round_trip_exactly() {
        let package = SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]);
        let sample = read_package(&package).unwrap();

        assert_eq!(f64::from(sample.action_count), 720.0);
        assert_eq!(sample.duration_h, 1.0);
        assert_eq!(sample.weight_kg, 80.0);
    }

    #[test]
    fn test_unknown_code_is_a_typed_error() {
        let package = SensorPackage::new("XYZ", vec![1.0, 1.0, 1.0]);
        let err = read_package(&package).unwrap_err();
        assert!(matches!(err, TrackerError::UnknownWorkoutType { code } if code == "XYZ"));
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        let package = SensorPackage::new("RUN", vec![15000.0, 1.0]);
        let err = read_package(&package).unwrap_err();
        assert!(matches!(
            err,
            TrackerError::ArityMismatch {
                expected: 3,
                actual: 2,
                ..
            }
        ));

        let package = SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0]);
        assert!(read_package(&package).is_err());
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        let package = SensorPackage::new("RUN", vec![15000.0, 0.0, 75.0]);
        let err = read_package(&package).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidSample { .. }));
    }

    #[test]
    fn test_negative_duration_is_rejected() {
        let package = SensorPackage::new("RUN", vec![15000.0, -1.0, 75.0]);
        assert!(read_package(&package).is_err());
    }

    #[test]
    fn test_fractional_action_count_is_rejected() {
        let package = SensorPackage::new("RUN", vec![15000.5, 1.0, 75.0]);
        assert!(read_package(&package).is_err());
    }

    #[test]
    fn test_zero_height_is_rejected() {
        // Height divides the walking calorie formula.
        let package = SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 0.0]);
        assert!(read_package(&package).is_err());
    }
}
