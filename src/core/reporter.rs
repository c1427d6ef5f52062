use crate::domain::model::WorkoutReport;

pub const CSV_HEADER: &str = "workout,duration_h,distance_km,mean_speed_kmh,calories_kcal";

/// Render the fixed summary template for one report.
///
/// Values are printed with exactly three fractional digits using Rust's
/// default fixed-point formatting, which rounds the underlying binary value
/// deterministically to the nearest decimal.
pub fn render_summary(report: &WorkoutReport) -> String {
    format!(
        "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
         Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
        report.workout_name,
        report.duration_h,
        report.distance_km,
        report.mean_speed_kmh,
        report.calories_kcal
    )
}

pub fn render_csv_row(report: &WorkoutReport) -> String {
    format!(
        "{},{:.3},{:.3},{:.3},{:.3}",
        report.workout_name,
        report.duration_h,
        report.distance_km,
        report.mean_speed_kmh,
        report.calories_kcal
    )
}

pub fn render_csv(reports: &[WorkoutReport]) -> String {
    let mut lines = vec![CSV_HEADER.to_string()];
    lines.extend(reports.iter().map(render_csv_row));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> WorkoutReport {
        WorkoutReport {
            workout_name: "Swimming".to_string(),
            duration_h: 1.0,
            distance_km: 0.9936,
            mean_speed_kmh: 1.0,
            calories_kcal: 336.0,
        }
    }

    #[test]
    fn test_render_summary_matches_fixed_template() {
        assert_eq!(
            render_summary(&report()),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_render_summary_keeps_three_fractional_digits() {
        let line = render_summary(&WorkoutReport {
            workout_name: "Running".to_string(),
            duration_h: 0.5,
            distance_km: 9.7515,
            mean_speed_kmh: 19.503,
            calories_kcal: 797.8049,
        });
        assert!(line.contains("Длительность: 0.500 ч."));
        assert!(line.contains("Дистанция: 9.752 км"));
        assert!(line.contains("Ср. скорость: 19.503 км/ч"));
        assert!(line.contains("Потрачено ккал: 797.805."));
    }

    #[test]
    fn test_render_csv_has_header_and_one_row_per_report() {
        let csv = render_csv(&[report(), report()]);
        let lines: Vec<&str> = csv.split('\n').collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "Swimming,1.000,0.994,1.000,336.000");
        assert_eq!(lines[1], lines[2]);
    }

    #[test]
    fn test_render_csv_of_empty_batch_is_just_the_header() {
        assert_eq!(render_csv(&[]), CSV_HEADER);
    }
}
