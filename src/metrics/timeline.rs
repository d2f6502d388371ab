use tracing::warn;

use crate::metrics::constants::MAX_TIMELINE_WEEKS;
use crate::models::TimelinePoint;

/// Clamp a projected weight so it never passes the target.
fn clamp_to_target(projected_kg: f64, target_kg: f64, signed_rate: f64) -> f64 {
    if signed_rate < 0.0 && projected_kg < target_kg {
        target_kg
    } else if signed_rate > 0.0 && projected_kg > target_kg {
        target_kg
    } else {
        projected_kg
    }
}

/// Week-by-week projected weight, linear in `signed_rate` and clamped at the target.
///
/// Produces weeks `0..=ceil(weeks_prediction)`, at most [`MAX_TIMELINE_WEEKS`].
/// A non-finite or non-positive prediction yields the starting point only.
pub fn project_timeline(
    current_weight_kg: f64,
    target_weight_kg: f64,
    weeks_prediction: f64,
    signed_rate: f64,
) -> Vec<TimelinePoint> {
    let total_weeks = if weeks_prediction.is_finite() && weeks_prediction > 0.0 {
        let weeks = weeks_prediction.ceil();
        if weeks > MAX_TIMELINE_WEEKS as f64 {
            warn!(
                weeks,
                max = MAX_TIMELINE_WEEKS,
                "timeline truncated"
            );
            MAX_TIMELINE_WEEKS
        } else {
            weeks as u32
        }
    } else {
        0
    };

    (0..=total_weeks)
        .map(|week| {
            let projected = current_weight_kg + signed_rate * week as f64;
            TimelinePoint::new(
                week,
                clamp_to_target(projected, target_weight_kg, signed_rate),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_losing_timeline_clamps_at_target() {
        // 70 → 68.8 at 0.5/week: 2.4 weeks → 3 weeks
        let points = project_timeline(70.0, 68.8, 2.4, -0.5);

        assert_eq!(points.len(), 4);
        assert_eq!(points[0], TimelinePoint::new(0, 70.0));
        assert_eq!(points[1].weight_kg, 69.5);
        assert_eq!(points[2].weight_kg, 69.0);
        assert_eq!(points[3].weight_kg, 68.8);
    }

    #[test]
    fn test_gaining_timeline_clamps_at_target() {
        let points = project_timeline(60.0, 61.2, 2.4, 0.5);

        assert_eq!(points.last().unwrap().weight_kg, 61.2);
        assert!(points.iter().all(|p| p.weight_kg <= 61.2));
    }

    #[test]
    fn test_weeks_are_sequential() {
        let points = project_timeline(80.0, 75.0, 10.0, -0.5);

        assert_eq!(points.len(), 11);
        for (i, point) in points.iter().enumerate() {
            assert_eq!(point.week, i as u32);
        }
    }

    #[test]
    fn test_zero_prediction_is_single_point() {
        let points = project_timeline(70.0, 70.0, 0.0, 0.0);
        assert_eq!(points, vec![TimelinePoint::new(0, 70.0)]);

        let points = project_timeline(70.0, 65.0, f64::NAN, -0.5);
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_long_prediction_is_capped() {
        let points = project_timeline(150.0, 60.0, 10_000.0, -0.01);
        assert_eq!(points.len(), MAX_TIMELINE_WEEKS as usize + 1);
    }
}
