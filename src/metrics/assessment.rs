use tracing::debug;

use crate::error::{FitError, Result};
use crate::metrics::calculations::{
    classify_bmi, compute_bmi, compute_bmr, compute_calorie_adjustment, compute_tdee,
    weeks_to_target, weight_from_bmi,
};
use crate::models::{AnthropometricProfile, DerivedMetrics, Goal, GoalDirection, GoalTarget};

/// Reject a profile without weight or height before running a full assessment.
pub fn require_measurements(profile: &AnthropometricProfile) -> Result<()> {
    if profile.has_measurements() {
        Ok(())
    } else {
        Err(FitError::MissingMeasurements)
    }
}

/// Resolve the goal into a (target weight, target BMI) pair.
fn resolve_target(profile: &AnthropometricProfile, target: GoalTarget) -> (f64, f64) {
    match target {
        GoalTarget::Weight(weight_kg) => (weight_kg, compute_bmi(weight_kg, profile.height_cm)),
        GoalTarget::Bmi(bmi) => (weight_from_bmi(bmi, profile.height_cm), bmi),
    }
}

/// Derive every metric for a profile and goal.
///
/// Never fails: missing fields propagate as 0 sentinels. The direction is
/// maintain when the target weight cannot be resolved, which also zeroes
/// the rate, the calorie adjustment and the projected weeks.
pub fn assess(profile: &AnthropometricProfile, goal: &Goal) -> DerivedMetrics {
    let current_bmi = compute_bmi(profile.weight_kg, profile.height_cm);
    let (target_weight_kg, target_bmi) = resolve_target(profile, goal.target);

    let bmr = compute_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex,
    );
    let tdee = compute_tdee(bmr, profile.activity_multiplier);

    let direction = GoalDirection::from_weights(profile.weight_kg, target_weight_kg);
    let signed_rate = direction.signed_rate(goal.rate_kg_per_week);

    let weeks = weeks_to_target(current_bmi, target_bmi, profile.height_cm, signed_rate);
    let calorie_adjustment = compute_calorie_adjustment(signed_rate);
    let daily_calories = (tdee + calorie_adjustment).round();

    debug!(
        current_bmi,
        target_bmi,
        bmr,
        tdee,
        direction = direction.label(),
        signed_rate,
        weeks,
        daily_calories,
        "assessed profile"
    );

    DerivedMetrics {
        current_weight_kg: profile.weight_kg,
        current_bmi,
        current_category: classify_bmi(current_bmi),
        target_weight_kg,
        target_bmi,
        target_category: classify_bmi(target_bmi),
        bmr,
        tdee,
        direction,
        signed_rate_kg_per_week: signed_rate,
        calorie_adjustment,
        daily_calories,
        weeks_to_target: weeks,
        weeks_prediction: weeks.ceil() as u32,
    }
}
