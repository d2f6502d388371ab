//! Pure anthropometric calculations.
//!
//! Every function is total: missing input (zero, negative or non-finite, see
//! [`is_provided`]) yields a 0 sentinel instead of an error, so a half-filled
//! form can call these on every keystroke.

use crate::metrics::constants::*;
use crate::models::{BmiCategory, Sex, is_provided};

/// Squared height in metres.
#[inline]
fn height_m_squared(height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    height_m * height_m
}

/// BMI = weight / height_m².
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if !is_provided(weight_kg) || !is_provided(height_cm) {
        return 0.0;
    }
    weight_kg / height_m_squared(height_cm)
}

/// Band a BMI value. 0 (missing) maps to [`BmiCategory::Undefined`].
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if !is_provided(bmi) {
        BmiCategory::Undefined
    } else if bmi < BMI_NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi < BMI_OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if bmi < BMI_OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Inverse of [`compute_bmi`].
pub fn weight_from_bmi(bmi: f64, height_cm: f64) -> f64 {
    if !is_provided(bmi) || !is_provided(height_cm) {
        return 0.0;
    }
    bmi * height_m_squared(height_cm)
}

/// Basal metabolic rate (kcal/day), revised Harris-Benedict.
///
/// Clamped at 0 so absurd ages cannot produce a negative rate.
pub fn compute_bmr(weight_kg: f64, height_cm: f64, age_years: f64, sex: Sex) -> f64 {
    if !is_provided(weight_kg) || !is_provided(height_cm) || !is_provided(age_years) {
        return 0.0;
    }

    let c = match sex {
        Sex::Male => HARRIS_BENEDICT_MALE,
        Sex::Female => HARRIS_BENEDICT_FEMALE,
    };

    (c.base + c.weight * weight_kg + c.height * height_cm - c.age * age_years).max(0.0)
}

/// Total daily energy expenditure. The multiplier is not checked against the
/// five activity levels.
pub fn compute_tdee(bmr: f64, activity_multiplier: f64) -> f64 {
    let tdee = bmr * activity_multiplier;
    if tdee.is_finite() { tdee.max(0.0) } else { 0.0 }
}

/// Daily kcal adjustment for a signed weekly rate (negative = loss).
pub fn compute_calorie_adjustment(signed_weekly_rate_kg: f64) -> f64 {
    if !signed_weekly_rate_kg.is_finite() {
        return 0.0;
    }
    signed_weekly_rate_kg * KCAL_PER_DAY_PER_WEEKLY_KG
}

/// Weeks needed to move from `current_bmi` to `target_bmi`.
///
/// The weekly weight rate becomes a BMI rate via `rate / height_m²`; the sign
/// of the rate is ignored. Any missing input returns 0.
pub fn weeks_to_target(
    current_bmi: f64,
    target_bmi: f64,
    height_cm: f64,
    signed_weekly_rate_kg: f64,
) -> f64 {
    let rate = signed_weekly_rate_kg.abs();
    if !is_provided(current_bmi)
        || !is_provided(target_bmi)
        || !is_provided(height_cm)
        || !is_provided(rate)
    {
        return 0.0;
    }

    let bmi_rate = rate / height_m_squared(height_cm);
    (target_bmi - current_bmi).abs() / bmi_rate
}
