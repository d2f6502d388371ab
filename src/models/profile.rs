use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::metrics::constants::{
    DEFAULT_ACTIVITY_MULTIPLIER, DEFAULT_AGE_YEARS, DEFAULT_TARGET_BMI, DEFAULT_WEEKLY_RATE_KG,
};
use crate::models::DietaryPreference;
use crate::models::choice::{ParseChoiceError, parse_choice};

/// Whether a numeric field holds a usable value.
///
/// Zero, negative and non-finite numbers all mean "not provided yet"; a
/// genuine zero weight or height is physically meaningless, so collapsing the
/// two cases loses nothing.
#[inline]
pub fn is_provided(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Sex used to pick the Harris-Benedict coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sex {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(
            "sex",
            s,
            &[
                ("male", Sex::Male),
                ("m", Sex::Male),
                ("female", Sex::Female),
                ("f", Sex::Female),
            ],
        )
    }
}

/// The five recognised activity levels for TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Minimal activity.
    #[default]
    Sedentary,
    /// Exercise 1-3 times per week.
    Light,
    /// Exercise 3-5 times per week.
    Moderate,
    /// Exercise 6-7 times per week.
    Active,
    /// Heavy exercise or a physical job.
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::ExtraActive,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (minimal activity)",
            ActivityLevel::Light => "Lightly active (exercise 1-3 times/week)",
            ActivityLevel::Moderate => "Moderately active (exercise 3-5 times/week)",
            ActivityLevel::Active => "Very active (exercise 6-7 times/week)",
            ActivityLevel::ExtraActive => "Extra active (hard exercise, physical job)",
        }
    }

    /// Level whose multiplier equals `multiplier`, if any.
    pub fn from_multiplier(multiplier: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| (level.multiplier() - multiplier).abs() < 1e-9)
    }
}

impl FromStr for ActivityLevel {
    type Err = ParseChoiceError;

    /// Accepts a level name (`moderate`, `extra-active`, ...) or its multiplier (`1.55`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(level) = s.trim().parse::<f64>().ok().and_then(Self::from_multiplier) {
            return Ok(level);
        }
        parse_choice(
            "activity level",
            s,
            &[
                ("sedentary", ActivityLevel::Sedentary),
                ("light", ActivityLevel::Light),
                ("moderate", ActivityLevel::Moderate),
                ("active", ActivityLevel::Active),
                ("extra_active", ActivityLevel::ExtraActive),
                ("extra", ActivityLevel::ExtraActive),
            ],
        )
    }
}

/// Body measurements for one calculation. Supplied fresh on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnthropometricProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: f64,
    pub sex: Sex,
    /// One of the [`ActivityLevel`] multipliers; any positive number is accepted.
    pub activity_multiplier: f64,
}

impl AnthropometricProfile {
    pub fn new(
        weight_kg: f64,
        height_cm: f64,
        age_years: f64,
        sex: Sex,
        activity: ActivityLevel,
    ) -> Self {
        Self {
            weight_kg,
            height_cm,
            age_years,
            sex,
            activity_multiplier: activity.multiplier(),
        }
    }

    /// Weight and height are both present.
    pub fn has_measurements(&self) -> bool {
        is_provided(self.weight_kg) && is_provided(self.height_cm)
    }
}

impl Default for AnthropometricProfile {
    fn default() -> Self {
        Self {
            weight_kg: 0.0,
            height_cm: 0.0,
            age_years: DEFAULT_AGE_YEARS,
            sex: Sex::default(),
            activity_multiplier: DEFAULT_ACTIVITY_MULTIPLIER,
        }
    }
}

/// What the user is aiming for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum GoalTarget {
    /// Target body weight in kg.
    Weight(f64),
    /// Target BMI.
    Bmi(f64),
}

/// A target plus the unsigned weekly rate of change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub target: GoalTarget,
    /// Magnitude only; the sign is derived from the direction.
    pub rate_kg_per_week: f64,
}

impl Goal {
    pub fn target_weight(weight_kg: f64, rate_kg_per_week: f64) -> Self {
        Self {
            target: GoalTarget::Weight(weight_kg),
            rate_kg_per_week,
        }
    }

    pub fn target_bmi(bmi: f64, rate_kg_per_week: f64) -> Self {
        Self {
            target: GoalTarget::Bmi(bmi),
            rate_kg_per_week,
        }
    }
}

impl Default for Goal {
    fn default() -> Self {
        Self::target_bmi(DEFAULT_TARGET_BMI, DEFAULT_WEEKLY_RATE_KG)
    }
}

/// A complete set of calculator inputs, as read from an input file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculatorInput {
    pub profile: AnthropometricProfile,
    pub goal: Goal,
    #[serde(default)]
    pub preference: DietaryPreference,
}

/// Direction of the weight change, derived by comparing target and current weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalDirection {
    Lose,
    Gain,
    #[default]
    Maintain,
}

impl GoalDirection {
    pub const ALL: [GoalDirection; 3] = [
        GoalDirection::Lose,
        GoalDirection::Gain,
        GoalDirection::Maintain,
    ];

    /// Maintain when either weight is missing.
    pub fn from_weights(current_kg: f64, target_kg: f64) -> Self {
        if !is_provided(current_kg) || !is_provided(target_kg) {
            return GoalDirection::Maintain;
        }
        if target_kg > current_kg {
            GoalDirection::Gain
        } else if target_kg < current_kg {
            GoalDirection::Lose
        } else {
            GoalDirection::Maintain
        }
    }

    /// Apply the direction's sign to an unsigned rate. Maintain yields 0.
    pub fn signed_rate(&self, rate_kg_per_week: f64) -> f64 {
        match self {
            GoalDirection::Gain => rate_kg_per_week.abs(),
            GoalDirection::Lose => -rate_kg_per_week.abs(),
            GoalDirection::Maintain => 0.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GoalDirection::Lose => "lose",
            GoalDirection::Gain => "gain",
            GoalDirection::Maintain => "maintain",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            GoalDirection::Lose => "Needs to lose weight",
            GoalDirection::Gain => "Needs to gain weight",
            GoalDirection::Maintain => "Maintain current weight",
        }
    }

    /// How the daily calorie target relates to TDEE.
    pub fn calorie_label(&self) -> &'static str {
        match self {
            GoalDirection::Lose => "deficit",
            GoalDirection::Gain => "surplus",
            GoalDirection::Maintain => "balanced",
        }
    }
}

impl fmt::Display for GoalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GoalDirection {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(
            "goal direction",
            s,
            &[
                ("lose", GoalDirection::Lose),
                ("gain", GoalDirection::Gain),
                ("maintain", GoalDirection::Maintain),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_provided() {
        assert!(is_provided(70.0));
        assert!(!is_provided(0.0));
        assert!(!is_provided(-1.0));
        assert!(!is_provided(f64::NAN));
        assert!(!is_provided(f64::INFINITY));
    }

    #[test]
    fn test_activity_from_name_or_multiplier() {
        assert_eq!("moderate".parse::<ActivityLevel>(), Ok(ActivityLevel::Moderate));
        assert_eq!("1.725".parse::<ActivityLevel>(), Ok(ActivityLevel::Active));
        assert_eq!("Extra-Active".parse::<ActivityLevel>(), Ok(ActivityLevel::ExtraActive));
        assert!("1.3".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_direction_from_weights() {
        assert_eq!(GoalDirection::from_weights(70.0, 65.0), GoalDirection::Lose);
        assert_eq!(GoalDirection::from_weights(70.0, 75.0), GoalDirection::Gain);
        assert_eq!(GoalDirection::from_weights(70.0, 70.0), GoalDirection::Maintain);
        // Missing target
        assert_eq!(GoalDirection::from_weights(70.0, 0.0), GoalDirection::Maintain);
    }

    #[test]
    fn test_signed_rate() {
        assert_eq!(GoalDirection::Lose.signed_rate(0.5), -0.5);
        assert_eq!(GoalDirection::Gain.signed_rate(-0.5), 0.5);
        assert_eq!(GoalDirection::Maintain.signed_rate(0.5), 0.0);
    }

    #[test]
    fn test_goal_target_json_shape() {
        let goal = Goal::target_weight(65.0, 0.5);
        let json = serde_json::to_value(goal).unwrap();
        assert_eq!(json["target"]["type"], "weight");
        assert_eq!(json["target"]["value"], 65.0);
        assert_eq!(json["rate_kg_per_week"], 0.5);
    }

    #[test]
    fn test_profile_default_uses_form_defaults() {
        let profile = AnthropometricProfile::default();
        assert_eq!(profile.age_years, 25.0);
        assert_eq!(profile.activity_multiplier, 1.2);
        assert!(!profile.has_measurements());
    }
}
