use std::fmt;

use serde::Serialize;

use crate::models::{GoalDirection, is_provided};

/// Ordinal BMI band. `Undefined` is reported for a BMI of 0 (missing input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Undefined,
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Undefined => "-",
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything derived from a profile and a goal. Recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub current_weight_kg: f64,
    pub current_bmi: f64,
    pub current_category: BmiCategory,

    pub target_weight_kg: f64,
    pub target_bmi: f64,
    pub target_category: BmiCategory,

    /// Basal metabolic rate, kcal/day.
    pub bmr: f64,
    /// Total daily energy expenditure, kcal/day.
    pub tdee: f64,

    pub direction: GoalDirection,
    /// Weekly rate with the direction's sign applied (kg/week).
    pub signed_rate_kg_per_week: f64,
    /// Signed kcal/day added to TDEE.
    pub calorie_adjustment: f64,
    /// `round(tdee + calorie_adjustment)`.
    pub daily_calories: f64,

    pub weeks_to_target: f64,
    /// Whole weeks, `ceil(weeks_to_target)`.
    pub weeks_prediction: u32,
}

impl DerivedMetrics {
    /// Absolute distance between current and target weight, 0 if either is missing.
    pub fn weight_difference_kg(&self) -> f64 {
        if self.has_target() {
            (self.target_weight_kg - self.current_weight_kg).abs()
        } else {
            0.0
        }
    }

    /// Both current and target weight are known.
    pub fn has_target(&self) -> bool {
        is_provided(self.current_weight_kg) && is_provided(self.target_weight_kg)
    }
}
