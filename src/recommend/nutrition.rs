use tracing::debug;

use crate::metrics::constants::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use crate::models::{
    DerivedMetrics, DietaryPreference, GoalDirection, MacroGrams, MacroSplit, NutritionPlan,
};
use crate::recommend::exercise::select_exercises;
use crate::recommend::selection::select_foods;

/// Protein/carbs/fat percentages for a direction. Always sums to 100.
pub fn macro_split(direction: GoalDirection) -> MacroSplit {
    match direction {
        GoalDirection::Lose => MacroSplit::new(35, 35, 30),
        GoalDirection::Gain => MacroSplit::new(25, 50, 25),
        GoalDirection::Maintain => MacroSplit::new(30, 40, 30),
    }
}

/// Grams per macronutrient for a daily calorie target.
///
/// Each value is rounded on its own, so the grams may not add back up to
/// exactly `daily_calories`.
pub fn macro_grams(daily_calories: f64, split: MacroSplit) -> MacroGrams {
    let grams = |pct: u32, kcal_per_gram: f64| {
        (daily_calories * (pct as f64 / 100.0) / kcal_per_gram).round()
    };

    MacroGrams {
        protein_g: grams(split.protein_pct, KCAL_PER_GRAM_PROTEIN),
        carbs_g: grams(split.carbs_pct, KCAL_PER_GRAM_CARBS),
        fats_g: grams(split.fats_pct, KCAL_PER_GRAM_FAT),
    }
}

impl MacroGrams {
    /// Calories implied by the rounded grams.
    pub fn calories(&self) -> f64 {
        self.protein_g * KCAL_PER_GRAM_PROTEIN
            + self.carbs_g * KCAL_PER_GRAM_CARBS
            + self.fats_g * KCAL_PER_GRAM_FAT
    }
}

/// Macros, meals and exercise for a direction and calorie target.
pub fn plan_for(
    direction: GoalDirection,
    preference: DietaryPreference,
    tdee: f64,
    daily_calories: f64,
) -> NutritionPlan {
    let split = macro_split(direction);
    let grams = macro_grams(daily_calories, split);

    debug!(
        direction = direction.label(),
        daily_calories,
        protein_g = grams.protein_g,
        carbs_g = grams.carbs_g,
        fats_g = grams.fats_g,
        "built nutrition plan"
    );

    NutritionPlan {
        direction,
        tdee,
        daily_calories,
        split,
        grams,
        meals: select_foods(direction, preference),
        exercises: select_exercises(direction),
    }
}

/// Everything the recommendation layer derives from an assessment.
pub fn build_nutrition_plan(
    metrics: &DerivedMetrics,
    preference: DietaryPreference,
) -> NutritionPlan {
    plan_for(
        metrics.direction,
        preference,
        metrics.tdee,
        metrics.daily_calories,
    )
}
