mod choice;
mod food;
mod metrics;
mod plan;
mod profile;

pub use choice::ParseChoiceError;
pub use food::{DietaryPreference, FoodCategory, FoodItem};
pub use metrics::{BmiCategory, DerivedMetrics};
pub use plan::{MacroGrams, MacroSplit, Meal, MealPlan, NutritionPlan, TimelinePoint};
pub use profile::{
    ActivityLevel, AnthropometricProfile, CalculatorInput, Goal, GoalDirection, GoalTarget, Sex,
    is_provided,
};
