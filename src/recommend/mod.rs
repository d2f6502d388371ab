pub mod catalog;
pub mod exercise;
pub mod nutrition;
pub mod selection;

pub use catalog::{FOOD_CATALOG, find_food, foods_for};
pub use exercise::select_exercises;
pub use nutrition::{build_nutrition_plan, macro_grams, macro_split, plan_for};
pub use selection::{Portion, meal_composition, select_foods};
