use std::collections::HashMap;

use tracing::debug;

use crate::models::FoodCategory::{self, Carbs, Fats, Fruits, Protein, Vegetables};
use crate::models::{DietaryPreference, FoodItem, GoalDirection, Meal, MealPlan};
use crate::recommend::catalog::foods_for;

/// Take the first `count` suitable items of `category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portion {
    pub category: FoodCategory,
    pub count: usize,
}

const fn portion(category: FoodCategory, count: usize) -> Portion {
    Portion { category, count }
}

// Meal layouts per direction, in Meal::ALL order.

const LOSE: [&[Portion]; 4] = [
    &[portion(Protein, 1), portion(Carbs, 1), portion(Fruits, 1)],
    &[portion(Protein, 1), portion(Vegetables, 2), portion(Carbs, 1)],
    &[portion(Protein, 1), portion(Vegetables, 2), portion(Fats, 1)],
    &[portion(Fruits, 2)],
];

const GAIN: [&[Portion]; 4] = [
    &[
        portion(Protein, 1),
        portion(Carbs, 2),
        portion(Fats, 1),
        portion(Fruits, 1),
    ],
    &[
        portion(Protein, 2),
        portion(Carbs, 1),
        portion(Vegetables, 1),
        portion(Fats, 1),
    ],
    &[
        portion(Protein, 2),
        portion(Carbs, 1),
        portion(Vegetables, 1),
        portion(Fats, 1),
    ],
    &[portion(Protein, 1), portion(Fruits, 1), portion(Fats, 1)],
];

const MAINTAIN: [&[Portion]; 4] = [
    &[portion(Protein, 1), portion(Carbs, 1), portion(Fruits, 1)],
    &[portion(Protein, 1), portion(Carbs, 1), portion(Vegetables, 2)],
    &[
        portion(Protein, 1),
        portion(Carbs, 1),
        portion(Vegetables, 1),
        portion(Fats, 1),
    ],
    &[portion(Fruits, 1), portion(Fats, 1)],
];

/// Fixed per-meal layout for a direction.
pub fn meal_composition(direction: GoalDirection) -> [&'static [Portion]; 4] {
    match direction {
        GoalDirection::Lose => LOSE,
        GoalDirection::Gain => GAIN,
        GoalDirection::Maintain => MAINTAIN,
    }
}

/// Assemble a meal plan from the catalog.
///
/// Deterministic: filters by preference, groups by category in catalog
/// order, then slices the first N of each category per the direction's
/// layout. A category with fewer suitable items than requested just
/// contributes fewer foods.
pub fn select_foods(direction: GoalDirection, preference: DietaryPreference) -> MealPlan {
    let mut by_category: HashMap<FoodCategory, Vec<&'static FoodItem>> = HashMap::new();
    for food in foods_for(preference) {
        by_category.entry(food.category).or_default().push(food);
    }

    let mut plan = MealPlan::default();
    for (meal, portions) in Meal::ALL.into_iter().zip(meal_composition(direction)) {
        let items = plan.meal_mut(meal);
        for p in portions {
            if let Some(foods) = by_category.get(&p.category) {
                items.extend(foods.iter().take(p.count).copied());
            }
        }
    }

    debug!(
        direction = direction.label(),
        preference = preference.label(),
        items = plan.len(),
        "selected foods"
    );

    plan
}
