use serde::Serialize;

use crate::models::{FoodItem, GoalDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl Meal {
    pub const ALL: [Meal; 4] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner, Meal::Snacks];

    pub fn label(&self) -> &'static str {
        match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
            Meal::Dinner => "Dinner",
            Meal::Snacks => "Snacks",
        }
    }
}

/// Four ordered food lists, one per meal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MealPlan {
    pub breakfast: Vec<&'static FoodItem>,
    pub lunch: Vec<&'static FoodItem>,
    pub dinner: Vec<&'static FoodItem>,
    pub snacks: Vec<&'static FoodItem>,
}

impl MealPlan {
    pub fn meal(&self, meal: Meal) -> &[&'static FoodItem] {
        match meal {
            Meal::Breakfast => &self.breakfast,
            Meal::Lunch => &self.lunch,
            Meal::Dinner => &self.dinner,
            Meal::Snacks => &self.snacks,
        }
    }

    pub fn meal_mut(&mut self, meal: Meal) -> &mut Vec<&'static FoodItem> {
        match meal {
            Meal::Breakfast => &mut self.breakfast,
            Meal::Lunch => &mut self.lunch,
            Meal::Dinner => &mut self.dinner,
            Meal::Snacks => &mut self.snacks,
        }
    }

    /// Every food across all meals, in meal order.
    pub fn all_items(&self) -> impl Iterator<Item = &'static FoodItem> + '_ {
        Meal::ALL
            .into_iter()
            .flat_map(move |meal| self.meal(meal).iter().copied())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.all_items().any(|f| f.name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.breakfast.len() + self.lunch.len() + self.dinner.len() + self.snacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Percentage of daily calories per macronutrient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MacroSplit {
    pub protein_pct: u32,
    pub carbs_pct: u32,
    pub fats_pct: u32,
}

impl MacroSplit {
    pub const fn new(protein_pct: u32, carbs_pct: u32, fats_pct: u32) -> Self {
        Self {
            protein_pct,
            carbs_pct,
            fats_pct,
        }
    }

    pub fn total(&self) -> u32 {
        self.protein_pct + self.carbs_pct + self.fats_pct
    }
}

/// Daily grams per macronutrient, each rounded independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroGrams {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
}

/// Recommendation bundle for one goal direction and preference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionPlan {
    pub direction: GoalDirection,
    pub tdee: f64,
    pub daily_calories: f64,
    pub split: MacroSplit,
    pub grams: MacroGrams,
    pub meals: MealPlan,
    pub exercises: &'static [&'static str],
}

impl NutritionPlan {
    /// Unsigned kcal/day between the target intake and TDEE.
    pub fn calorie_delta(&self) -> f64 {
        (self.daily_calories - self.tdee).round().abs()
    }
}

/// One point of the projected weight trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimelinePoint {
    pub week: u32,
    pub weight_kg: f64,
}

impl TimelinePoint {
    pub fn new(week: u32, weight_kg: f64) -> Self {
        Self { week, weight_kg }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DietaryPreference, FoodCategory};

    static APEL: FoodItem = FoodItem {
        name: "Apel",
        category: FoodCategory::Fruits,
        calories_per_100g: 52.0,
        protein: 0.3,
        carbs: 14.0,
        fats: 0.2,
        fiber: 2.4,
        suitable_for: &[DietaryPreference::Vegan],
    };

    #[test]
    fn test_meal_plan_len_and_contains() {
        let mut plan = MealPlan::default();
        assert!(plan.is_empty());

        plan.meal_mut(Meal::Snacks).push(&APEL);
        plan.meal_mut(Meal::Breakfast).push(&APEL);

        assert_eq!(plan.len(), 2);
        assert!(plan.contains("apel"));
        assert!(!plan.contains("Pisang"));
        assert_eq!(plan.all_items().count(), 2);
    }

    #[test]
    fn test_macro_split_total() {
        assert_eq!(MacroSplit::new(30, 40, 30).total(), 100);
    }
}
