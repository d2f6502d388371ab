use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::choice::{ParseChoiceError, parse_choice};

/// Catalog grouping used to compose meals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Protein,
    Carbs,
    Fats,
    Vegetables,
    Fruits,
}

impl FoodCategory {
    pub fn label(&self) -> &'static str {
        match self {
            FoodCategory::Protein => "protein",
            FoodCategory::Carbs => "carbs",
            FoodCategory::Fats => "fats",
            FoodCategory::Vegetables => "vegetables",
            FoodCategory::Fruits => "fruits",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietaryPreference {
    #[default]
    Omnivore,
    Vegetarian,
    Vegan,
    Pescatarian,
}

impl DietaryPreference {
    pub const ALL: [DietaryPreference; 4] = [
        DietaryPreference::Omnivore,
        DietaryPreference::Vegetarian,
        DietaryPreference::Vegan,
        DietaryPreference::Pescatarian,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DietaryPreference::Omnivore => "omnivore",
            DietaryPreference::Vegetarian => "vegetarian",
            DietaryPreference::Vegan => "vegan",
            DietaryPreference::Pescatarian => "pescatarian",
        }
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DietaryPreference {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(
            "dietary preference",
            s,
            &[
                ("omnivore", DietaryPreference::Omnivore),
                ("vegetarian", DietaryPreference::Vegetarian),
                ("vegan", DietaryPreference::Vegan),
                ("pescatarian", DietaryPreference::Pescatarian),
            ],
        )
    }
}

/// A catalog entry. Nutrients are grams per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodItem {
    pub name: &'static str,
    pub category: FoodCategory,
    pub calories_per_100g: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub fiber: f64,
    pub suitable_for: &'static [DietaryPreference],
}

impl FoodItem {
    #[inline]
    pub fn is_suitable_for(&self, preference: DietaryPreference) -> bool {
        self.suitable_for.contains(&preference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> FoodItem {
        FoodItem {
            name: "Telur",
            category: FoodCategory::Protein,
            calories_per_100g: 155.0,
            protein: 13.0,
            carbs: 1.1,
            fats: 11.0,
            fiber: 0.0,
            suitable_for: &[
                DietaryPreference::Omnivore,
                DietaryPreference::Vegetarian,
                DietaryPreference::Pescatarian,
            ],
        }
    }

    #[test]
    fn test_is_suitable_for() {
        let food = sample_food();
        assert!(food.is_suitable_for(DietaryPreference::Vegetarian));
        assert!(!food.is_suitable_for(DietaryPreference::Vegan));
    }

    #[test]
    fn test_preference_parse() {
        assert_eq!("Vegan".parse::<DietaryPreference>(), Ok(DietaryPreference::Vegan));
        let err = "pescetarian".parse::<DietaryPreference>().unwrap_err();
        assert_eq!(err.suggestion, Some("pescatarian"));
    }

    #[test]
    fn test_serializes_lowercase_enums() {
        let json = serde_json::to_value(sample_food()).unwrap();
        assert_eq!(json["category"], "protein");
        assert_eq!(json["suitable_for"][1], "vegetarian");
    }
}
