use crate::models::DietaryPreference::{self, Omnivore, Pescatarian, Vegan, Vegetarian};
use crate::models::FoodCategory::{Carbs, Fats, Fruits, Protein, Vegetables};
use crate::models::FoodItem;

const ALL_DIETS: &[DietaryPreference] = &[Omnivore, Vegetarian, Vegan, Pescatarian];

/// The fixed food reference table. Order matters: selection takes the first N
/// suitable items of each category.
pub static FOOD_CATALOG: [FoodItem; 19] = [
    // Protein
    FoodItem {
        name: "Dada Ayam",
        category: Protein,
        calories_per_100g: 165.0,
        protein: 31.0,
        carbs: 0.0,
        fats: 3.6,
        fiber: 0.0,
        suitable_for: &[Omnivore],
    },
    FoodItem {
        name: "Telur",
        category: Protein,
        calories_per_100g: 155.0,
        protein: 13.0,
        carbs: 1.1,
        fats: 11.0,
        fiber: 0.0,
        suitable_for: &[Omnivore, Vegetarian, Pescatarian],
    },
    FoodItem {
        name: "Ikan Salmon",
        category: Protein,
        calories_per_100g: 206.0,
        protein: 22.0,
        carbs: 0.0,
        fats: 13.0,
        fiber: 0.0,
        suitable_for: &[Omnivore, Pescatarian],
    },
    FoodItem {
        name: "Tahu",
        category: Protein,
        calories_per_100g: 76.0,
        protein: 8.0,
        carbs: 1.9,
        fats: 4.8,
        fiber: 0.3,
        suitable_for: ALL_DIETS,
    },
    FoodItem {
        name: "Tempe",
        category: Protein,
        calories_per_100g: 193.0,
        protein: 19.0,
        carbs: 8.8,
        fats: 11.0,
        fiber: 1.4,
        suitable_for: ALL_DIETS,
    },
    // Carbs
    FoodItem {
        name: "Nasi",
        category: Carbs,
        calories_per_100g: 130.0,
        protein: 2.7,
        carbs: 28.0,
        fats: 0.3,
        fiber: 0.4,
        suitable_for: ALL_DIETS,
    },
    FoodItem {
        name: "Ubi Jalar",
        category: Carbs,
        calories_per_100g: 86.0,
        protein: 1.6,
        carbs: 20.0,
        fats: 0.1,
        fiber: 3.0,
        suitable_for: ALL_DIETS,
    },
    FoodItem {
        name: "Kentang",
        category: Carbs,
        calories_per_100g: 77.0,
        protein: 2.0,
        carbs: 17.0,
        fats: 0.1,
        fiber: 2.2,
        suitable_for: ALL_DIETS,
    },
    FoodItem {
        name: "Oatmeal",
        category: Carbs,
        calories_per_100g: 68.0,
        protein: 2.4,
        carbs: 12.0,
        fats: 1.4,
        fiber: 1.7,
        suitable_for: ALL_DIETS,
    },
    FoodItem {
        name: "Roti Gandum",
        category: Carbs,
        calories_per_100g: 247.0,
        protein: 9.7,
        carbs: 41.0,
        fats: 3.6,
        fiber: 7.0,
        suitable_for: ALL_DIETS,
    },
    // Fats
    FoodItem {
        name: "Alpukat",
        category: Fats,
        calories_per_100g: 160.0,
        protein: 2.0,
        carbs: 8.5,
        fats: 15.0,
        fiber: 6.7,
        suitable_for: ALL_DIETS,
    },
    FoodItem {
        name: "Minyak Zaitun",
        category: Fats,
        calories_per_100g: 884.0,
        protein: 0.0,
        carbs: 0.0,
        fats: 100.0,
        fiber: 0.0,
        suitable_for: ALL_DIETS,
    },
    FoodItem {
        name: "Kacang Almond",
        category: Fats,
        calories_per_100g: 579.0,
        protein: 21.0,
        carbs: 22.0,
        fats: 50.0,
        fiber: 12.0,
        suitable_for: ALL_DIETS,
    },
    // Vegetables
    FoodItem {
        name: "Brokoli",
        category: Vegetables,
        calories_per_100g: 34.0,
        protein: 2.8,
        carbs: 7.0,
        fats: 0.4,
        fiber: 2.6,
        suitable_for: ALL_DIETS,
    },
    FoodItem {
        name: "Bayam",
        category: Vegetables,
        calories_per_100g: 23.0,
        protein: 2.9,
        carbs: 3.6,
        fats: 0.4,
        fiber: 2.2,
        suitable_for: ALL_DIETS,
    },
    FoodItem {
        name: "Wortel",
        category: Vegetables,
        calories_per_100g: 41.0,
        protein: 0.9,
        carbs: 10.0,
        fats: 0.2,
        fiber: 2.8,
        suitable_for: ALL_DIETS,
    },
    // Fruits
    FoodItem {
        name: "Pisang",
        category: Fruits,
        calories_per_100g: 89.0,
        protein: 1.1,
        carbs: 23.0,
        fats: 0.3,
        fiber: 2.6,
        suitable_for: ALL_DIETS,
    },
    FoodItem {
        name: "Apel",
        category: Fruits,
        calories_per_100g: 52.0,
        protein: 0.3,
        carbs: 14.0,
        fats: 0.2,
        fiber: 2.4,
        suitable_for: ALL_DIETS,
    },
    FoodItem {
        name: "Jeruk",
        category: Fruits,
        calories_per_100g: 47.0,
        protein: 0.9,
        carbs: 12.0,
        fats: 0.1,
        fiber: 2.4,
        suitable_for: ALL_DIETS,
    },
];

/// Case-insensitive lookup by name.
pub fn find_food(name: &str) -> Option<&'static FoodItem> {
    let name = name.trim();
    FOOD_CATALOG.iter().find(|f| f.name.eq_ignore_ascii_case(name))
}

/// Catalog items compatible with `preference`, in catalog order.
pub fn foods_for(preference: DietaryPreference) -> impl Iterator<Item = &'static FoodItem> {
    FOOD_CATALOG
        .iter()
        .filter(move |f| f.is_suitable_for(preference))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodCategory;

    #[test]
    fn test_catalog_covers_every_category() {
        for category in [Protein, Carbs, Fats, Vegetables, Fruits] {
            assert!(FOOD_CATALOG.iter().any(|f| f.category == category));
        }
    }

    #[test]
    fn test_every_item_suits_omnivores() {
        assert_eq!(foods_for(Omnivore).count(), FOOD_CATALOG.len());
    }

    #[test]
    fn test_vegan_excludes_animal_products() {
        let vegan: Vec<&str> = foods_for(Vegan).map(|f| f.name).collect();
        assert!(!vegan.contains(&"Dada Ayam"));
        assert!(!vegan.contains(&"Telur"));
        assert!(!vegan.contains(&"Ikan Salmon"));
        assert_eq!(
            foods_for(Vegan)
                .filter(|f| f.category == FoodCategory::Protein)
                .count(),
            2
        );
    }

    #[test]
    fn test_find_food_case_insensitive() {
        assert_eq!(find_food("tempe").map(|f| f.name), Some("Tempe"));
        assert_eq!(find_food(" IKAN SALMON ").map(|f| f.name), Some("Ikan Salmon"));
        assert!(find_food("pizza").is_none());
    }
}
