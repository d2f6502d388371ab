use crate::models::{
    DerivedMetrics, DietaryPreference, FoodItem, Meal, NutritionPlan, TimelinePoint,
};

/// Format a value to one decimal, or `-` when it is missing.
fn one_decimal_or_dash(value: f64) -> String {
    if value > 0.0 {
        format!("{:.1}", value)
    } else {
        "-".to_string()
    }
}

/// Display current and target BMI with the required weight change.
pub fn display_metrics(metrics: &DerivedMetrics) {
    println!();
    println!("=== Body Metrics ===");
    println!();
    println!(
        "Current BMI: {:>5} ({})",
        one_decimal_or_dash(metrics.current_bmi),
        metrics.current_category
    );
    println!(
        "Target BMI:  {:>5} ({})",
        one_decimal_or_dash(metrics.target_bmi),
        metrics.target_category
    );
    println!(
        "Weight: {} kg -> {} kg",
        one_decimal_or_dash(metrics.current_weight_kg),
        one_decimal_or_dash(metrics.target_weight_kg)
    );

    if metrics.has_target() {
        println!(
            "{} ({:.1} kg)",
            metrics.direction.describe(),
            metrics.weight_difference_kg()
        );
    } else {
        println!("No target yet");
    }

    println!();
    println!("BMR:  {:.0} kcal/day", metrics.bmr);
    println!("TDEE: {:.0} kcal/day", metrics.tdee);
    println!();
}

/// Display the projected weekly weights.
pub fn display_timeline(points: &[TimelinePoint], metrics: &DerivedMetrics) {
    println!("=== Weight Timeline ===");
    println!();
    println!("Estimated time: {} weeks", metrics.weeks_prediction);
    println!(
        "At a rate of {} kg per week",
        metrics.signed_rate_kg_per_week.abs()
    );
    println!();

    for point in points {
        println!("  Week {:>3}: {:>6.1} kg", point.week, point.weight_kg);
    }

    println!();
    println!(
        "Start: {:.1} kg | Target: {:.1} kg",
        metrics.current_weight_kg, metrics.target_weight_kg
    );
    println!();
}

/// Display calorie targets, macros, meals and exercise advice.
pub fn display_nutrition_plan(plan: &NutritionPlan) {
    println!("=== Nutrition & Activity Plan ===");
    println!();
    println!("TDEE:           {:.0} kcal", plan.tdee);
    println!(
        "Calorie target: {:.0} kcal ({})",
        plan.daily_calories,
        plan.direction.calorie_label()
    );
    let change = if plan.daily_calories > plan.tdee {
        "extra"
    } else {
        "fewer"
    };
    println!(
        "Adjustment:     {:.0} kcal {} per day",
        plan.calorie_delta(),
        change
    );
    println!();

    println!("--- Macronutrients ---");
    println!(
        "Protein: {:>3}% ({:.0} g)",
        plan.split.protein_pct, plan.grams.protein_g
    );
    println!(
        "Carbs:   {:>3}% ({:.0} g)",
        plan.split.carbs_pct, plan.grams.carbs_g
    );
    println!(
        "Fats:    {:>3}% ({:.0} g)",
        plan.split.fats_pct, plan.grams.fats_g
    );
    println!();

    println!("--- Food Recommendations ---");
    for meal in Meal::ALL {
        println!("{}:", meal.label());
        let items = plan.meals.meal(meal);
        if items.is_empty() {
            println!("  (none)");
        }
        for food in items {
            println!("  - {} ({} kcal per 100g)", food.name, food.calories_per_100g);
        }
    }
    println!();

    println!("--- Activity Recommendations ---");
    for exercise in plan.exercises {
        println!("  - {}", exercise);
    }
    println!();
    println!("Note: these recommendations are general. Consult a nutritionist for a personal plan.");
    println!();
}

/// Display catalog entries, optionally labelled with the preference they were filtered by.
pub fn display_catalog(foods: &[&FoodItem], preference: Option<DietaryPreference>) {
    let title = match preference {
        Some(p) => format!("Food Catalog ({})", p),
        None => "Food Catalog".to_string(),
    };

    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    let max_name_len = foods.iter().map(|f| f.name.len()).max().unwrap_or(10);

    for food in foods {
        println!(
            "  {:<width$}  {:<10} {:>5} kcal  P:{:<5} C:{:<5} F:{:<5} Fiber:{}",
            food.name,
            food.category.label(),
            food.calories_per_100g,
            food.protein,
            food.carbs,
            food.fats,
            food.fiber,
            width = max_name_len
        );
    }

    println!();
}
