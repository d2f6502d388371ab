mod persistence;

pub use persistence::{load_input, save_report, write_timeline_csv};

use serde::Serialize;

use crate::metrics::{assess, project_timeline};
use crate::models::{CalculatorInput, DerivedMetrics, NutritionPlan, TimelinePoint};
use crate::recommend::build_nutrition_plan;

/// Full calculation result for one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub input: CalculatorInput,
    pub metrics: DerivedMetrics,
    pub timeline: Vec<TimelinePoint>,
    pub nutrition: NutritionPlan,
}

impl Report {
    /// Run the whole pipeline: metrics, then timeline and recommendations.
    pub fn build(input: CalculatorInput) -> Self {
        let metrics = assess(&input.profile, &input.goal);
        let timeline = project_timeline(
            metrics.current_weight_kg,
            metrics.target_weight_kg,
            metrics.weeks_to_target,
            metrics.signed_rate_kg_per_week,
        );
        let nutrition = build_nutrition_plan(&metrics, input.preference);

        Self {
            input,
            metrics,
            timeline,
            nutrition,
        }
    }
}
