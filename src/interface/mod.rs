pub mod prompts;
pub mod render;

pub use prompts::{
    FormDraft, complete_form, is_recommended_rate, parse_or, prompt_activity, prompt_goal_target,
    prompt_number, prompt_preference, prompt_rate, prompt_sex, prompt_yes_no,
};
pub use render::{display_catalog, display_metrics, display_nutrition_plan, display_timeline};
