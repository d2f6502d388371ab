pub mod assessment;
pub mod calculations;
pub mod constants;
pub mod timeline;

pub use assessment::{assess, require_measurements};
pub use calculations::{
    classify_bmi, compute_bmi, compute_bmr, compute_calorie_adjustment, compute_tdee,
    weeks_to_target, weight_from_bmi,
};
pub use constants::*;
pub use timeline::project_timeline;
