pub mod cli;
pub mod error;
pub mod interface;
pub mod metrics;
pub mod models;
pub mod recommend;
pub mod report;

pub use error::{FitError, Result};
pub use models::{AnthropometricProfile, DerivedMetrics, FoodItem, Goal, MealPlan};
pub use report::Report;
