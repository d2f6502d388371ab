use thiserror::Error;

use crate::models::ParseChoiceError;

#[derive(Debug, Error)]
pub enum FitError {
    #[error("Weight and height are required")]
    MissingMeasurements,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    InvalidChoice(#[from] ParseChoiceError),
}

pub type Result<T> = std::result::Result<T, FitError>;
