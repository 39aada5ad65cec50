use thiserror::Error;

use crate::params::Field;

#[derive(Error, Debug)]
pub enum SccError {
    #[error("Scenario store is full: at most {capacity} scenarios can be open")]
    CapacityExceeded { capacity: usize },

    #[error("Scenario index out of range: index={index}, len={len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Missing parameter: {0}")]
    MissingParameter(Field),

    #[error("Sweep step does not advance over its range: {0}")]
    InvalidStep(Field),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SccResult<T> = Result<T, SccError>;
