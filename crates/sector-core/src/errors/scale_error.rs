//! Scale definition and scale membership errors.

use super::error_code::{self, SectorErrorCode};

/// Errors raised when a scale definition itself is unusable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScaleConfigError {
    #[error("max_value must be greater than min_value (min {min}, max {max})")]
    InvalidRange { min: f64, max: f64 },

    #[error("step must be greater than 0 (got {step})")]
    InvalidStep { step: f64 },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}

impl SectorErrorCode for ScaleConfigError {
    fn error_code(&self) -> &'static str {
        error_code::SCALE_CONFIG_ERROR
    }
}

/// A single value rejected by a scale.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScaleError {
    #[error("value {value} outside scale [{min},{max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },

    #[error("value {value} does not match step {step} from {min}")]
    StepMismatch { value: f64, min: f64, step: f64 },
}

impl SectorErrorCode for ScaleError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => error_code::OUT_OF_RANGE,
            Self::StepMismatch { .. } => error_code::STEP_MISMATCH,
        }
    }
}
