//! Analysis errors.

use super::error_code::{self, SectorErrorCode};

/// Errors that prevent an analysis, export, or graph projection from running.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("matrix not fully loaded: expected {expected} cells, found {actual}")]
    IncompleteMatrix { expected: usize, actual: usize },

    #[error("project has no variables")]
    NoVariables,

    #[error("percentile must be within [0,100], got {value}")]
    InvalidPercentile { value: f64 },

    #[error("matrix cell references unknown variable {id}")]
    UnknownVariable { id: i64 },

    #[error("min_weight must be >= 0, got {value}")]
    InvalidMinWeight { value: f64 },
}

impl SectorErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::IncompleteMatrix { .. } => error_code::INCOMPLETE_MATRIX,
            Self::NoVariables => error_code::NO_VARIABLES,
            Self::InvalidPercentile { .. } => error_code::INVALID_PERCENTILE,
            Self::UnknownVariable { .. } => error_code::UNKNOWN_VARIABLE,
            Self::InvalidMinWeight { .. } => error_code::INVALID_MIN_WEIGHT,
        }
    }
}
