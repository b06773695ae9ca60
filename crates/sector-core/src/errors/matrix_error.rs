//! Influence matrix validation errors.
//!
//! Every variant carries the offending coordinate so callers can point
//! at the exact cell.

use super::error_code::{self, SectorErrorCode};
use super::ScaleError;

/// Errors reported by matrix validation, first offending cell in row-major order.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    /// `row` is `None` when the row count is wrong, otherwise the first
    /// row whose length (`found`) differs from `expected`.
    #[error("matrix must be {expected}x{expected}, {}", describe_shape(.row, .found))]
    DimensionMismatch {
        expected: usize,
        found: usize,
        row: Option<usize>,
    },

    #[error("diagonal must be 0, found {value} at ({index},{index})")]
    NonZeroDiagonal { index: usize, value: f64 },

    #[error("value {value} outside scale [{min},{max}] at ({row},{col})")]
    OutOfRange {
        row: usize,
        col: usize,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("value {value} does not match step {step} at ({row},{col})")]
    StepMismatch {
        row: usize,
        col: usize,
        value: f64,
        step: f64,
    },
}

impl MatrixError {
    /// Attach a cell coordinate to a scale rejection.
    pub fn at_cell(row: usize, col: usize, err: ScaleError) -> Self {
        match err {
            ScaleError::OutOfRange { value, min, max } => Self::OutOfRange {
                row,
                col,
                value,
                min,
                max,
            },
            ScaleError::StepMismatch { value, step, .. } => Self::StepMismatch {
                row,
                col,
                value,
                step,
            },
        }
    }

    /// The offending `(row, col)`, if the error points at a single cell.
    pub fn cell(&self) -> Option<(usize, usize)> {
        match self {
            Self::NonZeroDiagonal { index, .. } => Some((*index, *index)),
            Self::OutOfRange { row, col, .. } | Self::StepMismatch { row, col, .. } => {
                Some((*row, *col))
            }
            Self::DimensionMismatch { .. } => None,
        }
    }
}

fn describe_shape(row: &Option<usize>, found: &usize) -> String {
    match row {
        None => format!("got {found} rows"),
        Some(row) => format!("row {row} has {found} columns"),
    }
}

impl SectorErrorCode for MatrixError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DimensionMismatch { .. } => error_code::DIMENSION_MISMATCH,
            Self::NonZeroDiagonal { .. } => error_code::NON_ZERO_DIAGONAL,
            Self::OutOfRange { .. } => error_code::OUT_OF_RANGE,
            Self::StepMismatch { .. } => error_code::STEP_MISMATCH,
        }
    }
}
