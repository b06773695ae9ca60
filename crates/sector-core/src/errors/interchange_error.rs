//! Import/export encoding errors.

use super::error_code::{self, SectorErrorCode};

/// Errors raised while decoding variables/matrix CSV or JSON documents.
/// Row numbers are 1-based file lines, header included.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InterchangeError {
    #[error("variables.csv must have at least the 'name' column")]
    MissingNameColumn,

    #[error("variables.csv has no valid names")]
    NoVariables,

    #[error("matrix.csv invalid: {reason}")]
    InvalidMatrix { reason: String },

    #[error("matrix.csv column headers must match variables.csv (same order)")]
    HeaderMismatch,

    #[error("row header '{found}' does not match '{expected}' on row {row}")]
    RowHeaderMismatch {
        row: usize,
        found: String,
        expected: String,
    },

    #[error("row {row} has {found} values, expected {expected}")]
    RowLength {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("non-numeric values on row {row}")]
    NonNumeric { row: usize },

    #[error("CSV error: {message}")]
    Csv { message: String },

    #[error("JSON error: {message}")]
    Json { message: String },
}

impl SectorErrorCode for InterchangeError {
    fn error_code(&self) -> &'static str {
        error_code::INTERCHANGE_ERROR
    }
}
