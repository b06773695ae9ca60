//! SectorErrorCode trait for boundary conversion.

/// Trait for converting Sector errors to stable error code strings.
/// Every error enum implements this so a transport layer can map
/// failures without matching on variants.
pub trait SectorErrorCode {
    /// Returns the error code string (e.g., "OUT_OF_RANGE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const SCALE_CONFIG_ERROR: &str = "SCALE_CONFIG_ERROR";
pub const OUT_OF_RANGE: &str = "OUT_OF_RANGE";
pub const STEP_MISMATCH: &str = "STEP_MISMATCH";
pub const NON_ZERO_DIAGONAL: &str = "NON_ZERO_DIAGONAL";
pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
pub const INCOMPLETE_MATRIX: &str = "INCOMPLETE_MATRIX";
pub const NO_VARIABLES: &str = "NO_VARIABLES";
pub const INVALID_PERCENTILE: &str = "INVALID_PERCENTILE";
pub const UNKNOWN_VARIABLE: &str = "UNKNOWN_VARIABLE";
pub const INVALID_MIN_WEIGHT: &str = "INVALID_MIN_WEIGHT";
pub const INTERCHANGE_ERROR: &str = "INTERCHANGE_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const CONFLICT: &str = "CONFLICT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
