//! Top-level error aggregating every subsystem error.

use super::error_code::SectorErrorCode;
use super::{
    AnalysisError, ConfigError, InterchangeError, MatrixError, ScaleConfigError, ScaleError,
    StorageError,
};

/// Errors surfaced by service-level operations.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum SectorError {
    #[error("Scale config error: {0}")]
    ScaleConfig(#[from] ScaleConfigError),

    #[error("Scale error: {0}")]
    Scale(#[from] ScaleError),

    #[error("Matrix error: {0}")]
    Matrix(#[from] MatrixError),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Interchange error: {0}")]
    Interchange(#[from] InterchangeError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SectorErrorCode for SectorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ScaleConfig(e) => e.error_code(),
            Self::Scale(e) => e.error_code(),
            Self::Matrix(e) => e.error_code(),
            Self::Analysis(e) => e.error_code(),
            Self::Interchange(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Result alias used across the workspace.
pub type SectorResult<T> = Result<T, SectorError>;
