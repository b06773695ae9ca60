//! Error handling for Sector.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;
pub mod interchange_error;
pub mod matrix_error;
pub mod scale_error;
pub mod sector_error;
pub mod storage_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use error_code::SectorErrorCode;
pub use interchange_error::InterchangeError;
pub use matrix_error::MatrixError;
pub use scale_error::{ScaleConfigError, ScaleError};
pub use sector_error::{SectorError, SectorResult};
pub use storage_error::StorageError;
