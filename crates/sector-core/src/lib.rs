//! # sector-core
//!
//! Foundation crate for the Sector structural analysis engine.
//! Defines the matrix, scale, and classification types, the error taxonomy,
//! configuration, tracing setup, and the storage collaborator trait.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::SectorConfig;
pub use errors::{SectorError, SectorResult};
pub use types::{
    AnalysisResult, CutConfig, CutMode, InfluenceMatrix, Percentile, Quadrant, Scale,
    VariableSet,
};
