//! Span definitions per operation: analysis, validation, graph, storage.
//!
//! Each span carries the project and operation metadata via the `tracing` crate.
//! Callers must depend on `tracing` themselves.

/// Create an analysis span.
#[macro_export]
macro_rules! analysis_span {
    ($project_id:expr, $mode:expr) => {
        ::tracing::info_span!("sector.analysis", project_id = $project_id, mode = %$mode)
    };
}

/// Create a matrix validation span.
#[macro_export]
macro_rules! validation_span {
    ($size:expr) => {
        ::tracing::debug_span!("sector.validation", size = $size)
    };
}

/// Create a graph projection span.
#[macro_export]
macro_rules! graph_span {
    ($project_id:expr, $directed:expr) => {
        ::tracing::info_span!("sector.graph", project_id = $project_id, directed = $directed)
    };
}

/// Create a storage write span.
#[macro_export]
macro_rules! storage_span {
    ($operation:expr, $project_id:expr) => {
        ::tracing::debug_span!("sector.storage", operation = $operation, project_id = $project_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ANALYSIS: &str = "sector.analysis";
    pub const VALIDATION: &str = "sector.validation";
    pub const GRAPH: &str = "sector.graph";
    pub const STORAGE: &str = "sector.storage";
}
