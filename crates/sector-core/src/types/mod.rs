//! Domain types shared by the analysis engine and the storage collaborator.

pub mod analysis;
pub mod graph;
pub mod matrix;
pub mod project;
pub mod scale;
pub mod variables;

pub use analysis::{AnalysisResult, CutConfig, CutMode, Percentile, Quadrant};
pub use graph::{GraphEdge, GraphNode, ProjectedGraph};
pub use matrix::{InfluenceMatrix, MatrixCell};
pub use project::{
    HeatmapView, MatrixView, NewProject, NewScaleSet, Project, ProjectExport, ProjectSnapshot,
    ProjectStatus, ProjectSummary, ProjectUpdate, ScaleSet, ScaleSetUpdate,
};
pub use scale::Scale;
pub use variables::{VariableRecord, VariableSet};
