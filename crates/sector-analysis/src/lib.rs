//! # sector-analysis
//!
//! Structural (MICMAC-style) analysis over an influence matrix:
//! validation, dependence/motricity aggregation, cut thresholds, quadrant
//! classification, graph projection, and the import/export boundary.
//!
//! Every function outside [`service`] is pure and synchronous; concurrent
//! callers need no coordination as long as each passes its own snapshot.

pub mod aggregation;
pub mod cuts;
pub mod engine;
pub mod graph;
pub mod interchange;
pub mod quadrants;
pub mod service;
pub mod validation;

pub use aggregation::{aggregate, Aggregation};
pub use cuts::{compute_cut, cut};
pub use engine::compute_analysis;
pub use graph::project_graph;
pub use quadrants::classify;
pub use service::ProjectAnalyzer;
pub use validation::{validate_matrix, validate_rows, validate_shape, validate_value};
