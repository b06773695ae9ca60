//! Seams between the analysis core and its collaborators.

pub mod storage;

pub use storage::{IProjectStorage, MatrixCheck};
