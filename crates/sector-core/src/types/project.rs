//! Project and scale-set records exchanged with the storage collaborator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{InfluenceMatrix, MatrixCell, Scale, VariableRecord};
use crate::errors::ScaleConfigError;

/// A named, persisted scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleSet {
    pub id: i64,
    pub name: String,
    pub scale: Scale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewScaleSet {
    pub name: String,
    pub scale: Scale,
}

/// Partial update of a scale set. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleSetUpdate {
    pub name: Option<String>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub step: Option<f64>,
    pub labels: Option<BTreeMap<String, String>>,
}

impl ScaleSetUpdate {
    /// Merge onto `current`, re-validating the resulting scale.
    pub fn apply(&self, current: &ScaleSet) -> Result<ScaleSet, ScaleConfigError> {
        let old = &current.scale;
        let labels = match &self.labels {
            Some(labels) => Some(labels.clone()),
            None => old.labels().cloned(),
        };
        let scale = Scale::new(
            self.min_value.unwrap_or(old.min()),
            self.max_value.unwrap_or(old.max()),
            self.step.unwrap_or(old.step()),
        )?
        .with_labels(labels);
        Ok(ScaleSet {
            id: current.id,
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            scale,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub scale_set_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub scale_set_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub scale_set_id: Option<i64>,
}

/// Persistence summary for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStatus {
    pub project_id: i64,
    pub variables_count: usize,
    pub matrix_cells: usize,
    pub matrix_complete: bool,
}

impl ProjectStatus {
    pub fn new(project_id: i64, variables_count: usize, matrix_cells: usize) -> Self {
        Self {
            project_id,
            variables_count,
            matrix_cells,
            matrix_complete: variables_count > 0 && matrix_cells == variables_count * variables_count,
        }
    }
}

/// Everything a read-side operation needs, read in one consistent pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSnapshot {
    pub project: Project,
    pub scale: Scale,
    pub variables: Vec<VariableRecord>,
    pub cells: Vec<MatrixCell>,
}

impl ProjectSnapshot {
    pub fn names(&self) -> Vec<String> {
        self.variables.iter().map(|v| v.name.clone()).collect()
    }
}

/// Stored variables plus the matrix, when it is complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixView {
    pub variables: Vec<String>,
    pub matrix: Option<InfluenceMatrix>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapView {
    pub variables: Vec<String>,
    pub scale: Scale,
    pub matrix: InfluenceMatrix,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// JSON export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectExport {
    pub project: ProjectSummary,
    pub scale_set_id: i64,
    pub variables: Vec<String>,
    pub matrix: InfluenceMatrix,
}
