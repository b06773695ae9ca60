//! Project-level façade wiring the storage collaborator to the pure core.
//!
//! Every write hands the storage a scale check that runs inside the write
//! transaction, so validation and commit see the same scale. Every read goes
//! through one storage snapshot and rebuilds the dense matrix by id-to-position
//! remapping, refusing to run on anything short of `N^2` cells.

use sector_core::config::AnalysisConfig;
use sector_core::errors::{AnalysisError, SectorResult};
use sector_core::traits::IProjectStorage;
use sector_core::types::{
    AnalysisResult, CutConfig, HeatmapView, InfluenceMatrix, MatrixView, Project,
    ProjectExport, ProjectSnapshot, ProjectStatus, ProjectSummary, ProjectUpdate,
    ProjectedGraph, Scale, VariableSet,
};

use crate::engine::compute_analysis;
use crate::graph::project_graph;
use crate::interchange::{self, parse_import};
use crate::validation::{validate_matrix, validate_shape};

/// Analysis operations for persisted projects.
pub struct ProjectAnalyzer<S: IProjectStorage> {
    store: S,
    defaults: CutConfig,
}

impl<S: IProjectStorage> ProjectAnalyzer<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            defaults: CutConfig::default(),
        }
    }

    /// Use configured cut settings when a request carries none.
    pub fn with_defaults(store: S, config: &AnalysisConfig) -> Self {
        Self {
            store,
            defaults: config.cut_config(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the variable list. Old cells are discarded with the old variables.
    pub fn set_variables<I, T>(&self, project_id: i64, names: I) -> SectorResult<usize>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let variables = VariableSet::from_raw(names)?;
        let count = self.store.replace_variables(project_id, &variables)?;
        tracing::debug!(project_id, count, "variables replaced");
        Ok(count)
    }

    /// Validate nested rows against the current variables and scale, then store them.
    pub fn set_matrix(&self, project_id: i64, rows: Vec<Vec<f64>>) -> SectorResult<usize> {
        let variables = self.store.variable_order(project_id)?;
        if variables.is_empty() {
            tracing::warn!(project_id, "matrix refused: project has no variables");
            return Err(AnalysisError::NoVariables.into());
        }
        if let Err(e) = validate_shape(&rows, variables.len()) {
            tracing::warn!(project_id, error = %e, "matrix refused");
            return Err(e.into());
        }
        let matrix = InfluenceMatrix::from_rows(rows)?;
        self.store
            .replace_matrix(project_id, &matrix, &scale_check)
            .inspect_err(|e| tracing::warn!(project_id, error = %e, "matrix refused"))
    }

    /// Stored variables, plus the matrix when all `N^2` cells are present.
    pub fn matrix(&self, project_id: i64) -> SectorResult<MatrixView> {
        let snapshot = self.store.snapshot(project_id)?;
        let matrix = if !snapshot.variables.is_empty()
            && snapshot.cells.len() == snapshot.variables.len() * snapshot.variables.len()
        {
            Some(InfluenceMatrix::from_cells(&snapshot.variables, &snapshot.cells)?)
        } else {
            None
        };
        Ok(MatrixView {
            variables: snapshot.names(),
            matrix,
        })
    }

    pub fn status(&self, project_id: i64) -> SectorResult<ProjectStatus> {
        self.store.status(project_id)
    }

    /// Run the analysis. `config` falls back to the analyzer defaults.
    pub fn compute(
        &self,
        project_id: i64,
        config: Option<&CutConfig>,
    ) -> SectorResult<AnalysisResult> {
        let config = config.unwrap_or(&self.defaults);
        let _span = sector_core::analysis_span!(project_id, config.cuts).entered();

        let snapshot = self.store.snapshot(project_id)?;
        let matrix = complete_matrix(&snapshot)?;
        compute_analysis(&snapshot.names(), &matrix, config)
    }

    /// Node/edge projection. `min_weight` must be a finite, non-negative number.
    pub fn graph(
        &self,
        project_id: i64,
        min_weight: f64,
        directed: bool,
    ) -> SectorResult<ProjectedGraph> {
        let _span = sector_core::graph_span!(project_id, directed).entered();
        if !min_weight.is_finite() || min_weight < 0.0 {
            return Err(AnalysisError::InvalidMinWeight { value: min_weight }.into());
        }

        let snapshot = self.store.snapshot(project_id)?;
        let matrix = complete_matrix(&snapshot)?;
        let graph = project_graph(&matrix, &snapshot.names(), min_weight, directed);
        tracing::debug!(
            edges = graph.edges.len(),
            total_weight = graph.total_weight(),
            "graph projected"
        );
        Ok(graph)
    }

    pub fn heatmap(&self, project_id: i64) -> SectorResult<HeatmapView> {
        let snapshot = self.store.snapshot(project_id)?;
        let matrix = complete_matrix(&snapshot)?;
        Ok(HeatmapView {
            variables: snapshot.names(),
            scale: snapshot.scale,
            matrix,
        })
    }

    pub fn export(&self, project_id: i64) -> SectorResult<ProjectExport> {
        let snapshot = self.store.snapshot(project_id)?;
        let matrix = complete_matrix(&snapshot)?;
        let variables = snapshot.names();
        let project = snapshot.project;
        Ok(ProjectExport {
            project: ProjectSummary {
                id: project.id,
                name: project.name,
                description: project.description,
            },
            scale_set_id: project.scale_set_id,
            variables,
            matrix,
        })
    }

    pub fn export_json(&self, project_id: i64) -> SectorResult<String> {
        Ok(interchange::export_json(&self.export(project_id)?)?)
    }

    pub fn export_variables_csv(&self, project_id: i64) -> SectorResult<String> {
        let variables = self.store.variable_order(project_id)?;
        if variables.is_empty() {
            return Err(AnalysisError::NoVariables.into());
        }
        Ok(interchange::variables_csv(&variables)?)
    }

    pub fn export_matrix_csv(&self, project_id: i64) -> SectorResult<String> {
        let snapshot = self.store.snapshot(project_id)?;
        let matrix = complete_matrix(&snapshot)?;
        Ok(interchange::matrix_csv(&snapshot.names(), &matrix)?)
    }

    /// Import a `variables.csv` / `matrix.csv` pair.
    ///
    /// The matrix is checked against the project scale before anything is
    /// written. Without `replace`, a project that already has variables is
    /// left untouched and the import is refused.
    pub fn import_csv(
        &self,
        project_id: i64,
        variables_csv: &str,
        matrix_csv: &str,
        replace: bool,
    ) -> SectorResult<usize> {
        let bundle = parse_import(variables_csv, matrix_csv)?;
        let n = bundle.variables.len();
        self.store
            .replace_variables_and_matrix(
                project_id,
                &bundle.variables,
                &bundle.matrix,
                replace,
                &scale_check,
            )
            .inspect_err(|e| tracing::warn!(project_id, error = %e, "import refused"))?;
        tracing::info!(project_id, variables = n, "csv import committed");
        Ok(n)
    }

    /// Update a project. Moving to another scale re-validates a complete
    /// stored matrix against the new scale first.
    pub fn update_project(&self, project_id: i64, update: &ProjectUpdate) -> SectorResult<Project> {
        self.store
            .update_project(project_id, update, &scale_check)
            .inspect_err(|e| tracing::warn!(project_id, error = %e, "project update refused"))
    }
}

/// Full matrix validation against whatever scale the storage reads inside
/// its write transaction.
fn scale_check(matrix: &InfluenceMatrix, scale: &Scale) -> SectorResult<()> {
    Ok(validate_matrix(matrix, matrix.size(), scale)?)
}

/// Rebuild the dense matrix, refusing partial data.
fn complete_matrix(snapshot: &ProjectSnapshot) -> SectorResult<InfluenceMatrix> {
    if snapshot.variables.is_empty() {
        return Err(AnalysisError::NoVariables.into());
    }
    Ok(InfluenceMatrix::from_cells(
        &snapshot.variables,
        &snapshot.cells,
    )?)
}
