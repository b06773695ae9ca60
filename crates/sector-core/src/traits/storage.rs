use crate::errors::SectorResult;
use crate::types::{
    InfluenceMatrix, MatrixCell, NewProject, NewScaleSet, Project, ProjectSnapshot,
    ProjectStatus, ProjectUpdate, Scale, ScaleSet, ScaleSetUpdate, VariableRecord, VariableSet,
};

/// Matrix check run inside a write transaction, against the scale the
/// project will hold when the write commits.
pub type MatrixCheck<'a> = &'a dyn Fn(&InfluenceMatrix, &Scale) -> SectorResult<()>;

/// Persistence collaborator for projects, scales, variables, and matrix cells.
///
/// Implementations must make every `replace_*` appear atomic to concurrent
/// readers, and `snapshot` must read variables, scale, and cells from one
/// consistent state. Matrix writes are positional against the current
/// variable order. Every write that can leave cells under a scale runs the
/// caller's [`MatrixCheck`] inside the same transaction.
pub trait IProjectStorage: Send + Sync {
    // --- Scale sets ---
    fn create_scale_set(&self, scale_set: &NewScaleSet) -> SectorResult<ScaleSet>;
    fn get_scale_set(&self, id: i64) -> SectorResult<ScaleSet>;
    fn list_scale_sets(&self) -> SectorResult<Vec<ScaleSet>>;
    fn update_scale_set(&self, id: i64, update: &ScaleSetUpdate) -> SectorResult<ScaleSet>;
    fn delete_scale_set(&self, id: i64) -> SectorResult<()>;

    // --- Projects ---
    fn create_project(&self, project: &NewProject) -> SectorResult<Project>;
    fn get_project(&self, id: i64) -> SectorResult<Project>;
    fn list_projects(&self) -> SectorResult<Vec<Project>>;
    /// Moving a project with stored cells to another scale runs `check`
    /// on the stored matrix against the target scale first.
    fn update_project(
        &self,
        id: i64,
        update: &ProjectUpdate,
        check: MatrixCheck<'_>,
    ) -> SectorResult<Project>;
    fn delete_project(&self, id: i64) -> SectorResult<()>;

    // --- Reads ---
    fn variable_order(&self, project_id: i64) -> SectorResult<Vec<VariableRecord>>;
    fn scale(&self, project_id: i64) -> SectorResult<Scale>;
    fn matrix_cells(&self, project_id: i64) -> SectorResult<Vec<MatrixCell>>;
    fn status(&self, project_id: i64) -> SectorResult<ProjectStatus>;
    fn snapshot(&self, project_id: i64) -> SectorResult<ProjectSnapshot>;

    // --- Writes ---
    /// Replace the variable list. Existing cells are deleted.
    fn replace_variables(&self, project_id: i64, variables: &VariableSet) -> SectorResult<usize>;
    /// Replace every cell of the matrix against the current variable order.
    fn replace_matrix(
        &self,
        project_id: i64,
        matrix: &InfluenceMatrix,
        check: MatrixCheck<'_>,
    ) -> SectorResult<usize>;
    /// Replace variables and matrix in a single transaction. Without
    /// `overwrite`, a project that already has variables is refused with
    /// `Conflict`.
    fn replace_variables_and_matrix(
        &self,
        project_id: i64,
        variables: &VariableSet,
        matrix: &InfluenceMatrix,
        overwrite: bool,
        check: MatrixCheck<'_>,
    ) -> SectorResult<()>;
}
