//! ProjectStore: owns the DatabaseManager, implements IProjectStorage,
//! seeds the default scale at open.

use std::path::Path;

use rusqlite::Connection;

use sector_core::config::SectorConfig;
use sector_core::errors::{MatrixError, SectorResult, StorageError};
use sector_core::traits::{IProjectStorage, MatrixCheck};
use sector_core::types::{
    InfluenceMatrix, MatrixCell, NewProject, NewScaleSet, Project, ProjectSnapshot,
    ProjectStatus, ProjectUpdate, Scale, ScaleSet, ScaleSetUpdate, VariableRecord, VariableSet,
};

use crate::connection::writer::{with_immediate_transaction, with_read_transaction};
use crate::connection::DatabaseManager;
use crate::queries::{cells, projects, scale_sets, variables};

const PROJECT: &str = "project";
const SCALE_SET: &str = "scale set";

/// SQLite-backed project storage.
pub struct ProjectStore {
    db: DatabaseManager,
}

impl ProjectStore {
    /// Open a database file and seed the configured default scale.
    pub fn open(path: &Path, config: &SectorConfig) -> SectorResult<Self> {
        let db = DatabaseManager::open(path, config.database.effective_read_pool_size())?;
        let store = Self { db };
        store.seed_default_scale(&config.default_scale.to_new_scale_set()?)?;
        Ok(store)
    }

    /// Open the database named by `database.path`.
    pub fn from_config(config: &SectorConfig) -> SectorResult<Self> {
        Self::open(&config.database.effective_path(), config)
    }

    /// In-memory database with the compiled-in default scale (for testing).
    pub fn open_in_memory() -> SectorResult<Self> {
        let store = Self {
            db: DatabaseManager::open_in_memory()?,
        };
        store.seed_default_scale(&SectorConfig::default().default_scale.to_new_scale_set()?)?;
        Ok(store)
    }

    pub fn database(&self) -> &DatabaseManager {
        &self.db
    }

    /// Insert `seed` unless a scale set with the same name exists. Idempotent.
    pub fn seed_default_scale(&self, seed: &NewScaleSet) -> SectorResult<ScaleSet> {
        self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| {
                if let Some(existing) = scale_sets::find_by_name(tx, &seed.name)? {
                    return Ok(existing);
                }
                let id = scale_sets::insert(tx, seed)?;
                tracing::info!(id, name = %seed.name, "seeded default scale");
                Ok(ScaleSet {
                    id,
                    name: seed.name.clone(),
                    scale: seed.scale.clone(),
                })
            })
        })
    }

    /// The seeded default scale set, if it still exists.
    pub fn default_scale_set(&self, name: &str) -> SectorResult<Option<ScaleSet>> {
        self.db
            .with_reader(|conn| Ok(scale_sets::find_by_name(conn, name)?))
    }
}

fn require_project(conn: &Connection, id: i64) -> Result<Project, StorageError> {
    projects::get(conn, id)?.ok_or(StorageError::NotFound { entity: PROJECT, id })
}

fn require_scale_set(conn: &Connection, id: i64) -> Result<ScaleSet, StorageError> {
    scale_sets::get(conn, id)?.ok_or(StorageError::NotFound {
        entity: SCALE_SET,
        id,
    })
}

fn dimension_mismatch(expected: usize, found: usize) -> MatrixError {
    MatrixError::DimensionMismatch {
        expected,
        found,
        row: None,
    }
}

/// Delete cells then variables, insert `names` in order. Returns the new records.
fn write_variables(
    conn: &Connection,
    project_id: i64,
    names: &VariableSet,
) -> Result<Vec<VariableRecord>, StorageError> {
    cells::delete_for_project(conn, project_id)?;
    variables::delete_for_project(conn, project_id)?;
    let mut written = Vec::with_capacity(names.len());
    for name in names.iter() {
        let id = variables::insert(conn, project_id, name)?;
        written.push(VariableRecord::new(id, name));
    }
    Ok(written)
}

fn write_matrix(
    conn: &Connection,
    project_id: i64,
    order: &[VariableRecord],
    matrix: &InfluenceMatrix,
) -> SectorResult<usize> {
    let new_cells = matrix.to_cells(order)?;
    cells::delete_for_project(conn, project_id)?;
    Ok(cells::insert_all(conn, project_id, &new_cells)?)
}

impl IProjectStorage for ProjectStore {
    fn create_scale_set(&self, scale_set: &NewScaleSet) -> SectorResult<ScaleSet> {
        self.db.with_writer(|conn| {
            let id = scale_sets::insert(conn, scale_set)?;
            Ok(ScaleSet {
                id,
                name: scale_set.name.clone(),
                scale: scale_set.scale.clone(),
            })
        })
    }

    fn get_scale_set(&self, id: i64) -> SectorResult<ScaleSet> {
        self.db.with_reader(|conn| Ok(require_scale_set(conn, id)?))
    }

    fn list_scale_sets(&self) -> SectorResult<Vec<ScaleSet>> {
        self.db.with_reader(|conn| Ok(scale_sets::list(conn)?))
    }

    fn update_scale_set(&self, id: i64, update: &ScaleSetUpdate) -> SectorResult<ScaleSet> {
        self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| {
                let current = require_scale_set(tx, id)?;
                let updated = update.apply(&current)?;
                if current.scale.bounds_differ(&updated.scale)
                    && scale_sets::count_dependent_cells(tx, id)? > 0
                {
                    return Err(StorageError::Conflict {
                        reason: format!(
                            "scale set {id} is used by a project with matrix data; bounds cannot change"
                        ),
                    }
                    .into());
                }
                scale_sets::update(tx, &updated)?;
                Ok(updated)
            })
        })
    }

    fn delete_scale_set(&self, id: i64) -> SectorResult<()> {
        self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| {
                require_scale_set(tx, id)?;
                let users = scale_sets::count_projects(tx, id)?;
                if users > 0 {
                    return Err(StorageError::Conflict {
                        reason: format!("scale set {id} is used by {users} project(s)"),
                    }
                    .into());
                }
                scale_sets::delete(tx, id)?;
                Ok(())
            })
        })
    }

    fn create_project(&self, project: &NewProject) -> SectorResult<Project> {
        self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| {
                require_scale_set(tx, project.scale_set_id)?;
                let id = projects::insert(tx, project)?;
                Ok(Project {
                    id,
                    name: project.name.clone(),
                    description: project.description.clone(),
                    scale_set_id: project.scale_set_id,
                })
            })
        })
    }

    fn get_project(&self, id: i64) -> SectorResult<Project> {
        self.db.with_reader(|conn| Ok(require_project(conn, id)?))
    }

    fn list_projects(&self) -> SectorResult<Vec<Project>> {
        self.db.with_reader(|conn| Ok(projects::list(conn)?))
    }

    fn update_project(
        &self,
        id: i64,
        update: &ProjectUpdate,
        check: MatrixCheck<'_>,
    ) -> SectorResult<Project> {
        self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| {
                let mut project = require_project(tx, id)?;
                if let Some(scale_set_id) = update.scale_set_id {
                    let target = require_scale_set(tx, scale_set_id)?;
                    if scale_set_id != project.scale_set_id && cells::count(tx, id)? > 0 {
                        let stored = InfluenceMatrix::from_cells(
                            &variables::list(tx, id)?,
                            &cells::list(tx, id)?,
                        )?;
                        check(&stored, &target.scale)?;
                    }
                    project.scale_set_id = scale_set_id;
                }
                if let Some(name) = &update.name {
                    project.name = name.clone();
                }
                if let Some(description) = &update.description {
                    project.description = Some(description.clone());
                }
                projects::update(tx, &project)?;
                Ok(project)
            })
        })
    }

    fn delete_project(&self, id: i64) -> SectorResult<()> {
        let _span = sector_core::storage_span!("delete_project", id).entered();
        self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| {
                require_project(tx, id)?;
                cells::delete_for_project(tx, id)?;
                variables::delete_for_project(tx, id)?;
                projects::delete(tx, id)?;
                tracing::debug!(project_id = id, "project deleted");
                Ok(())
            })
        })
    }

    fn variable_order(&self, project_id: i64) -> SectorResult<Vec<VariableRecord>> {
        self.db.with_reader(|conn| {
            with_read_transaction(conn, |conn| {
                require_project(conn, project_id)?;
                Ok(variables::list(conn, project_id)?)
            })
        })
    }

    fn scale(&self, project_id: i64) -> SectorResult<Scale> {
        self.db.with_reader(|conn| {
            with_read_transaction(conn, |conn| {
                let project = require_project(conn, project_id)?;
                Ok(require_scale_set(conn, project.scale_set_id)?.scale)
            })
        })
    }

    fn matrix_cells(&self, project_id: i64) -> SectorResult<Vec<MatrixCell>> {
        self.db.with_reader(|conn| {
            with_read_transaction(conn, |conn| {
                require_project(conn, project_id)?;
                Ok(cells::list(conn, project_id)?)
            })
        })
    }

    fn status(&self, project_id: i64) -> SectorResult<ProjectStatus> {
        self.db.with_reader(|conn| {
            with_read_transaction(conn, |conn| {
                require_project(conn, project_id)?;
                let n = variables::count(conn, project_id)?;
                let cell_count = cells::count(conn, project_id)?;
                Ok(ProjectStatus::new(project_id, n, cell_count))
            })
        })
    }

    fn snapshot(&self, project_id: i64) -> SectorResult<ProjectSnapshot> {
        self.db.with_reader(|conn| {
            with_read_transaction(conn, |conn| {
                let project = require_project(conn, project_id)?;
                let scale = require_scale_set(conn, project.scale_set_id)?.scale;
                let variables = variables::list(conn, project_id)?;
                let cells = cells::list(conn, project_id)?;
                Ok(ProjectSnapshot {
                    project,
                    scale,
                    variables,
                    cells,
                })
            })
        })
    }

    fn replace_variables(&self, project_id: i64, names: &VariableSet) -> SectorResult<usize> {
        let _span = sector_core::storage_span!("replace_variables", project_id).entered();
        self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| {
                require_project(tx, project_id)?;
                let written = write_variables(tx, project_id, names)?;
                tracing::debug!(project_id, count = written.len(), "variables replaced");
                Ok(written.len())
            })
        })
    }

    fn replace_matrix(
        &self,
        project_id: i64,
        matrix: &InfluenceMatrix,
        check: MatrixCheck<'_>,
    ) -> SectorResult<usize> {
        let _span = sector_core::storage_span!("replace_matrix", project_id).entered();
        self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| {
                let project = require_project(tx, project_id)?;
                let order = variables::list(tx, project_id)?;
                if order.len() != matrix.size() {
                    return Err(dimension_mismatch(order.len(), matrix.size()).into());
                }
                check(matrix, &require_scale_set(tx, project.scale_set_id)?.scale)?;
                let written = write_matrix(tx, project_id, &order, matrix)?;
                tracing::debug!(project_id, cells = written, "matrix replaced");
                Ok(written)
            })
        })
    }

    fn replace_variables_and_matrix(
        &self,
        project_id: i64,
        names: &VariableSet,
        matrix: &InfluenceMatrix,
        overwrite: bool,
        check: MatrixCheck<'_>,
    ) -> SectorResult<()> {
        let _span =
            sector_core::storage_span!("replace_variables_and_matrix", project_id).entered();
        if names.len() != matrix.size() {
            return Err(dimension_mismatch(names.len(), matrix.size()).into());
        }
        self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| {
                let project = require_project(tx, project_id)?;
                check(matrix, &require_scale_set(tx, project.scale_set_id)?.scale)?;
                if !overwrite && variables::count(tx, project_id)? > 0 {
                    return Err(StorageError::Conflict {
                        reason: format!(
                            "project {project_id} already has variables; import with replace to overwrite"
                        ),
                    }
                    .into());
                }
                let order = write_variables(tx, project_id, names)?;
                let written = write_matrix(tx, project_id, &order, matrix)?;
                tracing::debug!(
                    project_id,
                    variables = order.len(),
                    cells = written,
                    "variables and matrix replaced"
                );
                Ok(())
            })
        })
    }
}
