//! Another writer committing between the analyzer's reads and its write.

use std::sync::Mutex;

use sector_analysis::{validate_matrix, ProjectAnalyzer};
use sector_core::errors::{SectorError, SectorErrorCode, SectorResult};
use sector_core::traits::{IProjectStorage, MatrixCheck};
use sector_core::types::{
    InfluenceMatrix, MatrixCell, NewProject, NewScaleSet, Project, ProjectSnapshot,
    ProjectStatus, ProjectUpdate, Scale, ScaleSet, ScaleSetUpdate, VariableRecord, VariableSet,
};
use sector_storage::ProjectStore;

type Interleaved = Box<dyn FnOnce(&ProjectStore) + Send>;

/// Delegates to a real store, running one queued write of its own right
/// before the next matrix-bearing write arrives.
struct InterleavingStore {
    inner: ProjectStore,
    pending: Mutex<Option<Interleaved>>,
}

impl InterleavingStore {
    fn new() -> Self {
        Self {
            inner: ProjectStore::open_in_memory().unwrap(),
            pending: Mutex::new(None),
        }
    }

    fn before_next_write(&self, write: impl FnOnce(&ProjectStore) + Send + 'static) {
        *self.pending.lock().unwrap() = Some(Box::new(write));
    }

    fn run_pending(&self) {
        let pending = self.pending.lock().unwrap().take();
        if let Some(write) = pending {
            write(&self.inner);
        }
    }
}

impl IProjectStorage for InterleavingStore {
    fn create_scale_set(&self, scale_set: &NewScaleSet) -> SectorResult<ScaleSet> {
        self.inner.create_scale_set(scale_set)
    }
    fn get_scale_set(&self, id: i64) -> SectorResult<ScaleSet> {
        self.inner.get_scale_set(id)
    }
    fn list_scale_sets(&self) -> SectorResult<Vec<ScaleSet>> {
        self.inner.list_scale_sets()
    }
    fn update_scale_set(&self, id: i64, update: &ScaleSetUpdate) -> SectorResult<ScaleSet> {
        self.inner.update_scale_set(id, update)
    }
    fn delete_scale_set(&self, id: i64) -> SectorResult<()> {
        self.inner.delete_scale_set(id)
    }
    fn create_project(&self, project: &NewProject) -> SectorResult<Project> {
        self.inner.create_project(project)
    }
    fn get_project(&self, id: i64) -> SectorResult<Project> {
        self.inner.get_project(id)
    }
    fn list_projects(&self) -> SectorResult<Vec<Project>> {
        self.inner.list_projects()
    }
    fn update_project(
        &self,
        id: i64,
        update: &ProjectUpdate,
        check: MatrixCheck<'_>,
    ) -> SectorResult<Project> {
        self.run_pending();
        self.inner.update_project(id, update, check)
    }
    fn delete_project(&self, id: i64) -> SectorResult<()> {
        self.inner.delete_project(id)
    }
    fn variable_order(&self, project_id: i64) -> SectorResult<Vec<VariableRecord>> {
        self.inner.variable_order(project_id)
    }
    fn scale(&self, project_id: i64) -> SectorResult<Scale> {
        self.inner.scale(project_id)
    }
    fn matrix_cells(&self, project_id: i64) -> SectorResult<Vec<MatrixCell>> {
        self.inner.matrix_cells(project_id)
    }
    fn status(&self, project_id: i64) -> SectorResult<ProjectStatus> {
        self.inner.status(project_id)
    }
    fn snapshot(&self, project_id: i64) -> SectorResult<ProjectSnapshot> {
        self.inner.snapshot(project_id)
    }
    fn replace_variables(&self, project_id: i64, variables: &VariableSet) -> SectorResult<usize> {
        self.inner.replace_variables(project_id, variables)
    }
    fn replace_matrix(
        &self,
        project_id: i64,
        matrix: &InfluenceMatrix,
        check: MatrixCheck<'_>,
    ) -> SectorResult<usize> {
        self.run_pending();
        self.inner.replace_matrix(project_id, matrix, check)
    }
    fn replace_variables_and_matrix(
        &self,
        project_id: i64,
        variables: &VariableSet,
        matrix: &InfluenceMatrix,
        overwrite: bool,
        check: MatrixCheck<'_>,
    ) -> SectorResult<()> {
        self.run_pending();
        self.inner
            .replace_variables_and_matrix(project_id, variables, matrix, overwrite, check)
    }
}

fn fits_scale(matrix: &InfluenceMatrix, scale: &Scale) -> SectorResult<()> {
    Ok(validate_matrix(matrix, matrix.size(), scale)?)
}

fn code(err: SectorError) -> &'static str {
    err.error_code()
}

/// Analyzer over a fresh project on the default 0-3 scale.
fn analyzer() -> (ProjectAnalyzer<InterleavingStore>, i64, i64) {
    let store = InterleavingStore::new();
    let scale_set_id = store.list_scale_sets().unwrap()[0].id;
    let pid = store
        .create_project(&NewProject {
            name: "Cuenca".into(),
            description: None,
            scale_set_id,
        })
        .unwrap()
        .id;
    (ProjectAnalyzer::new(store), pid, scale_set_id)
}

fn shrink_to_one(scale_set_id: i64) -> impl FnOnce(&ProjectStore) + Send + 'static {
    move |store: &ProjectStore| {
        store
            .update_scale_set(
                scale_set_id,
                &ScaleSetUpdate {
                    max_value: Some(1.0),
                    ..Default::default()
                },
            )
            .unwrap();
    }
}

#[test]
fn matrix_write_sees_scale_shrunk_after_read() {
    let (a, pid, scale_set_id) = analyzer();
    a.set_variables(pid, ["A", "B"]).unwrap();
    a.store().before_next_write(shrink_to_one(scale_set_id));

    let err = a
        .set_matrix(pid, vec![vec![0.0, 3.0], vec![1.0, 0.0]])
        .unwrap_err();
    assert_eq!(code(err), "OUT_OF_RANGE");
    assert_eq!(a.status(pid).unwrap().matrix_cells, 0);
    assert_eq!(a.store().scale(pid).unwrap().max(), 1.0);
}

#[test]
fn import_sees_scale_shrunk_after_parse() {
    let (a, pid, scale_set_id) = analyzer();
    a.store().before_next_write(shrink_to_one(scale_set_id));

    let err = a
        .import_csv(pid, "name\nA\nB\n", ",A,B\nA,0,3\nB,1,0\n", true)
        .unwrap_err();
    assert_eq!(code(err), "OUT_OF_RANGE");
    assert_eq!(a.status(pid).unwrap().variables_count, 0);
}

#[test]
fn import_without_replace_sees_variables_added_after_parse() {
    let (a, pid, _) = analyzer();
    a.store().before_next_write(move |store: &ProjectStore| {
        store
            .replace_variables(pid, &VariableSet::from_raw(["Z"]).unwrap())
            .unwrap();
    });

    let err = a
        .import_csv(pid, "name\nA\nB\n", ",A,B\nA,0,1\nB,1,0\n", false)
        .unwrap_err();
    assert_eq!(code(err), "CONFLICT");
    assert_eq!(a.matrix(pid).unwrap().variables, vec!["Z"]);
}

#[test]
fn scale_move_sees_matrix_written_after_request() {
    let (a, pid, _) = analyzer();
    a.set_variables(pid, ["A", "B"]).unwrap();
    let narrow = a
        .store()
        .create_scale_set(&NewScaleSet {
            name: "0-1".into(),
            scale: Scale::new(0.0, 1.0, 1.0).unwrap(),
        })
        .unwrap();
    a.store().before_next_write(move |store: &ProjectStore| {
        let m = InfluenceMatrix::from_rows(vec![vec![0.0, 3.0], vec![1.0, 0.0]]).unwrap();
        store.replace_matrix(pid, &m, &fits_scale).unwrap();
    });

    let err = a
        .update_project(
            pid,
            &ProjectUpdate {
                scale_set_id: Some(narrow.id),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(code(err), "OUT_OF_RANGE");
    assert_ne!(a.store().get_project(pid).unwrap().scale_set_id, narrow.id);
    assert_eq!(a.status(pid).unwrap().matrix_cells, 4);
}
