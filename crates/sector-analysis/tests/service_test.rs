//! ProjectAnalyzer wired to an in-memory ProjectStore.

use sector_analysis::ProjectAnalyzer;
use sector_core::config::AnalysisConfig;
use sector_core::errors::{SectorError, SectorErrorCode};
use sector_core::traits::IProjectStorage;
use sector_core::types::{
    CutConfig, NewProject, NewScaleSet, ProjectUpdate, Quadrant, Scale,
};
use sector_storage::ProjectStore;

fn analyzer() -> (ProjectAnalyzer<ProjectStore>, i64) {
    sector_core::tracing::init_tracing();
    let store = ProjectStore::open_in_memory().unwrap();
    let scale_set_id = store.list_scale_sets().unwrap()[0].id;
    let project = store
        .create_project(&NewProject {
            name: "Cuenca".into(),
            description: None,
            scale_set_id,
        })
        .unwrap();
    (ProjectAnalyzer::new(store), project.id)
}

fn loaded() -> (ProjectAnalyzer<ProjectStore>, i64) {
    let (a, pid) = analyzer();
    a.set_variables(pid, ["Agua", "Suelo", "Clima"]).unwrap();
    a.set_matrix(
        pid,
        vec![
            vec![0.0, 3.0, 0.0],
            vec![1.0, 0.0, 0.0],
            vec![3.0, 3.0, 0.0],
        ],
    )
    .unwrap();
    (a, pid)
}

fn code(err: SectorError) -> &'static str {
    err.error_code()
}

#[test]
fn set_variables_trims_and_drops_blanks() {
    let (a, pid) = analyzer();
    assert_eq!(a.set_variables(pid, ["  A ", "", "B", "   "]).unwrap(), 2);
    let view = a.matrix(pid).unwrap();
    assert_eq!(view.variables, vec!["A", "B"]);
    assert!(view.matrix.is_none());

    assert_eq!(code(a.set_variables(pid, [" ", ""]).unwrap_err()), "NO_VARIABLES");
}

#[test]
fn matrix_requires_variables() {
    let (a, pid) = analyzer();
    let err = a.set_matrix(pid, vec![vec![0.0]]).unwrap_err();
    assert_eq!(code(err), "NO_VARIABLES");
}

#[test]
fn invalid_matrix_is_not_written() {
    let (a, pid) = loaded();
    let err = a
        .set_matrix(
            pid,
            vec![
                vec![0.0, 1.0, 1.0],
                vec![1.0, 0.0, 1.0],
                vec![1.0, 1.5, 0.0],
            ],
        )
        .unwrap_err();
    assert_eq!(code(err), "STEP_MISMATCH");

    // Previous matrix still in place.
    let view = a.matrix(pid).unwrap();
    assert_eq!(view.matrix.unwrap().get(0, 1), 3.0);
}

#[test]
fn wrong_shape_is_refused() {
    let (a, pid) = loaded();
    let err = a.set_matrix(pid, vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap_err();
    assert_eq!(code(err), "DIMENSION_MISMATCH");
}

#[test]
fn compute_uses_stored_matrix() {
    let (a, pid) = loaded();
    let r = a.compute(pid, None).unwrap();
    assert_eq!(r.variables, vec!["Agua", "Suelo", "Clima"]);
    assert_eq!(r.motricity_y, vec![3.0, 1.0, 6.0]);
    assert_eq!(r.dependence_x, vec![4.0, 6.0, 0.0]);
    // Both cuts are 10/3.
    assert_eq!(r.quadrant_of("Agua"), Some(Quadrant::Resultado));
    assert_eq!(r.quadrant_of("Suelo"), Some(Quadrant::Resultado));
    assert_eq!(r.quadrant_of("Clima"), Some(Quadrant::Determinante));

    let median = a.compute(pid, Some(&CutConfig::new("median"))).unwrap();
    assert_eq!(median.x_cut, 4.0);
    assert_eq!(median.y_cut, 3.0);
    assert_eq!(median.quadrant_of("Agua"), Some(Quadrant::Reguladora));
}

#[test]
fn configured_defaults_apply_when_request_has_none() {
    let store = ProjectStore::open_in_memory().unwrap();
    let scale_set_id = store.list_scale_sets().unwrap()[0].id;
    let pid = store
        .create_project(&NewProject {
            name: "p".into(),
            description: None,
            scale_set_id,
        })
        .unwrap()
        .id;
    let config = AnalysisConfig {
        cuts: Some("median".into()),
        ..Default::default()
    };
    let a = ProjectAnalyzer::with_defaults(store, &config);
    a.set_variables(pid, ["A", "B", "C"]).unwrap();
    a.set_matrix(pid, vec![vec![0.0, 3.0, 0.0], vec![1.0, 0.0, 0.0], vec![3.0, 3.0, 0.0]])
        .unwrap();
    assert_eq!(a.compute(pid, None).unwrap().x_cut, 4.0);
}

#[test]
fn incomplete_matrix_blocks_reads() {
    let (a, pid) = analyzer();
    a.set_variables(pid, ["A", "B"]).unwrap();

    assert_eq!(code(a.compute(pid, None).unwrap_err()), "INCOMPLETE_MATRIX");
    assert_eq!(code(a.graph(pid, 0.0, false).unwrap_err()), "INCOMPLETE_MATRIX");
    assert_eq!(code(a.heatmap(pid).unwrap_err()), "INCOMPLETE_MATRIX");
    assert_eq!(code(a.export_json(pid).unwrap_err()), "INCOMPLETE_MATRIX");
    assert_eq!(code(a.export_matrix_csv(pid).unwrap_err()), "INCOMPLETE_MATRIX");

    let status = a.status(pid).unwrap();
    assert_eq!(status.variables_count, 2);
    assert!(!status.matrix_complete);
}

#[test]
fn project_without_variables_reports_no_variables() {
    let (a, pid) = analyzer();
    assert_eq!(code(a.compute(pid, None).unwrap_err()), "NO_VARIABLES");
    assert_eq!(code(a.export_variables_csv(pid).unwrap_err()), "NO_VARIABLES");
}

#[test]
fn graph_and_heatmap() {
    let (a, pid) = loaded();
    let g = a.graph(pid, 0.0, false).unwrap();
    assert_eq!(g.nodes.len(), 3);
    assert_eq!(g.edge(0, 1).unwrap().weight, 4.0);
    assert_eq!(g.edge(0, 2).unwrap().weight, 3.0);

    let directed = a.graph(pid, 3.0, true).unwrap();
    assert_eq!(directed.edges.len(), 3);

    assert_eq!(
        code(a.graph(pid, -1.0, true).unwrap_err()),
        "INVALID_MIN_WEIGHT"
    );

    let heat = a.heatmap(pid).unwrap();
    assert_eq!(heat.scale, Scale::default());
    assert_eq!(heat.matrix.row(2), &[3.0, 3.0, 0.0]);
}

#[test]
fn json_export_document() {
    let (a, pid) = loaded();
    let doc: serde_json::Value = serde_json::from_str(&a.export_json(pid).unwrap()).unwrap();
    assert_eq!(doc["project"]["id"], pid);
    assert_eq!(doc["project"]["name"], "Cuenca");
    assert_eq!(doc["variables"][2], "Clima");
    assert_eq!(doc["matrix"][2][0], 3.0);
}

#[test]
fn csv_export_then_import_into_new_project() {
    let (a, pid) = loaded();
    let vars = a.export_variables_csv(pid).unwrap();
    let matrix = a.export_matrix_csv(pid).unwrap();
    assert!(vars.starts_with("code,name,description\r\nVAR1,Agua,"));

    let scale_set_id = a.store().get_project(pid).unwrap().scale_set_id;
    let other = a
        .store()
        .create_project(&NewProject {
            name: "copia".into(),
            description: None,
            scale_set_id,
        })
        .unwrap();
    assert_eq!(a.import_csv(other.id, &vars, &matrix, false).unwrap(), 3);
    assert_eq!(a.matrix(other.id).unwrap(), a.matrix(pid).unwrap());
}

#[test]
fn import_without_replace_is_refused_on_populated_project() {
    let (a, pid) = loaded();
    let vars = "name\nX\nY\n";
    let matrix = ",X,Y\nX,0,1\nY,1,0\n";

    assert_eq!(code(a.import_csv(pid, vars, matrix, false).unwrap_err()), "CONFLICT");
    assert_eq!(a.matrix(pid).unwrap().variables.len(), 3);

    assert_eq!(a.import_csv(pid, vars, matrix, true).unwrap(), 2);
    let view = a.matrix(pid).unwrap();
    assert_eq!(view.variables, vec!["X", "Y"]);
    assert!(view.matrix.is_some());
}

#[test]
fn import_validates_against_project_scale() {
    let (a, pid) = loaded();
    let vars = "name\nX\nY\n";
    let matrix = ",X,Y\nX,0,7\nY,1,0\n";
    assert_eq!(code(a.import_csv(pid, vars, matrix, true).unwrap_err()), "OUT_OF_RANGE");
    // Nothing written.
    assert_eq!(a.matrix(pid).unwrap().variables.len(), 3);
}

#[test]
fn scale_change_revalidates_matrix() {
    let (a, pid) = loaded();
    let narrow = a
        .store()
        .create_scale_set(&NewScaleSet {
            name: "0-2".into(),
            scale: Scale::new(0.0, 2.0, 1.0).unwrap(),
        })
        .unwrap();
    let wide = a
        .store()
        .create_scale_set(&NewScaleSet {
            name: "0-6 pares".into(),
            scale: Scale::new(0.0, 6.0, 1.0).unwrap(),
        })
        .unwrap();

    let to_narrow = ProjectUpdate {
        scale_set_id: Some(narrow.id),
        ..Default::default()
    };
    assert_eq!(code(a.update_project(pid, &to_narrow).unwrap_err()), "OUT_OF_RANGE");

    let to_wide = ProjectUpdate {
        scale_set_id: Some(wide.id),
        ..Default::default()
    };
    assert_eq!(a.update_project(pid, &to_wide).unwrap().scale_set_id, wide.id);
}
