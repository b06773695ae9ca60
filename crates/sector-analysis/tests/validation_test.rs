//! Scale and matrix validation: error kinds, coordinates, scan order.

use sector_analysis::{validate_matrix, validate_rows, validate_value};
use sector_core::errors::{MatrixError, ScaleError};
use sector_core::types::{InfluenceMatrix, Scale};

fn scale_0_3() -> Scale {
    Scale::new(0.0, 3.0, 1.0).unwrap()
}

#[test]
fn value_scenarios_on_unit_step_scale() {
    let scale = scale_0_3();
    assert!(matches!(
        validate_value(1.5, &scale),
        Err(ScaleError::StepMismatch { .. })
    ));
    assert!(matches!(
        validate_value(4.0, &scale),
        Err(ScaleError::OutOfRange { .. })
    ));
    assert!(validate_value(0.0, &scale).is_ok());
    assert!(validate_value(1.0, &scale).is_ok());
    assert!(validate_value(3.0, &scale).is_ok());
}

#[test]
fn fractional_step_tolerates_float_noise() {
    let scale = Scale::new(0.0, 1.0, 0.1).unwrap();
    assert!(validate_value(0.1 + 0.2, &scale).is_ok());
    assert!(validate_value(0.7, &scale).is_ok());
    assert!(validate_value(0.75, &scale).is_err());
}

#[test]
fn nonzero_diagonal_reported_before_later_cells() {
    // (1,1) is the first offending cell in row-major order; (2,0) is also bad.
    let m = InfluenceMatrix::from_rows(vec![
        vec![0.0, 1.0, 2.0],
        vec![1.0, 2.0, 1.0],
        vec![9.0, 1.0, 0.0],
    ])
    .unwrap();
    let err = validate_matrix(&m, 3, &scale_0_3()).unwrap_err();
    assert_eq!(err, MatrixError::NonZeroDiagonal { index: 1, value: 2.0 });
    assert_eq!(err.cell(), Some((1, 1)));
}

#[test]
fn first_bad_cell_wins_in_row_major_order() {
    let m = InfluenceMatrix::from_rows(vec![
        vec![0.0, 1.0, 1.5],
        vec![7.0, 0.0, 1.0],
        vec![1.0, 1.0, 0.0],
    ])
    .unwrap();
    let err = validate_matrix(&m, 3, &scale_0_3()).unwrap_err();
    assert!(matches!(
        err,
        MatrixError::StepMismatch { row: 0, col: 2, .. }
    ));
}

#[test]
fn out_of_range_reports_coordinate_and_bounds() {
    let m = InfluenceMatrix::from_rows(vec![vec![0.0, -1.0], vec![0.0, 0.0]]).unwrap();
    let err = validate_matrix(&m, 2, &scale_0_3()).unwrap_err();
    assert_eq!(
        err,
        MatrixError::OutOfRange {
            row: 0,
            col: 1,
            value: -1.0,
            min: 0.0,
            max: 3.0
        }
    );
}

#[test]
fn diagonal_is_not_checked_against_scale() {
    // Zero is outside [1, 5] but still the only valid diagonal value.
    let scale = Scale::new(1.0, 5.0, 1.0).unwrap();
    let m = InfluenceMatrix::from_rows(vec![vec![0.0, 3.0], vec![5.0, 0.0]]).unwrap();
    assert!(validate_matrix(&m, 2, &scale).is_ok());
}

#[test]
fn non_finite_cell_is_out_of_range() {
    let m = InfluenceMatrix::from_rows(vec![vec![0.0, f64::NAN], vec![0.0, 0.0]]).unwrap();
    assert!(matches!(
        validate_matrix(&m, 2, &scale_0_3()),
        Err(MatrixError::OutOfRange { row: 0, col: 1, .. })
    ));
}

#[test]
fn shape_is_checked_before_cells() {
    // Bad diagonal and wrong size: the size is reported.
    let rows = vec![vec![5.0, 1.0], vec![1.0, 0.0]];
    assert_eq!(
        validate_rows(&rows, 3, &scale_0_3()),
        Err(MatrixError::DimensionMismatch {
            expected: 3,
            found: 2,
            row: None
        })
    );
}

#[test]
fn ragged_row_is_reported_with_its_index() {
    let rows = vec![vec![0.0, 1.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0, 0.0]];
    assert_eq!(
        validate_rows(&rows, 3, &scale_0_3()),
        Err(MatrixError::DimensionMismatch {
            expected: 3,
            found: 2,
            row: Some(1)
        })
    );
}

#[test]
fn validation_does_not_mutate_input() {
    let m = InfluenceMatrix::from_rows(vec![
        vec![0.0, 3.0, 1.0],
        vec![2.0, 0.0, 0.0],
        vec![1.0, 1.0, 0.0],
    ])
    .unwrap();
    let before = m.clone();
    validate_matrix(&m, 3, &scale_0_3()).unwrap();
    validate_matrix(&m, 3, &scale_0_3()).unwrap();
    assert_eq!(m, before);
}
