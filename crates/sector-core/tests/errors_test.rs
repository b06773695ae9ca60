//! Tests for the Sector error handling system.

use std::collections::HashSet;

use sector_core::errors::error_code::SectorErrorCode;
use sector_core::errors::*;

#[test]
fn test_every_matrix_kind_has_distinct_code() {
    let errors = [
        MatrixError::DimensionMismatch {
            expected: 3,
            found: 2,
            row: None,
        },
        MatrixError::NonZeroDiagonal {
            index: 1,
            value: 2.0,
        },
        MatrixError::OutOfRange {
            row: 0,
            col: 1,
            value: 4.0,
            min: 0.0,
            max: 3.0,
        },
        MatrixError::StepMismatch {
            row: 0,
            col: 1,
            value: 1.5,
            step: 1.0,
        },
    ];
    let codes: HashSet<_> = errors.iter().map(|e| e.error_code()).collect();
    assert_eq!(codes.len(), errors.len());
}

#[test]
fn test_matrix_error_reports_coordinates() {
    let err = MatrixError::at_cell(
        2,
        0,
        ScaleError::OutOfRange {
            value: 4.0,
            min: 0.0,
            max: 3.0,
        },
    );
    assert_eq!(err.cell(), Some((2, 0)));
    assert_eq!(err.to_string(), "value 4 outside scale [0,3] at (2,0)");

    let diag = MatrixError::NonZeroDiagonal {
        index: 1,
        value: 2.0,
    };
    assert_eq!(diag.cell(), Some((1, 1)));
}

#[test]
fn test_dimension_mismatch_message() {
    let rows = MatrixError::DimensionMismatch {
        expected: 3,
        found: 2,
        row: None,
    };
    assert_eq!(rows.to_string(), "matrix must be 3x3, got 2 rows");
    let cols = MatrixError::DimensionMismatch {
        expected: 3,
        found: 4,
        row: Some(1),
    };
    assert_eq!(cols.to_string(), "matrix must be 3x3, row 1 has 4 columns");
    assert_eq!(cols.cell(), None);
}

#[test]
fn test_from_conversions_preserve_codes() {
    let incomplete = AnalysisError::IncompleteMatrix {
        expected: 9,
        actual: 4,
    };
    let top: SectorError = incomplete.clone().into();
    assert!(matches!(top, SectorError::Analysis(AnalysisError::IncompleteMatrix { .. })));
    assert_eq!(top.error_code(), incomplete.error_code());

    let storage: SectorError = StorageError::NotFound {
        entity: "project",
        id: 7,
    }
    .into();
    assert_eq!(storage.error_code(), "NOT_FOUND");
}

#[test]
fn test_coded_string_format() {
    let err = ScaleConfigError::InvalidStep { step: 0.0 };
    assert_eq!(err.coded_string(), "[SCALE_CONFIG_ERROR] step must be greater than 0 (got 0)");
}
