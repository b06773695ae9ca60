//! Influence matrix validation: shape, zero diagonal, scale membership.
//!
//! Shape is checked first. Cells are then scanned row-major and the first
//! offending cell is reported. Diagonal cells are only checked for `== 0`;
//! every other cell goes through the scale validator.

use sector_core::errors::MatrixError;
use sector_core::types::{InfluenceMatrix, Scale};

use super::scale_validator::validate_value;

/// Validate raw nested rows against the current variable count and scale.
pub fn validate_rows<R: AsRef<[f64]>>(
    rows: &[R],
    variable_count: usize,
    scale: &Scale,
) -> Result<(), MatrixError> {
    let _span = sector_core::validation_span!(variable_count).entered();
    validate_shape(rows, variable_count)?;
    scan_cells(rows.iter().map(|row| row.as_ref()), scale)
}

/// Row count first, then the first row of the wrong length.
pub fn validate_shape<R: AsRef<[f64]>>(rows: &[R], variable_count: usize) -> Result<(), MatrixError> {
    if rows.len() != variable_count {
        return Err(MatrixError::DimensionMismatch {
            expected: variable_count,
            found: rows.len(),
            row: None,
        });
    }
    if let Some((i, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.as_ref().len() != variable_count)
    {
        return Err(MatrixError::DimensionMismatch {
            expected: variable_count,
            found: row.as_ref().len(),
            row: Some(i),
        });
    }
    Ok(())
}

/// Validate an already-square matrix against the variable count and scale.
pub fn validate_matrix(
    matrix: &InfluenceMatrix,
    variable_count: usize,
    scale: &Scale,
) -> Result<(), MatrixError> {
    let _span = sector_core::validation_span!(variable_count).entered();

    if matrix.size() != variable_count {
        return Err(MatrixError::DimensionMismatch {
            expected: variable_count,
            found: matrix.size(),
            row: None,
        });
    }
    scan_cells(matrix.rows(), scale)
}

fn scan_cells<'a>(
    rows: impl Iterator<Item = &'a [f64]>,
    scale: &Scale,
) -> Result<(), MatrixError> {
    for (i, row) in rows.enumerate() {
        for (j, &value) in row.iter().enumerate() {
            if i == j {
                if value != 0.0 {
                    return Err(MatrixError::NonZeroDiagonal { index: i, value });
                }
                continue;
            }
            validate_value(value, scale).map_err(|e| MatrixError::at_cell(i, j, e))?;
        }
    }
    Ok(())
}
