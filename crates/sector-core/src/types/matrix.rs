//! Dense, position-indexed influence matrix.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::VariableRecord;
use crate::errors::{AnalysisError, MatrixError};

/// Square `N x N` matrix of influence scores, stored row-major.
///
/// Cell `(i, j)` is the influence of variable `i` on variable `j`. The
/// matrix carries no identity beyond position; squareness is the only
/// invariant enforced here; scale and diagonal rules belong to validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct InfluenceMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl InfluenceMatrix {
    /// An `n x n` matrix of zeros.
    pub fn zeros(n: usize) -> Self {
        Self {
            size: n,
            cells: vec![0.0; n * n],
        }
    }

    /// Build from nested rows. Every row must be as long as the row count.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(MatrixError::DimensionMismatch {
                    expected: n,
                    found: row.len(),
                    row: Some(i),
                });
            }
            cells.extend(row);
        }
        Ok(Self { size: n, cells })
    }

    /// Reassemble a dense matrix from persisted cells keyed by variable id.
    ///
    /// `variables` must be in positional order. Every ordered pair must be
    /// present exactly once; anything short of `N^2` distinct cells is
    /// reported as [`AnalysisError::IncompleteMatrix`].
    pub fn from_cells(
        variables: &[VariableRecord],
        cells: &[MatrixCell],
    ) -> Result<Self, AnalysisError> {
        let n = variables.len();
        if n == 0 {
            return Err(AnalysisError::NoVariables);
        }
        let expected = n * n;
        if cells.len() != expected {
            return Err(AnalysisError::IncompleteMatrix {
                expected,
                actual: cells.len(),
            });
        }

        let positions: FxHashMap<i64, usize> = variables
            .iter()
            .enumerate()
            .map(|(i, v)| (v.id, i))
            .collect();
        let index_of = |id: i64| -> Result<usize, AnalysisError> {
            positions
                .get(&id)
                .copied()
                .ok_or(AnalysisError::UnknownVariable { id })
        };

        let mut matrix = Self::zeros(n);
        let mut filled = vec![false; expected];
        for cell in cells {
            let i = index_of(cell.from_var_id)?;
            let j = index_of(cell.to_var_id)?;
            matrix.cells[i * n + j] = cell.value;
            filled[i * n + j] = true;
        }

        let present = filled.iter().filter(|f| **f).count();
        if present != expected {
            return Err(AnalysisError::IncompleteMatrix {
                expected,
                actual: present,
            });
        }
        Ok(matrix)
    }

    /// Number of variables (rows, and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.size + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.cells[i * self.size + j] = value;
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.cells[i * self.size..(i + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on a zero chunk size.
        self.cells.chunks_exact(self.size.max(1))
    }

    /// Nested-row copy, the shape used at JSON boundaries.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Copy with every diagonal cell forced to zero.
    pub fn with_zero_diagonal(&self) -> Self {
        let mut out = self.clone();
        for i in 0..self.size {
            out.set(i, i, 0.0);
        }
        out
    }

    /// Flatten into persisted cells, mapping index `i` to `variables[i].id`.
    pub fn to_cells(&self, variables: &[VariableRecord]) -> Result<Vec<MatrixCell>, MatrixError> {
        if variables.len() != self.size {
            return Err(MatrixError::DimensionMismatch {
                expected: variables.len(),
                found: self.size,
                row: None,
            });
        }
        let mut out = Vec::with_capacity(self.cells.len());
        for (i, from) in variables.iter().enumerate() {
            for (j, to) in variables.iter().enumerate() {
                out.push(MatrixCell {
                    from_var_id: from.id,
                    to_var_id: to.id,
                    value: self.get(i, j),
                });
            }
        }
        Ok(out)
    }
}

impl TryFrom<Vec<Vec<f64>>> for InfluenceMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<InfluenceMatrix> for Vec<Vec<f64>> {
    fn from(matrix: InfluenceMatrix) -> Self {
        matrix.to_rows()
    }
}

/// One persisted matrix cell, keyed by variable ids rather than positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatrixCell {
    pub from_var_id: i64,
    pub to_var_id: i64,
    pub value: f64,
}
