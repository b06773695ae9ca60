//! Dependence (column sums) and motricity (row sums) per variable.

use serde::{Deserialize, Serialize};

use sector_core::types::InfluenceMatrix;

/// Per-variable degree sums, both indexed by variable position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    /// X: total influence received, `sum_i M[i][j]` for `i != j`.
    pub dependence: Vec<f64>,
    /// Y: total influence exerted, `sum_j M[i][j]` for `j != i`.
    pub motricity: Vec<f64>,
}

impl Aggregation {
    /// Sum of all off-diagonal cells. Equal to the sum of either vector.
    pub fn total_influence(&self) -> f64 {
        self.motricity.iter().sum()
    }
}

/// Compute dependence and motricity in one O(N^2) pass.
///
/// The diagonal is skipped explicitly even though validation guarantees it is zero.
pub fn aggregate(matrix: &InfluenceMatrix) -> Aggregation {
    let n = matrix.size();
    let mut dependence = vec![0.0; n];
    let mut motricity = vec![0.0; n];

    for (i, row) in matrix.rows().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            if i == j {
                continue;
            }
            motricity[i] += value;
            dependence[j] += value;
        }
    }

    Aggregation {
        dependence,
        motricity,
    }
}
