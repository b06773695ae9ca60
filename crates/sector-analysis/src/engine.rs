//! Full analysis pipeline: aggregate, cut, classify.

use rustc_hash::FxHashMap;

use sector_core::errors::{AnalysisError, MatrixError, SectorResult};
use sector_core::types::{AnalysisResult, CutConfig, InfluenceMatrix, Quadrant};

use crate::aggregation::aggregate;
use crate::cuts::compute_cut;
use crate::quadrants::classify_all;

/// Run the analysis over an already-validated matrix.
///
/// `names[i]` labels row and column `i`. Cut modes are resolved before any
/// work is done, so an invalid percentile fails without computing anything.
pub fn compute_analysis(
    names: &[String],
    matrix: &InfluenceMatrix,
    config: &CutConfig,
) -> SectorResult<AnalysisResult> {
    if names.is_empty() {
        return Err(AnalysisError::NoVariables.into());
    }
    if matrix.size() != names.len() {
        return Err(MatrixError::DimensionMismatch {
            expected: names.len(),
            found: matrix.size(),
            row: None,
        }
        .into());
    }

    let x_mode = config.x_mode()?;
    let y_mode = config.y_mode()?;

    let agg = aggregate(matrix);
    let x_cut = compute_cut(&agg.dependence, x_mode);
    let y_cut = compute_cut(&agg.motricity, y_mode);

    // Later duplicates overwrite earlier ones.
    let quadrants: FxHashMap<String, Quadrant> = names
        .iter()
        .cloned()
        .zip(classify_all(&agg.dependence, &agg.motricity, x_cut, y_cut))
        .collect();

    tracing::debug!(
        variables = names.len(),
        x_mode = x_mode.name(),
        y_mode = y_mode.name(),
        x_cut,
        y_cut,
        "analysis computed"
    );

    Ok(AnalysisResult {
        variables: names.to_vec(),
        dependence_x: agg.dependence,
        motricity_y: agg.motricity,
        x_cut,
        y_cut,
        quadrants,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sector_core::types::Quadrant;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn later_duplicate_name_wins() {
        let m = InfluenceMatrix::from_rows(vec![vec![0.0, 3.0], vec![0.0, 0.0]]).unwrap();
        let result = compute_analysis(&names(&["A", "A"]), &m, &CutConfig::default()).unwrap();
        assert_eq!(result.variables.len(), 2);
        assert_eq!(result.quadrants.len(), 1);
        // Position 1: x = 3, y = 0 against cuts 1.5 / 1.5.
        assert_eq!(result.quadrant_of("A"), Some(Quadrant::Resultado));
    }

    #[test]
    fn size_mismatch_is_rejected() {
        let err = compute_analysis(&names(&["A"]), &InfluenceMatrix::zeros(2), &CutConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            sector_core::SectorError::Matrix(MatrixError::DimensionMismatch {
                expected: 1,
                found: 2,
                row: None
            })
        ));
    }
}
