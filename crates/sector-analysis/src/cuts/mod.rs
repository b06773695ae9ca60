//! Cut thresholds over a dependence or motricity vector.
//!
//! Three modes: arithmetic mean, median, and linearly interpolated
//! percentile. Empty input yields `0.0` in every mode.

use sector_core::errors::AnalysisError;
use sector_core::types::{CutMode, Percentile};

/// Compute a cut for an already-resolved mode.
pub fn compute_cut(values: &[f64], mode: CutMode) -> f64 {
    match mode {
        CutMode::Mean => mean(values),
        CutMode::Median => median(values),
        CutMode::Percentile(p) => percentile(values, p),
    }
}

/// Compute a cut from a mode name.
///
/// Unknown names fall back to the mean. `percentile` is only read in
/// percentile mode, where `None` means the 50th percentile.
pub fn cut(values: &[f64], mode: &str, percentile: Option<f64>) -> Result<f64, AnalysisError> {
    Ok(compute_cut(values, CutMode::parse(mode, percentile)?))
}

/// Arithmetic mean, `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Middle element for odd lengths, average of the two middle elements otherwise.
pub fn median(values: &[f64]) -> f64 {
    let sorted = sorted(values);
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    let mid = n / 2;
    if n % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Percentile with linear interpolation between closest ranks.
///
/// Rank `k = (len - 1) * p / 100`. An integral rank returns that element
/// exactly; otherwise the value is interpolated between `floor(k)` and `ceil(k)`.
pub fn percentile(values: &[f64], p: Percentile) -> f64 {
    let sorted = sorted(values);
    if sorted.is_empty() {
        return 0.0;
    }

    let k = (sorted.len() - 1) as f64 * (p.value() / 100.0);
    let f = k.floor();
    let c = k.ceil();
    let (lo, hi) = (f as usize, c as usize);
    if lo == hi {
        return sorted[lo];
    }
    sorted[lo] + (sorted[hi] - sorted[lo]) * (k - f)
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(value: f64) -> Percentile {
        Percentile::new(value).unwrap()
    }

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
    }

    #[test]
    fn percentile_fifty_matches_median() {
        let v = [4.0, 1.0, 3.0, 2.0];
        assert_eq!(percentile(&v, p(50.0)), 2.5);
        assert_eq!(percentile(&v, p(50.0)), median(&v));
    }

    #[test]
    fn percentile_extremes_are_min_and_max() {
        let v = [7.0, -1.0, 3.0];
        assert_eq!(percentile(&v, p(0.0)), -1.0);
        assert_eq!(percentile(&v, p(100.0)), 7.0);
    }

    #[test]
    fn percentile_interpolates() {
        // k = 3 * 0.25 = 0.75 -> 10 + (20 - 10) * 0.75
        assert_eq!(percentile(&[10.0, 20.0, 30.0, 40.0], p(25.0)), 17.5);
    }

    #[test]
    fn empty_input_is_zero_in_every_mode() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(median(&[]), 0.0);
        assert_eq!(percentile(&[], p(90.0)), 0.0);
    }

    #[test]
    fn input_is_not_reordered() {
        let v = vec![3.0, 1.0, 2.0];
        let _ = median(&v);
        assert_eq!(v, vec![3.0, 1.0, 2.0]);
    }
}
