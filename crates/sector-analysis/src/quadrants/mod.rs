//! Quadrant classification against the (x_cut, y_cut) pair.

use sector_core::types::Quadrant;

/// Classify one variable from its dependence `x` and motricity `y`.
///
/// | y >= y_cut | x >= x_cut | quadrant     |
/// |------------|------------|--------------|
/// | yes        | no         | Determinante |
/// | yes        | yes        | Reguladora   |
/// | no         | yes        | Resultado    |
/// | no         | no         | Autonoma     |
///
/// Points sitting exactly on a cut count as high on that axis.
pub fn classify(x: f64, y: f64, x_cut: f64, y_cut: f64) -> Quadrant {
    let high_motricity = y >= y_cut;
    let high_dependence = x >= x_cut;
    match (high_motricity, high_dependence) {
        (true, false) => Quadrant::Determinante,
        (true, true) => Quadrant::Reguladora,
        (false, true) => Quadrant::Resultado,
        (false, false) => Quadrant::Autonoma,
    }
}

/// Classify every position of the two vectors.
pub fn classify_all(dependence: &[f64], motricity: &[f64], x_cut: f64, y_cut: f64) -> Vec<Quadrant> {
    dependence
        .iter()
        .zip(motricity)
        .map(|(&x, &y)| classify(x, y, x_cut, y_cut))
        .collect()
}
