//! Membership test for a bounded, stepped scale.

use sector_core::constants::STEP_TOLERANCE;
use sector_core::errors::ScaleError;
use sector_core::types::Scale;

/// Check that `value` lies in `[min, max]` and on the step grid anchored at `min`.
///
/// Non-finite values are reported as out of range.
pub fn validate_value(value: f64, scale: &Scale) -> Result<(), ScaleError> {
    if !value.is_finite() || value < scale.min() || value > scale.max() {
        return Err(ScaleError::OutOfRange {
            value,
            min: scale.min(),
            max: scale.max(),
        });
    }

    let steps = (value - scale.min()) / scale.step();
    if (steps - steps.round()).abs() > STEP_TOLERANCE {
        return Err(ScaleError::StepMismatch {
            value,
            min: scale.min(),
            step: scale.step(),
        });
    }
    Ok(())
}
