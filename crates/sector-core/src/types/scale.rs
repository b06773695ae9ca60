//! Bounded, stepped numeric scale for influence scores.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::ScaleConfigError;

/// The admissible range and step granularity for matrix cell values.
///
/// Invariants (enforced by [`Scale::new`]): all bounds finite, `max > min`, `step > 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScale")]
pub struct Scale {
    min: f64,
    max: f64,
    step: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<BTreeMap<String, String>>,
}

#[derive(Deserialize)]
struct RawScale {
    min: f64,
    max: f64,
    #[serde(default = "default_step")]
    step: f64,
    #[serde(default)]
    labels: Option<BTreeMap<String, String>>,
}

fn default_step() -> f64 {
    1.0
}

impl TryFrom<RawScale> for Scale {
    type Error = ScaleConfigError;

    fn try_from(raw: RawScale) -> Result<Self, Self::Error> {
        Ok(Scale::new(raw.min, raw.max, raw.step)?.with_labels(raw.labels))
    }
}

impl Scale {
    /// Build a scale, rejecting non-finite bounds, `max <= min`, or `step <= 0`.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, ScaleConfigError> {
        for (field, value) in [("min_value", min), ("max_value", max), ("step", step)] {
            if !value.is_finite() {
                return Err(ScaleConfigError::NonFinite { field });
            }
        }
        if max <= min {
            return Err(ScaleConfigError::InvalidRange { min, max });
        }
        if step <= 0.0 {
            return Err(ScaleConfigError::InvalidStep { step });
        }
        Ok(Self {
            min,
            max,
            step,
            labels: None,
        })
    }

    /// Attach display labels (e.g. `"0" -> "no influence"`).
    pub fn with_labels(mut self, labels: Option<BTreeMap<String, String>>) -> Self {
        self.labels = labels.filter(|l| !l.is_empty());
        self
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn labels(&self) -> Option<&BTreeMap<String, String>> {
        self.labels.as_ref()
    }

    /// True when the numeric bounds differ (labels ignored).
    pub fn bounds_differ(&self, other: &Scale) -> bool {
        self.min != other.min || self.max != other.max || self.step != other.step
    }
}

impl Default for Scale {
    fn default() -> Self {
        use crate::constants::{DEFAULT_SCALE_MAX, DEFAULT_SCALE_MIN, DEFAULT_SCALE_STEP};
        Self {
            min: DEFAULT_SCALE_MIN,
            max: DEFAULT_SCALE_MAX,
            step: DEFAULT_SCALE_STEP,
            labels: None,
        }
    }
}
