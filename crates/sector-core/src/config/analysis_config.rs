//! Analysis configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CUT_MODE;
use crate::types::CutConfig;

/// Default cut settings applied when a request does not carry its own.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// `mean` | `median` | `percentile`. Default: `mean`.
    pub cuts: Option<String>,
    /// Percentile for the dependence axis in percentile mode.
    pub x_percentile: Option<f64>,
    /// Percentile for the motricity axis in percentile mode.
    pub y_percentile: Option<f64>,
}

impl AnalysisConfig {
    /// Returns the effective cut mode name, defaulting to `mean`.
    pub fn effective_cuts(&self) -> &str {
        self.cuts.as_deref().unwrap_or(DEFAULT_CUT_MODE)
    }

    /// The configured defaults as a request-side [`CutConfig`].
    pub fn cut_config(&self) -> CutConfig {
        CutConfig::new(self.effective_cuts()).with_percentiles(self.x_percentile, self.y_percentile)
    }
}
