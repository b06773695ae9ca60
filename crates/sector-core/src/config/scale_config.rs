//! The scale seeded on first database open.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_SCALE_MAX, DEFAULT_SCALE_MIN, DEFAULT_SCALE_NAME, DEFAULT_SCALE_STEP,
};
use crate::errors::ScaleConfigError;
use crate::types::{NewScaleSet, Scale};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DefaultScaleConfig {
    pub name: Option<String>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub step: Option<f64>,
}

impl DefaultScaleConfig {
    pub fn effective_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_SCALE_NAME)
    }

    /// Build the seed scale set, validating the configured bounds.
    pub fn to_new_scale_set(&self) -> Result<NewScaleSet, ScaleConfigError> {
        let scale = Scale::new(
            self.min_value.unwrap_or(DEFAULT_SCALE_MIN),
            self.max_value.unwrap_or(DEFAULT_SCALE_MAX),
            self.step.unwrap_or(DEFAULT_SCALE_STEP),
        )?;
        Ok(NewScaleSet {
            name: self.effective_name().to_string(),
            scale,
        })
    }
}
