//! Cut configuration, quadrant labels, and the analysis result.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CUT_MODE, DEFAULT_PERCENTILE};
use crate::errors::AnalysisError;

/// A percentile rank in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Percentile(f64);

impl Percentile {
    pub fn new(value: f64) -> Result<Self, AnalysisError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(AnalysisError::InvalidPercentile { value });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Percentile {
    fn default() -> Self {
        Self(DEFAULT_PERCENTILE)
    }
}

/// How a threshold is derived from a dependence or motricity vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CutMode {
    #[default]
    Mean,
    Median,
    Percentile(Percentile),
}

impl CutMode {
    /// Resolve a mode name plus optional percentile.
    ///
    /// Unrecognised names fall back to [`CutMode::Mean`]. In percentile mode an
    /// absent value means the 50th percentile; `Some(0.0)` is the minimum.
    pub fn parse(mode: &str, percentile: Option<f64>) -> Result<Self, AnalysisError> {
        match mode {
            "median" => Ok(Self::Median),
            "percentile" => Ok(Self::Percentile(match percentile {
                Some(p) => Percentile::new(p)?,
                None => Percentile::default(),
            })),
            _ => Ok(Self::Mean),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Percentile(_) => "percentile",
        }
    }
}

/// Request-side configuration for an analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CutConfig {
    /// `mean` | `median` | `percentile`. Anything else means `mean`.
    pub cuts: String,
    pub x_percentile: Option<f64>,
    pub y_percentile: Option<f64>,
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            cuts: DEFAULT_CUT_MODE.to_string(),
            x_percentile: None,
            y_percentile: None,
        }
    }
}

impl CutConfig {
    pub fn new(cuts: impl Into<String>) -> Self {
        Self {
            cuts: cuts.into(),
            ..Self::default()
        }
    }

    pub fn with_percentiles(mut self, x: Option<f64>, y: Option<f64>) -> Self {
        self.x_percentile = x;
        self.y_percentile = y;
        self
    }

    /// Cut mode for the dependence (X) axis.
    pub fn x_mode(&self) -> Result<CutMode, AnalysisError> {
        CutMode::parse(&self.cuts, self.x_percentile)
    }

    /// Cut mode for the motricity (Y) axis.
    pub fn y_mode(&self) -> Result<CutMode, AnalysisError> {
        CutMode::parse(&self.cuts, self.y_percentile)
    }
}

/// MICMAC quadrant of a variable in the dependence/motricity plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// High motricity, low dependence (driving).
    Determinante,
    /// High motricity, high dependence (linkage).
    Reguladora,
    /// Low motricity, high dependence (dependent).
    Resultado,
    /// Low motricity, low dependence (autonomous).
    Autonoma,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::Determinante,
        Quadrant::Reguladora,
        Quadrant::Resultado,
        Quadrant::Autonoma,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Determinante => "Determinante",
            Self::Reguladora => "Reguladora",
            Self::Resultado => "Resultado",
            Self::Autonoma => "Autonoma",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Derived per-variable classification. Recomputed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Variable names in positional order.
    pub variables: Vec<String>,
    /// Column sums (incoming influence).
    #[serde(rename = "dependencia_x")]
    pub dependence_x: Vec<f64>,
    /// Row sums (outgoing influence).
    #[serde(rename = "motricidad_y")]
    pub motricity_y: Vec<f64>,
    pub x_cut: f64,
    pub y_cut: f64,
    /// Name to quadrant. With duplicate names the later variable wins.
    pub quadrants: FxHashMap<String, Quadrant>,
}

impl AnalysisResult {
    pub fn quadrant_of(&self, name: &str) -> Option<Quadrant> {
        self.quadrants.get(name).copied()
    }

    /// Variable names grouped per quadrant, each group in positional order.
    pub fn by_quadrant(&self, quadrant: Quadrant) -> Vec<&str> {
        self.variables
            .iter()
            .filter(|name| self.quadrants.get(name.as_str()) == Some(&quadrant))
            .map(String::as_str)
            .collect()
    }
}
