//! Top-level Sector configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, DatabaseConfig, DefaultScaleConfig, ServerConfig};
use crate::errors::ConfigError;
use crate::types::Percentile;

/// Project config file name, looked up in the project root.
const PROJECT_CONFIG_FILE: &str = "sector.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SECTOR_*`)
/// 3. Project config (`sector.toml` in project root)
/// 4. User config (`~/.sector/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SectorConfig {
    pub database: DatabaseConfig,
    pub analysis: AnalysisConfig,
    pub server: ServerConfig,
    pub default_scale: DefaultScaleConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub database_path: Option<PathBuf>,
    pub cuts: Option<String>,
    pub x_percentile: Option<f64>,
    pub y_percentile: Option<f64>,
    pub cors_allow_origins: Option<Vec<String>>,
}

impl SectorConfig {
    /// Load configuration with 4-layer resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &SectorConfig) -> Result<(), ConfigError> {
        for (field, value) in [
            ("analysis.x_percentile", config.analysis.x_percentile),
            ("analysis.y_percentile", config.analysis.y_percentile),
        ] {
            if let Some(p) = value {
                Percentile::new(p).map_err(|_| ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be between 0 and 100".to_string(),
                })?;
            }
        }
        if config.database.read_pool_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "database.read_pool_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        config
            .default_scale
            .to_new_scale_set()
            .map_err(|e| ConfigError::ValidationFailed {
                field: "default_scale".to_string(),
                message: e.to_string(),
            })?;
        Ok(())
    }

    /// Returns the user config path: `~/.sector/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".sector").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut SectorConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SectorConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` (or non-empty) value.
    fn merge(base: &mut SectorConfig, other: &SectorConfig) {
        // Database
        if other.database.path.is_some() {
            base.database.path = other.database.path.clone();
        }
        if other.database.read_pool_size.is_some() {
            base.database.read_pool_size = other.database.read_pool_size;
        }

        // Analysis
        if other.analysis.cuts.is_some() {
            base.analysis.cuts = other.analysis.cuts.clone();
        }
        if other.analysis.x_percentile.is_some() {
            base.analysis.x_percentile = other.analysis.x_percentile;
        }
        if other.analysis.y_percentile.is_some() {
            base.analysis.y_percentile = other.analysis.y_percentile;
        }

        // Server
        if !other.server.cors_allow_origins.is_empty() {
            base.server.cors_allow_origins = other.server.cors_allow_origins.clone();
        }

        // Default scale
        if other.default_scale.name.is_some() {
            base.default_scale.name = other.default_scale.name.clone();
        }
        if other.default_scale.min_value.is_some() {
            base.default_scale.min_value = other.default_scale.min_value;
        }
        if other.default_scale.max_value.is_some() {
            base.default_scale.max_value = other.default_scale.max_value;
        }
        if other.default_scale.step.is_some() {
            base.default_scale.step = other.default_scale.step;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SECTOR_DATABASE_PATH`, `SECTOR_ANALYSIS_CUTS`, etc.
    fn apply_env_overrides(config: &mut SectorConfig) {
        if let Ok(val) = std::env::var("SECTOR_DATABASE_PATH") {
            config.database.path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("SECTOR_DATABASE_READ_POOL_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.database.read_pool_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SECTOR_ANALYSIS_CUTS") {
            config.analysis.cuts = Some(val);
        }
        if let Ok(val) = std::env::var("SECTOR_ANALYSIS_X_PERCENTILE") {
            if let Ok(v) = val.parse::<f64>() {
                config.analysis.x_percentile = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SECTOR_ANALYSIS_Y_PERCENTILE") {
            if let Ok(v) = val.parse::<f64>() {
                config.analysis.y_percentile = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SECTOR_CORS_ALLOW_ORIGINS") {
            let origins = ServerConfig::parse_origins(&val);
            if !origins.is_empty() {
                config.server.cors_allow_origins = origins;
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut SectorConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.database_path {
            config.database.path = Some(v.clone());
        }
        if let Some(ref v) = cli.cuts {
            config.analysis.cuts = Some(v.clone());
        }
        if let Some(v) = cli.x_percentile {
            config.analysis.x_percentile = Some(v);
        }
        if let Some(v) = cli.y_percentile {
            config.analysis.y_percentile = Some(v);
        }
        if let Some(ref v) = cli.cors_allow_origins {
            config.server.cors_allow_origins = v.clone();
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
