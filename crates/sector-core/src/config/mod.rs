//! Configuration system for Sector.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod analysis_config;
pub mod database_config;
pub mod scale_config;
pub mod sector_config;
pub mod server_config;

pub use analysis_config::AnalysisConfig;
pub use database_config::DatabaseConfig;
pub use scale_config::DefaultScaleConfig;
pub use sector_config::{CliOverrides, SectorConfig};
pub use server_config::ServerConfig;
