//! Database configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DATABASE_PATH, DEFAULT_READ_POOL_SIZE};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file path. Default: `sector.db`.
    pub path: Option<PathBuf>,
    /// Read connections in the pool. Default: 4.
    pub read_pool_size: Option<usize>,
}

impl DatabaseConfig {
    pub fn effective_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH))
    }

    pub fn effective_read_pool_size(&self) -> usize {
        self.read_pool_size.unwrap_or(DEFAULT_READ_POOL_SIZE)
    }
}
