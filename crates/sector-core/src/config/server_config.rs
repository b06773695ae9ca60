//! Boundary settings handed to whatever transport hosts the engine.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CORS_ALLOW_ORIGINS;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Allowed CORS origins. Empty means the compiled defaults.
    pub cors_allow_origins: Vec<String>,
}

impl ServerConfig {
    pub fn effective_cors_allow_origins(&self) -> Vec<String> {
        if self.cors_allow_origins.is_empty() {
            DEFAULT_CORS_ALLOW_ORIGINS.iter().map(|o| o.to_string()).collect()
        } else {
            self.cors_allow_origins.clone()
        }
    }

    /// True when the origin list reduces to the `*` wildcard alone.
    pub fn allows_any_origin(&self) -> bool {
        self.effective_cors_allow_origins() == ["*"]
    }

    /// Split a comma-separated origin list, trimming and dropping blanks.
    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect()
    }
}
