//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "SECTOR_LOG";

/// Filter used when `SECTOR_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "sector=info";

/// Initialize the Sector tracing/logging system.
///
/// Reads `SECTOR_LOG` for per-subsystem log levels.
/// Format: `SECTOR_LOG=sector_storage=debug,sector_analysis=info`
///
/// Idempotent: only the first call installs a subscriber. Returns `false`
/// when another global subscriber was already installed.
pub fn init_tracing() -> bool {
    let mut installed = true;
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init()
            .is_ok();
    });
    installed
}
