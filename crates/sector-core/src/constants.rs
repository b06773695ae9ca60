//! Shared constants for the Sector analysis engine.

/// Sector version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tolerance used when checking that a value sits on the scale's step grid.
pub const STEP_TOLERANCE: f64 = 1e-6;

/// Percentile used when percentile cuts are requested without an explicit value.
pub const DEFAULT_PERCENTILE: f64 = 50.0;

/// Cut mode used when none is configured.
pub const DEFAULT_CUT_MODE: &str = "mean";

// ---- Default scale (seeded once by the storage collaborator) ----

/// Name of the scale set seeded on first open.
pub const DEFAULT_SCALE_NAME: &str = "Por defecto 0-3";

/// Lower bound of the default scale.
pub const DEFAULT_SCALE_MIN: f64 = 0.0;

/// Upper bound of the default scale.
pub const DEFAULT_SCALE_MAX: f64 = 3.0;

/// Step of the default scale.
pub const DEFAULT_SCALE_STEP: f64 = 1.0;

// ---- Storage ----

/// Default database file name, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "sector.db";

/// Default number of read connections.
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// ---- Server boundary ----

/// Origins allowed to call the API when nothing is configured.
pub const DEFAULT_CORS_ALLOW_ORIGINS: [&str; 3] =
    ["http://localhost:3000", "http://127.0.0.1:3000", "*"];
