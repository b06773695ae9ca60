//! Observability for Sector.
//! `tracing` crate with `EnvFilter`, per-subsystem log levels.

pub mod setup;
pub mod spans;

pub use setup::{init_tracing, DEFAULT_FILTER, LOG_ENV_VAR};
