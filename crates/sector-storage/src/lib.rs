//! # sector-storage
//!
//! SQLite persistence for Sector: one serialized writer, a pool of
//! read-only connections, `user_version` migrations, and [`ProjectStore`],
//! the [`IProjectStorage`](sector_core::traits::IProjectStorage) implementation.

pub mod connection;
pub mod migrations;
pub mod queries;
pub mod store;

pub use connection::DatabaseManager;
pub use store::ProjectStore;
