//! Query modules, one per table.

pub mod cells;
pub mod projects;
pub mod scale_sets;
pub mod variables;

use sector_core::errors::StorageError;

pub(crate) fn sql_err(e: rusqlite::Error) -> StorageError {
    StorageError::sqlite(e.to_string())
}
