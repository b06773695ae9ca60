//! Connection management: one serialized writer plus pooled readers.

pub mod pool;
pub mod pragmas;
pub mod writer;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::Connection;
use sector_core::errors::StorageError;

use self::pool::ReadPool;
use self::pragmas::apply_pragmas;
use crate::migrations;

/// Owns the write connection and, for file-backed databases, the read pool.
///
/// In-memory databases have no pool: a second in-memory connection would be
/// a separate database, so reads go through the writer.
pub struct DatabaseManager {
    writer: Mutex<Connection>,
    readers: Option<ReadPool>,
    path: Option<PathBuf>,
}

impl DatabaseManager {
    /// Open a database file, apply pragmas, run migrations, open `read_pool_size` readers.
    pub fn open(path: &Path, read_pool_size: usize) -> Result<Self, StorageError> {
        let writer = Connection::open(path).map_err(|e| StorageError::sqlite(e.to_string()))?;
        apply_pragmas(&writer)?;
        migrations::run_migrations(&writer)?;

        let readers = ReadPool::open(path, read_pool_size)?;

        Ok(Self {
            writer: Mutex::new(writer),
            readers: Some(readers),
            path: Some(path.to_path_buf()),
        })
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        let writer =
            Connection::open_in_memory().map_err(|e| StorageError::sqlite(e.to_string()))?;
        apply_pragmas(&writer)?;
        migrations::run_migrations(&writer)?;

        Ok(Self {
            writer: Mutex::new(writer),
            readers: None,
            path: None,
        })
    }

    /// Execute with the serialized writer connection.
    pub fn with_writer<F, T, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Connection) -> Result<T, E>,
        E: From<StorageError>,
    {
        let guard = self
            .writer
            .lock()
            .map_err(|_| StorageError::sqlite("write lock poisoned"))?;
        f(&guard)
    }

    /// Execute with a pooled reader, or the writer when there is no pool.
    pub fn with_reader<F, T, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Connection) -> Result<T, E>,
        E: From<StorageError>,
    {
        match &self.readers {
            Some(pool) => pool.with_conn(f),
            None => self.with_writer(f),
        }
    }

    /// None for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn read_pool_size(&self) -> usize {
        self.readers.as_ref().map_or(0, ReadPool::size)
    }
}
