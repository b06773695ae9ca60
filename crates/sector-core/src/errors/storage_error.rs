/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("{entity} {id} does not exist")]
    NotFound { entity: &'static str, id: i64 },

    #[error("conflict: {reason}")]
    Conflict { reason: String },
}

impl StorageError {
    /// Wrap any rusqlite-style error message.
    pub fn sqlite(message: impl Into<String>) -> Self {
        Self::SqliteError {
            message: message.into(),
        }
    }
}

impl super::SectorErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        use super::error_code;
        match self {
            Self::SqliteError { .. } => error_code::STORAGE_ERROR,
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::Conflict { .. } => error_code::CONFLICT,
        }
    }
}
