//! Transaction helpers for the serialized writer and for consistent reads.

use rusqlite::{Connection, Transaction, TransactionBehavior};
use sector_core::errors::StorageError;

/// Run `f` inside `BEGIN IMMEDIATE`. The write lock is taken up front, so a
/// concurrent writer waits on busy_timeout instead of failing mid-transaction.
/// Any error rolls the whole transaction back.
pub fn with_immediate_transaction<F, T, E>(conn: &Connection, f: F) -> Result<T, E>
where
    F: FnOnce(&Transaction<'_>) -> Result<T, E>,
    E: From<StorageError>,
{
    // Dropping the transaction without commit rolls back.
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
        .map_err(|e| StorageError::sqlite(format!("failed to begin immediate transaction: {e}")))?;

    let result = f(&tx)?;

    tx.commit()
        .map_err(|e| StorageError::sqlite(format!("failed to commit: {e}")))?;
    Ok(result)
}

/// Run several reads against one snapshot of the database.
pub fn with_read_transaction<F, T, E>(conn: &Connection, f: F) -> Result<T, E>
where
    F: FnOnce(&Connection) -> Result<T, E>,
    E: From<StorageError>,
{
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| StorageError::sqlite(format!("failed to begin read transaction: {e}")))?;
    let result = f(&tx)?;
    tx.finish()
        .map_err(|e| StorageError::sqlite(format!("failed to end read transaction: {e}")))?;
    Ok(result)
}
