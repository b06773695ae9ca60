//! Connection layer: pragmas, migrations, read pool visibility.

use rusqlite::Connection;
use sector_core::errors::StorageError;
use sector_storage::connection::pragmas::verify_wal_mode;
use sector_storage::migrations::{current_version, run_migrations, LATEST_VERSION};
use sector_storage::DatabaseManager;
use tempfile::TempDir;

#[test]
fn file_database_uses_wal_and_foreign_keys() {
    let dir = TempDir::new().unwrap();
    let db = DatabaseManager::open(&dir.path().join("sector.db"), 2).unwrap();

    db.with_writer(|conn| -> Result<(), StorageError> {
        assert!(verify_wal_mode(conn)?);
        let fk: i64 = conn
            .pragma_query_value(None, "foreign_keys", |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1, "foreign_keys should be ON");
        let timeout: i64 = conn
            .pragma_query_value(None, "busy_timeout", |row| row.get(0))
            .unwrap();
        assert_eq!(timeout, 5000);
        Ok(())
    })
    .unwrap();
    assert_eq!(db.read_pool_size(), 2);
    assert!(db.path().is_some());
}

#[test]
fn migrations_are_idempotent() {
    let conn = Connection::open_in_memory().unwrap();
    run_migrations(&conn).unwrap();
    run_migrations(&conn).unwrap();
    assert_eq!(current_version(&conn).unwrap(), LATEST_VERSION);

    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'
             AND name IN ('scale_sets', 'projects', 'variables', 'influence_cells')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 4);
}

#[test]
fn readers_see_committed_writes() {
    let dir = TempDir::new().unwrap();
    let db = DatabaseManager::open(&dir.path().join("sector.db"), 4).unwrap();

    db.with_writer(|conn| -> Result<(), StorageError> {
        conn.execute(
            "INSERT INTO scale_sets (name, min_value, max_value, step) VALUES ('s', 0, 3, 1)",
            [],
        )
        .map_err(|e| StorageError::sqlite(e.to_string()))?;
        Ok(())
    })
    .unwrap();

    for _ in 0..4 {
        let count = db
            .with_reader(|conn| -> Result<i64, StorageError> {
                conn.query_row("SELECT COUNT(*) FROM scale_sets", [], |row| row.get(0))
                    .map_err(|e| StorageError::sqlite(e.to_string()))
            })
            .unwrap();
        assert_eq!(count, 1);
    }
}

#[test]
fn readers_are_read_only() {
    let dir = TempDir::new().unwrap();
    let db = DatabaseManager::open(&dir.path().join("sector.db"), 1).unwrap();

    let result = db.with_reader(|conn| -> Result<usize, StorageError> {
        conn.execute("DELETE FROM scale_sets", [])
            .map_err(|e| StorageError::sqlite(e.to_string()))
    });
    assert!(result.is_err());
}

#[test]
fn in_memory_reads_go_through_writer() {
    let db = DatabaseManager::open_in_memory().unwrap();
    assert_eq!(db.read_pool_size(), 0);
    assert!(db.path().is_none());

    db.with_writer(|conn| -> Result<(), StorageError> {
        conn.execute(
            "INSERT INTO scale_sets (name, min_value, max_value, step) VALUES ('s', 0, 3, 1)",
            [],
        )
        .map_err(|e| StorageError::sqlite(e.to_string()))?;
        Ok(())
    })
    .unwrap();
    let count = db
        .with_reader(|conn| -> Result<i64, StorageError> {
            conn.query_row("SELECT COUNT(*) FROM scale_sets", [], |row| row.get(0))
                .map_err(|e| StorageError::sqlite(e.to_string()))
        })
        .unwrap();
    assert_eq!(count, 1);
}
