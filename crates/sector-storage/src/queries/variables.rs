//! Queries for the variables table. Order is `id` ascending.

use rusqlite::{params, Connection};
use sector_core::errors::StorageError;
use sector_core::types::VariableRecord;

use super::sql_err;

/// Variables of a project in positional order.
pub fn list(conn: &Connection, project_id: i64) -> Result<Vec<VariableRecord>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, name, code, description FROM variables
             WHERE project_id = ?1 ORDER BY id",
        )
        .map_err(sql_err)?;
    let rows = stmt
        .query_map(params![project_id], |row| {
            Ok(VariableRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                code: row.get(2)?,
                description: row.get(3)?,
            })
        })
        .map_err(sql_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(sql_err)
}

/// Insert one variable. Returns its id, which fixes its position.
pub fn insert(conn: &Connection, project_id: i64, name: &str) -> Result<i64, StorageError> {
    let mut stmt = conn
        .prepare_cached("INSERT INTO variables (project_id, name) VALUES (?1, ?2)")
        .map_err(sql_err)?;
    stmt.execute(params![project_id, name]).map_err(sql_err)?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_for_project(conn: &Connection, project_id: i64) -> Result<usize, StorageError> {
    conn.execute("DELETE FROM variables WHERE project_id = ?1", params![project_id])
        .map_err(sql_err)
}

pub fn count(conn: &Connection, project_id: i64) -> Result<usize, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM variables WHERE project_id = ?1",
        params![project_id],
        |row| row.get::<_, i64>(0),
    )
    .map(|n| n as usize)
    .map_err(sql_err)
}
