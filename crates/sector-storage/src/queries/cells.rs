//! Queries for the influence_cells table.

use rusqlite::{params, Connection};
use sector_core::errors::StorageError;
use sector_core::types::MatrixCell;

use super::sql_err;

pub fn list(conn: &Connection, project_id: i64) -> Result<Vec<MatrixCell>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT from_var_id, to_var_id, value FROM influence_cells
             WHERE project_id = ?1 ORDER BY from_var_id, to_var_id",
        )
        .map_err(sql_err)?;
    let rows = stmt
        .query_map(params![project_id], |row| {
            Ok(MatrixCell {
                from_var_id: row.get(0)?,
                to_var_id: row.get(1)?,
                value: row.get(2)?,
            })
        })
        .map_err(sql_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(sql_err)
}

/// Insert cells with one cached statement. Call inside a transaction.
pub fn insert_all(
    conn: &Connection,
    project_id: i64,
    cells: &[MatrixCell],
) -> Result<usize, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO influence_cells (project_id, from_var_id, to_var_id, value)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .map_err(sql_err)?;
    for cell in cells {
        stmt.execute(params![project_id, cell.from_var_id, cell.to_var_id, cell.value])
            .map_err(sql_err)?;
    }
    Ok(cells.len())
}

pub fn delete_for_project(conn: &Connection, project_id: i64) -> Result<usize, StorageError> {
    conn.execute(
        "DELETE FROM influence_cells WHERE project_id = ?1",
        params![project_id],
    )
    .map_err(sql_err)
}

pub fn count(conn: &Connection, project_id: i64) -> Result<usize, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM influence_cells WHERE project_id = ?1",
        params![project_id],
        |row| row.get::<_, i64>(0),
    )
    .map(|n| n as usize)
    .map_err(sql_err)
}
