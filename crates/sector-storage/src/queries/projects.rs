//! Queries for the projects table.

use rusqlite::{params, Connection, OptionalExtension, Row};
use sector_core::errors::StorageError;
use sector_core::types::{NewProject, Project};

use super::sql_err;

fn map_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        scale_set_id: row.get(3)?,
    })
}

pub fn insert(conn: &Connection, project: &NewProject) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO projects (name, description, scale_set_id) VALUES (?1, ?2, ?3)",
        params![project.name, project.description, project.scale_set_id],
    )
    .map_err(sql_err)?;
    Ok(conn.last_insert_rowid())
}

pub fn get(conn: &Connection, id: i64) -> Result<Option<Project>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT id, name, description, scale_set_id FROM projects WHERE id = ?1")
        .map_err(sql_err)?;
    stmt.query_row(params![id], map_row)
        .optional()
        .map_err(sql_err)
}

pub fn list(conn: &Connection) -> Result<Vec<Project>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT id, name, description, scale_set_id FROM projects ORDER BY id")
        .map_err(sql_err)?;
    let rows = stmt.query_map([], map_row).map_err(sql_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(sql_err)
}

pub fn update(conn: &Connection, project: &Project) -> Result<(), StorageError> {
    conn.execute(
        "UPDATE projects SET name = ?1, description = ?2, scale_set_id = ?3 WHERE id = ?4",
        params![
            project.name,
            project.description,
            project.scale_set_id,
            project.id
        ],
    )
    .map_err(sql_err)?;
    Ok(())
}

/// Delete a project row. Variables and cells cascade.
pub fn delete(conn: &Connection, id: i64) -> Result<usize, StorageError> {
    conn.execute("DELETE FROM projects WHERE id = ?1", params![id])
        .map_err(sql_err)
}
