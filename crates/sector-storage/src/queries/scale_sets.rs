//! Queries for the scale_sets table.

use std::collections::BTreeMap;

use rusqlite::{params, Connection, OptionalExtension, Row};
use sector_core::errors::StorageError;
use sector_core::types::{NewScaleSet, Scale, ScaleSet};

use super::sql_err;

const COLUMNS: &str = "id, name, min_value, max_value, step, labels";

/// Raw row; labels are a JSON object in TEXT.
#[derive(Debug, Clone)]
struct ScaleSetRow {
    id: i64,
    name: String,
    min_value: f64,
    max_value: f64,
    step: f64,
    labels: Option<String>,
}

impl ScaleSetRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            min_value: row.get(2)?,
            max_value: row.get(3)?,
            step: row.get(4)?,
            labels: row.get(5)?,
        })
    }

    fn into_scale_set(self) -> Result<ScaleSet, StorageError> {
        let labels = match self.labels.as_deref() {
            Some(json) => Some(
                serde_json::from_str::<BTreeMap<String, String>>(json).map_err(|e| {
                    StorageError::sqlite(format!("scale set {} has invalid labels: {e}", self.id))
                })?,
            ),
            None => None,
        };
        let scale = Scale::new(self.min_value, self.max_value, self.step)
            .map_err(|e| StorageError::sqlite(format!("scale set {} is corrupt: {e}", self.id)))?
            .with_labels(labels);
        Ok(ScaleSet {
            id: self.id,
            name: self.name,
            scale,
        })
    }
}

fn labels_json(scale: &Scale) -> Result<Option<String>, StorageError> {
    scale
        .labels()
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| StorageError::sqlite(format!("failed to encode labels: {e}")))
}

/// Insert a scale set. Returns the row id.
pub fn insert(conn: &Connection, scale_set: &NewScaleSet) -> Result<i64, StorageError> {
    let scale = &scale_set.scale;
    conn.execute(
        "INSERT INTO scale_sets (name, min_value, max_value, step, labels)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            scale_set.name,
            scale.min(),
            scale.max(),
            scale.step(),
            labels_json(scale)?
        ],
    )
    .map_err(sql_err)?;
    Ok(conn.last_insert_rowid())
}

pub fn get(conn: &Connection, id: i64) -> Result<Option<ScaleSet>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!("SELECT {COLUMNS} FROM scale_sets WHERE id = ?1"))
        .map_err(sql_err)?;
    stmt.query_row(params![id], ScaleSetRow::from_row)
        .optional()
        .map_err(sql_err)?
        .map(ScaleSetRow::into_scale_set)
        .transpose()
}

/// First scale set with the given name, lowest id first.
pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<ScaleSet>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "SELECT {COLUMNS} FROM scale_sets WHERE name = ?1 ORDER BY id LIMIT 1"
        ))
        .map_err(sql_err)?;
    stmt.query_row(params![name], ScaleSetRow::from_row)
        .optional()
        .map_err(sql_err)?
        .map(ScaleSetRow::into_scale_set)
        .transpose()
}

pub fn list(conn: &Connection) -> Result<Vec<ScaleSet>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!("SELECT {COLUMNS} FROM scale_sets ORDER BY id"))
        .map_err(sql_err)?;
    let rows = stmt
        .query_map([], ScaleSetRow::from_row)
        .map_err(sql_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(sql_err)?;
    rows.into_iter().map(ScaleSetRow::into_scale_set).collect()
}

pub fn update(conn: &Connection, scale_set: &ScaleSet) -> Result<(), StorageError> {
    let scale = &scale_set.scale;
    conn.execute(
        "UPDATE scale_sets SET name = ?1, min_value = ?2, max_value = ?3, step = ?4, labels = ?5
         WHERE id = ?6",
        params![
            scale_set.name,
            scale.min(),
            scale.max(),
            scale.step(),
            labels_json(scale)?,
            scale_set.id
        ],
    )
    .map_err(sql_err)?;
    Ok(())
}

/// Delete a scale set. Returns the number of rows removed.
pub fn delete(conn: &Connection, id: i64) -> Result<usize, StorageError> {
    conn.execute("DELETE FROM scale_sets WHERE id = ?1", params![id])
        .map_err(sql_err)
}

/// Number of projects referencing the scale set.
pub fn count_projects(conn: &Connection, id: i64) -> Result<i64, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM projects WHERE scale_set_id = ?1",
        params![id],
        |row| row.get(0),
    )
    .map_err(sql_err)
}

/// Number of matrix cells held by projects using the scale set.
pub fn count_dependent_cells(conn: &Connection, id: i64) -> Result<i64, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM influence_cells c
         JOIN projects p ON p.id = c.project_id
         WHERE p.scale_set_id = ?1",
        params![id],
        |row| row.get(0),
    )
    .map_err(sql_err)
}
