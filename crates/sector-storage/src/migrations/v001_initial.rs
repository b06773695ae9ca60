//! v001: scale sets, projects, variables, influence cells.
//!
//! Variable order is creation order (`id` ascending), so `variables.id` uses
//! AUTOINCREMENT to stay monotonic across deletes.

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS scale_sets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    min_value REAL NOT NULL,
    max_value REAL NOT NULL,
    step REAL NOT NULL,
    labels TEXT
) STRICT;

CREATE INDEX IF NOT EXISTS idx_scale_sets_name ON scale_sets(name);

CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT,
    scale_set_id INTEGER NOT NULL REFERENCES scale_sets(id) ON DELETE RESTRICT
) STRICT;

CREATE INDEX IF NOT EXISTS idx_projects_scale ON projects(scale_set_id);

CREATE TABLE IF NOT EXISTS variables (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    project_id INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
    code TEXT,
    name TEXT NOT NULL,
    description TEXT
) STRICT;

CREATE INDEX IF NOT EXISTS idx_variables_project ON variables(project_id, id);

CREATE TABLE IF NOT EXISTS influence_cells (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    project_id INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
    from_var_id INTEGER NOT NULL REFERENCES variables(id) ON DELETE CASCADE,
    to_var_id INTEGER NOT NULL REFERENCES variables(id) ON DELETE CASCADE,
    value REAL NOT NULL,
    UNIQUE(project_id, from_var_id, to_var_id)
) STRICT;

CREATE INDEX IF NOT EXISTS idx_cells_project ON influence_cells(project_id);
"#;
