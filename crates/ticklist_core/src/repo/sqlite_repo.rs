//! SQLite task store implementation.
//!
//! # Responsibility
//! - Provide the persisted variant of the task store capability set.
//! - Keep SQL details and schema readiness checks inside the store boundary.
//!
//! # Invariants
//! - Construction fails unless the connection is migrated to the latest
//!   schema version with the expected `tasks` shape.
//! - `id` assignment is delegated to `AUTOINCREMENT`, so ids stay strictly
//!   increasing across deletions.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::migrations::latest_version;
use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{StoreError, StoreResult, TaskStore};
use rusqlite::{params, Connection, Row};

const TASK_SELECT_SQL: &str = "SELECT
    id,
    title,
    done
FROM tasks";

/// SQLite-backed task store.
///
/// Borrows the connection so callers can keep inspecting or closing it;
/// the store itself owns no database state.
pub struct SqliteTaskStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskStore<'conn> {
    /// Creates a store from a migrated connection.
    ///
    /// # Errors
    /// - [`StoreError::UninitializedConnection`] when `PRAGMA user_version`
    ///   does not match the latest migration.
    /// - [`StoreError::MissingRequiredTable`] / [`StoreError::MissingRequiredColumn`]
    ///   when the `tasks` shape has drifted from the migrated schema.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_store_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl TaskStore for SqliteTaskStore<'_> {
    fn create_task(&mut self, title: &str) -> StoreResult<Task> {
        self.conn.execute(
            "INSERT INTO tasks (title) VALUES (?1);",
            [title],
        )?;

        Ok(Task::new(self.conn.last_insert_rowid(), title))
    }

    fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();

        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn rename_task(&mut self, id: TaskId, title: &str) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE tasks SET title = ?2 WHERE id = ?1;",
            params![id, title],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    fn delete_task(&mut self, id: TaskId) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    fn toggle_done(&mut self, id: TaskId) -> StoreResult<()> {
        // Why: flipping in SQL leaves no read-modify-write window when
        // another connection shares the file.
        let changed = self
            .conn
            .execute("UPDATE tasks SET done = 1 - done WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_task_row(row: &Row<'_>) -> StoreResult<Task> {
    let done = match row.get::<_, i64>("done")? {
        0 => false,
        1 => true,
        other => {
            return Err(StoreError::InvalidData(format!(
                "invalid done value `{other}` in tasks.done"
            )));
        }
    };

    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        done,
    })
}

fn ensure_store_connection_ready(conn: &Connection) -> StoreResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "tasks")? {
        return Err(StoreError::MissingRequiredTable("tasks"));
    }

    for column in ["id", "title", "done"] {
        if !table_has_column(conn, "tasks", column)? {
            return Err(StoreError::MissingRequiredColumn {
                table: "tasks",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> StoreResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> StoreResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
