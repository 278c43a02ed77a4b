//! Task store contract and in-memory implementation.
//!
//! # Responsibility
//! - Define the five-operation capability set every store variant provides.
//! - Provide the volatile in-memory variant used for throwaway sessions.
//!
//! # Invariants
//! - Ids are unique and strictly increasing in creation order; a deleted id
//!   is never assigned again.
//! - Listing returns tasks in insertion order.
//! - Store operations never log or print; failures surface as typed errors
//!   and rendering stays with the caller.

use crate::db::DbError;
use crate::model::task::{Task, TaskId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from task store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Referenced task id does not exist in the store.
    NotFound(TaskId),
    /// The persistence backend could not be reached or a call failed.
    Backend(DbError),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// Persisted data cannot be converted to a valid task.
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::Backend(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "task store requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "task store requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "task store requires column `{column}` in table `{table}`"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Backend(err) => Some(err),
            Self::NotFound(_) => None,
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Backend(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Backend(DbError::Sqlite(value))
    }
}

/// Capability set shared by every task store variant.
///
/// Mutating operations take `&mut self`: exactly one logical caller owns a
/// store at a time, and exclusive borrows encode that rule directly.
pub trait TaskStore {
    /// Creates one task with the next free id and `done = false`.
    ///
    /// # Contract
    /// - The new id is strictly greater than every id ever assigned, even
    ///   after deletions.
    /// - The title is stored as given; input validation is the caller's job.
    fn create_task(&mut self, title: &str) -> StoreResult<Task>;
    /// Lists all tasks in insertion order. Empty is a valid result.
    fn list_tasks(&self) -> StoreResult<Vec<Task>>;
    /// Replaces the title of one task, leaving its done flag untouched.
    fn rename_task(&mut self, id: TaskId, title: &str) -> StoreResult<()>;
    /// Removes one task, preserving the relative order of the rest.
    fn delete_task(&mut self, id: TaskId) -> StoreResult<()>;
    /// Flips the done flag of one task.
    fn toggle_done(&mut self, id: TaskId) -> StoreResult<()>;
}

/// Volatile in-memory task store.
///
/// Holds the sequence and the next-id counter directly; contents are
/// discarded at process exit. Lookups are linear scans, which is fine at
/// the list sizes an interactive session produces. The only error this
/// variant can return is [`StoreError::NotFound`].
#[derive(Debug)]
pub struct MemoryTaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl Default for MemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTaskStore {
    /// Creates an empty store with the id counter at 1.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

impl TaskStore for MemoryTaskStore {
    fn create_task(&mut self, title: &str) -> StoreResult<Task> {
        let task = Task::new(self.next_id, title);
        self.next_id += 1;
        self.tasks.push(task.clone());
        Ok(task)
    }

    fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn rename_task(&mut self, id: TaskId, title: &str) -> StoreResult<()> {
        match self.position(id) {
            Some(index) => {
                self.tasks[index].title = title.to_string();
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    fn delete_task(&mut self, id: TaskId) -> StoreResult<()> {
        match self.position(id) {
            Some(index) => {
                self.tasks.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    fn toggle_done(&mut self, id: TaskId) -> StoreResult<()> {
        match self.position(id) {
            Some(index) => {
                self.tasks[index].done = !self.tasks[index].done;
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }
}
