//! Task domain model.
//!
//! # Responsibility
//! - Define the single data record the store operates on.
//!
//! # Invariants
//! - `id` is positive, assigned once by a store, and never reused for
//!   another task.
//! - `done` starts as `false` on every freshly created task.

use serde::{Deserialize, Serialize};

/// Stable identifier assigned to every task at creation.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Values are always positive; `i64` matches the SQLite rowid domain used
/// by the persisted store.
pub type TaskId = i64;

/// One to-do item.
///
/// A plain record with no behavior of its own: stores mutate `title` and
/// `done` in place through their own operations. The serialized field names
/// (`id`, `title`, `done`) are the wire shape external consumers rely on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier, unique for the lifetime of the store.
    pub id: TaskId,
    /// User-facing text. Non-empty by dispatcher contract; the store does
    /// not validate it.
    pub title: String,
    /// Completion flag, flipped by the toggle operation.
    pub done: bool,
}

impl Task {
    /// Creates a task with the given id and title and `done = false`.
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }
}
