//! Core domain logic for the ticklist task tracker.
//! This crate is the single source of truth for store invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use logging::{default_log_level, init_logging};
pub use model::task::{Task, TaskId};
pub use repo::sqlite_repo::SqliteTaskStore;
pub use repo::task_repo::{MemoryTaskStore, StoreError, StoreResult, TaskStore};
