//! Store layer contracts and implementations.
//!
//! # Responsibility
//! - Define the task store capability set callers program against.
//! - Isolate SQLite query details from command dispatch.
//!
//! # Invariants
//! - Store APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.
//! - Both variants observe the same id and ordering guarantees, so callers
//!   cannot tell them apart through the contract.

pub mod sqlite_repo;
pub mod task_repo;
