//! Domain model for the task tracker.
//!
//! # Responsibility
//! - Define the canonical data record used by store implementations.
//!
//! # Invariants
//! - Every task is identified by a stable positive `TaskId`.
//! - Deletion removes the record; there are no tombstones.

pub mod task;
