//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its persisted shape.
//! - Define the transient filter criteria used by view logic.
//!
//! # Invariants
//! - Every task carries a stable `TaskId` for its lifetime.
//! - Task identity for store operations remains the positional index.

pub mod task;
