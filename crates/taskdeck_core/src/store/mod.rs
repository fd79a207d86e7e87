//! Authoritative task list state.
//!
//! # Responsibility
//! - Own the ordered task list and every mutation path into it.
//! - Keep the persisted slot in sync after each mutation.
//!
//! # Invariants
//! - View layers never mutate the list directly, only through store ops.

pub mod task_store;
