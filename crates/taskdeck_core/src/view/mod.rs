//! Pure view logic: filtering and per-row edit mode.
//!
//! # Responsibility
//! - Compute the visible task subset for the current filter criteria.
//! - Track the single active edit buffer for the UI.
//!
//! # Invariants
//! - Nothing in this module mutates the task list except an edit commit
//!   routed through the store.

pub mod edit;
pub mod filter;
