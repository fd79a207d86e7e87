//! Core logic for taskdeck, a locally persisted task list.
//! This crate is the single source of truth for list state and invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{FilterCriteria, Task, TaskId, TaskState};
pub use repo::state_repo::{RepoError, RepoResult, SqliteStateRepository, StateRepository};
pub use store::task_store::{StoreError, StoreResult, TaskStore, TASK_LIST_KEY};
pub use view::edit::EditSession;
pub use view::filter::visible_tasks;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
