//! Task record and state tags.
//!
//! # Responsibility
//! - Define `Task` and its two-state lifecycle.
//! - Keep the persisted JSON shape stable across sessions.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `state` string tags are `"In Progress"` and `"Completed"`; blobs
//!   written by earlier versions without an `id` field must still load.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Store operations address tasks by positional index; the id exists so a
/// row keeps its identity across list reshuffles and reloads.
pub type TaskId = Uuid;

/// Completion state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskState {
    /// Created and not yet completed.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Checked off by the user.
    #[serde(rename = "Completed")]
    Completed,
}

impl TaskState {
    /// Returns the opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Self::InProgress => Self::Completed,
            Self::Completed => Self::InProgress,
        }
    }
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id; generated on load for blobs that predate the field.
    #[serde(default = "fresh_task_id")]
    pub id: TaskId,
    /// Display text. Non-empty at creation; edits are not validated, so an
    /// edited title may become empty.
    pub title: String,
    pub state: TaskState,
}

impl Task {
    /// Creates a task with a generated stable id and state `InProgress`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            state: TaskState::InProgress,
        }
    }

    /// Flips the completion state in place.
    pub fn toggle_state(&mut self) {
        self.state = self.state.toggled();
    }

    pub fn is_in_progress(&self) -> bool {
        self.state == TaskState::InProgress
    }
}

/// Transient view filter. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against titles. Empty matches all.
    pub search_query: String,
    /// When true, only `InProgress` tasks are visible.
    pub show_in_progress: bool,
}

fn fresh_task_id() -> TaskId {
    Uuid::new_v4()
}
