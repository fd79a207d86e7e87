//! Per-row edit-mode state machine.
//!
//! # Responsibility
//! - Hold the edit buffer for the single row currently being edited.
//! - Commit the buffer through the store on confirm.
//!
//! # Invariants
//! - At most one row is in edit mode at a time; beginning an edit on a
//!   different row silently discards the uncommitted buffer. There is no
//!   explicit cancel action.

use crate::model::task::Task;
use crate::repo::state_repo::StateRepository;
use crate::store::task_store::{StoreResult, TaskStore};

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveEdit {
    index: usize,
    buffer: String,
}

/// Tracks which row, if any, is in edit mode and its pending title text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    active: Option<ActiveEdit>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters edit mode for `index`, seeding the buffer with the current
    /// title. Any uncommitted buffer for another row is dropped.
    ///
    /// Returns false (and stays unchanged) for an out-of-range index.
    pub fn begin(&mut self, index: usize, tasks: &[Task]) -> bool {
        let Some(task) = tasks.get(index) else {
            return false;
        };

        self.active = Some(ActiveEdit {
            index,
            buffer: task.title.clone(),
        });
        true
    }

    /// Replaces the pending buffer text. No-op when no edit is active.
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        if let Some(active) = self.active.as_mut() {
            active.buffer = text.into();
        }
    }

    /// Commits the buffer via the store and leaves edit mode.
    ///
    /// Returns `Ok(false)` when no edit is active. Note the committed title
    /// is not validated; an empty buffer produces an empty title.
    pub fn confirm<R: StateRepository>(&mut self, store: &mut TaskStore<R>) -> StoreResult<bool> {
        let Some(active) = self.active.take() else {
            return Ok(false);
        };

        store.edit_title(active.index, &active.buffer)
    }

    /// Index of the row in edit mode, if any.
    pub fn editing_index(&self) -> Option<usize> {
        self.active.as_ref().map(|active| active.index)
    }

    /// Pending buffer text, if an edit is active.
    pub fn buffer(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.buffer.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::EditSession;
    use crate::model::task::Task;

    fn tasks() -> Vec<Task> {
        vec![Task::new("first"), Task::new("second")]
    }

    #[test]
    fn begin_seeds_buffer_from_current_title() {
        let tasks = tasks();
        let mut session = EditSession::new();

        assert!(session.begin(1, &tasks));
        assert_eq!(session.editing_index(), Some(1));
        assert_eq!(session.buffer(), Some("second"));
    }

    #[test]
    fn begin_out_of_range_is_a_noop() {
        let tasks = tasks();
        let mut session = EditSession::new();

        assert!(!session.begin(5, &tasks));
        assert_eq!(session.editing_index(), None);
    }

    #[test]
    fn starting_another_edit_discards_uncommitted_buffer() {
        let tasks = tasks();
        let mut session = EditSession::new();

        session.begin(0, &tasks);
        session.set_buffer("half-typed change");
        session.begin(1, &tasks);

        assert_eq!(session.editing_index(), Some(1));
        assert_eq!(session.buffer(), Some("second"));
    }

    #[test]
    fn set_buffer_without_active_edit_is_ignored() {
        let mut session = EditSession::new();
        session.set_buffer("orphan");
        assert_eq!(session.buffer(), None);
    }
}
