//! Task store: ordered task list with save-on-mutation persistence.
//!
//! # Responsibility
//! - Provide add/remove/edit/toggle/list entry points for UI callers.
//! - Serialize the full list to the durable slot after every mutation.
//!
//! # Invariants
//! - A missing or undecodable persisted blob loads as an empty list.
//! - Out-of-range indices are silent no-ops; the UI cannot produce them
//!   under normal interaction, so they never surface as errors.
//! - Adds reject whitespace-only titles; edits are not validated and may
//!   produce empty titles.

use crate::model::task::Task;
use crate::repo::state_repo::{RepoError, StateRepository};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed slot key the serialized task list is stored under.
pub const TASK_LIST_KEY: &str = "task_list";

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for task store operations.
///
/// Only transport-level failures surface here; decode failures on load are
/// handled by falling back to an empty list.
#[derive(Debug)]
pub enum StoreError {
    Repo(RepoError),
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode task list: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Owns the authoritative ordered task list.
///
/// Generic over the repository so tests and alternative backends can plug
/// in without touching list semantics.
pub struct TaskStore<R: StateRepository> {
    repo: R,
    tasks: Vec<Task>,
}

impl<R: StateRepository> TaskStore<R> {
    /// Loads the store from the durable slot.
    ///
    /// # Contract
    /// - Missing slot -> empty list.
    /// - Blob that fails JSON decoding or has the wrong shape -> empty
    ///   list, logged at warn, never an error.
    /// - Repository transport failures propagate.
    pub fn load(repo: R) -> StoreResult<Self> {
        let tasks = match repo.load_blob(TASK_LIST_KEY)? {
            Some(blob) => match serde_json::from_str::<Vec<Task>>(&blob) {
                Ok(tasks) => {
                    info!(
                        "event=state_load module=store status=ok tasks={}",
                        tasks.len()
                    );
                    tasks
                }
                Err(err) => {
                    warn!(
                        "event=state_load module=store status=recovered reason=undecodable_blob error={err}"
                    );
                    Vec::new()
                }
            },
            None => {
                info!("event=state_load module=store status=ok tasks=0 slot=absent");
                Vec::new()
            }
        };

        Ok(Self { repo, tasks })
    }

    /// Appends a new in-progress task.
    ///
    /// Returns `Ok(false)` without touching the list when the trimmed title
    /// is empty. The stored title keeps the caller's original whitespace.
    pub fn add(&mut self, title: &str) -> StoreResult<bool> {
        if title.trim().is_empty() {
            debug!("event=task_add module=store status=rejected reason=empty_title");
            return Ok(false);
        }

        self.tasks.push(Task::new(title));
        self.persist()?;
        info!("event=task_add module=store status=ok tasks={}", self.tasks.len());
        Ok(true)
    }

    /// Removes the task at `index`, shifting subsequent tasks left.
    ///
    /// Out-of-range indices are a silent no-op returning `Ok(false)`.
    pub fn remove(&mut self, index: usize) -> StoreResult<bool> {
        if index >= self.tasks.len() {
            warn!("event=task_remove module=store status=noop reason=out_of_range index={index}");
            return Ok(false);
        }

        self.tasks.remove(index);
        self.persist()?;
        info!("event=task_remove module=store status=ok index={index}");
        Ok(true)
    }

    /// Replaces the title at `index`; the state is untouched.
    ///
    /// No empty-string check is applied here, unlike [`Self::add`].
    pub fn edit_title(&mut self, index: usize, new_title: &str) -> StoreResult<bool> {
        let Some(task) = self.tasks.get_mut(index) else {
            warn!("event=task_edit module=store status=noop reason=out_of_range index={index}");
            return Ok(false);
        };

        task.title = new_title.to_string();
        self.persist()?;
        info!("event=task_edit module=store status=ok index={index}");
        Ok(true)
    }

    /// Flips the task at `index` between `InProgress` and `Completed`.
    pub fn toggle_state(&mut self, index: usize) -> StoreResult<bool> {
        let Some(task) = self.tasks.get_mut(index) else {
            warn!("event=task_toggle module=store status=noop reason=out_of_range index={index}");
            return Ok(false);
        };

        task.toggle_state();
        self.persist()?;
        info!("event=task_toggle module=store status=ok index={index}");
        Ok(true)
    }

    /// Read-only view of the list in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Writes the full list to the slot. Called after every mutation; a
    /// failed write loses at most this one pending change.
    fn persist(&self) -> StoreResult<()> {
        let blob = serde_json::to_string(&self.tasks).map_err(StoreError::Encode)?;
        self.repo.save_blob(TASK_LIST_KEY, &blob)?;
        debug!(
            "event=state_save module=store status=ok bytes={}",
            blob.len()
        );
        Ok(())
    }
}
