//! Visible-subset computation.
//!
//! # Responsibility
//! - Apply the in-progress toggle and the live search query to the list.
//!
//! # Invariants
//! - Pure: recomputed per render, never mutates the list.
//! - Returned indices are positions in the unfiltered list, so callers can
//!   address the store directly.

use crate::model::task::{FilterCriteria, Task};

/// Returns the visible tasks with their original list indices.
///
/// A task is visible iff it passes the in-progress toggle and its title
/// contains the search query case-insensitively. An empty query matches
/// every title.
pub fn visible_tasks<'a>(
    tasks: &'a [Task],
    criteria: &FilterCriteria,
) -> Vec<(usize, &'a Task)> {
    let query = criteria.search_query.to_lowercase();

    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| !criteria.show_in_progress || task.is_in_progress())
        .filter(|(_, task)| task.title.to_lowercase().contains(&query))
        .collect()
}
