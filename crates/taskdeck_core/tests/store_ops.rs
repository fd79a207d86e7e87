use taskdeck_core::db::open_db_in_memory;
use taskdeck_core::{EditSession, SqliteStateRepository, TaskState, TaskStore};

#[test]
fn add_appends_in_progress_task() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::load(SqliteStateRepository::new(&conn)).unwrap();

    assert!(store.add("Buy milk").unwrap());

    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].title, "Buy milk");
    assert_eq!(store.tasks()[0].state, TaskState::InProgress);
}

#[test]
fn add_rejects_empty_and_whitespace_titles() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::load(SqliteStateRepository::new(&conn)).unwrap();

    assert!(!store.add("").unwrap());
    assert!(!store.add("   \t ").unwrap());
    assert!(store.is_empty());
}

#[test]
fn add_keeps_surrounding_whitespace_of_accepted_titles() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::load(SqliteStateRepository::new(&conn)).unwrap();

    assert!(store.add("  padded  ").unwrap());
    assert_eq!(store.tasks()[0].title, "  padded  ");
}

#[test]
fn remove_shifts_subsequent_tasks_left() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::load(SqliteStateRepository::new(&conn)).unwrap();
    store.add("a").unwrap();
    store.add("b").unwrap();
    store.add("c").unwrap();

    assert!(store.remove(1).unwrap());

    let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "c"]);
}

#[test]
fn out_of_range_indices_are_silent_noops() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::load(SqliteStateRepository::new(&conn)).unwrap();
    store.add("only").unwrap();

    assert!(!store.remove(7).unwrap());
    assert!(!store.edit_title(7, "ghost").unwrap());
    assert!(!store.toggle_state(7).unwrap());

    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].title, "only");
    assert_eq!(store.tasks()[0].state, TaskState::InProgress);
}

#[test]
fn toggle_twice_returns_to_original_state() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::load(SqliteStateRepository::new(&conn)).unwrap();
    store.add("flip me").unwrap();

    store.toggle_state(0).unwrap();
    assert_eq!(store.tasks()[0].state, TaskState::Completed);
    store.toggle_state(0).unwrap();
    assert_eq!(store.tasks()[0].state, TaskState::InProgress);
}

#[test]
fn edit_changes_title_but_not_state() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::load(SqliteStateRepository::new(&conn)).unwrap();
    store.add("Buy milk").unwrap();
    store.toggle_state(0).unwrap();

    assert!(store.edit_title(0, "Buy oat milk").unwrap());

    assert_eq!(store.tasks()[0].title, "Buy oat milk");
    assert_eq!(store.tasks()[0].state, TaskState::Completed);
}

#[test]
fn edit_allows_empty_title_unlike_add() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::load(SqliteStateRepository::new(&conn)).unwrap();
    store.add("soon blank").unwrap();

    assert!(store.edit_title(0, "").unwrap());
    assert_eq!(store.tasks()[0].title, "");
}

#[test]
fn edit_keeps_stable_task_id() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::load(SqliteStateRepository::new(&conn)).unwrap();
    store.add("rename me").unwrap();
    let id = store.tasks()[0].id;

    store.edit_title(0, "renamed").unwrap();
    assert_eq!(store.tasks()[0].id, id);
}

#[test]
fn edit_session_commits_buffer_through_store() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::load(SqliteStateRepository::new(&conn)).unwrap();
    store.add("draft title").unwrap();

    let mut session = EditSession::new();
    assert!(session.begin(0, store.tasks()));
    session.set_buffer("final title");
    assert!(session.confirm(&mut store).unwrap());

    assert_eq!(store.tasks()[0].title, "final title");
    assert_eq!(session.editing_index(), None);
}

#[test]
fn edit_session_confirm_without_active_edit_is_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::load(SqliteStateRepository::new(&conn)).unwrap();
    store.add("untouched").unwrap();

    let mut session = EditSession::new();
    assert!(!session.confirm(&mut store).unwrap());
    assert_eq!(store.tasks()[0].title, "untouched");
}

// The full interaction sequence of a single session.
#[test]
fn end_to_end_scenario() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::load(SqliteStateRepository::new(&conn)).unwrap();
    assert!(store.is_empty());

    store.add("Buy milk").unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].state, TaskState::InProgress);

    store.toggle_state(0).unwrap();
    assert_eq!(store.tasks()[0].state, TaskState::Completed);

    store.add("").unwrap();
    assert_eq!(store.len(), 1);

    store.edit_title(0, "Buy oat milk").unwrap();
    assert_eq!(store.tasks()[0].title, "Buy oat milk");
    assert_eq!(store.tasks()[0].state, TaskState::Completed);

    store.remove(0).unwrap();
    assert!(store.is_empty());
}
