//! Command-line surface for the task list.
//!
//! # Responsibility
//! - Map subcommands onto task store operations.
//! - Provide an interactive session with live search, an in-progress-only
//!   toggle, and the two-step edit flow.

use clap::{Parser, Subcommand};
use log::{debug, info};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use taskdeck_core::db::open_db;
use taskdeck_core::{
    core_version, init_logging, visible_tasks, EditSession, FilterCriteria,
    SqliteStateRepository, StateRepository, StoreResult, Task, TaskStore,
};

#[derive(Parser)]
#[command(
    name = "taskdeck",
    version = core_version(),
    about = "A locally persisted task list"
)]
struct Cli {
    /// Database file holding the task list.
    #[arg(long, default_value = "taskdeck.db")]
    db: PathBuf,

    /// Enable file logging into this directory (absolute path).
    #[arg(long)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a task. Whitespace-only titles are rejected silently.
    Add { title: String },
    /// Show tasks with their indices, optionally filtered.
    List {
        /// Case-insensitive substring to match against titles.
        #[arg(long, default_value = "")]
        search: String,
        /// Show only tasks that are still in progress.
        #[arg(long)]
        in_progress: bool,
    },
    /// Remove the task at INDEX (as shown by `list`).
    Remove { index: usize },
    /// Replace the title of the task at INDEX.
    Edit { index: usize, title: String },
    /// Flip the task at INDEX between in-progress and completed.
    Toggle { index: usize },
    /// Interactive session; type `help` at the prompt for commands.
    Ui,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::List { .. } => "list",
            Self::Remove { .. } => "remove",
            Self::Edit { .. } => "edit",
            Self::Toggle { .. } => "toggle",
            Self::Ui => "ui",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = &cli.log_dir {
        init_logging(taskdeck_core::default_log_level(), log_dir)?;
    }

    let conn = open_db(&cli.db)?;
    let mut store = TaskStore::load(SqliteStateRepository::new(&conn))?;
    info!(
        "event=cli_start module=cli status=ok core_version={} tasks={}",
        core_version(),
        store.len()
    );
    debug!("event=cli_dispatch module=cli command={}", cli.command.name());

    match cli.command {
        Command::Add { title } => {
            if store.add(&title)? {
                println!("added: {title}");
            } else {
                println!("nothing added (empty title)");
            }
        }
        Command::List {
            search,
            in_progress,
        } => {
            let criteria = FilterCriteria {
                search_query: search,
                show_in_progress: in_progress,
            };
            render(store.tasks(), &criteria, None);
        }
        Command::Remove { index } => {
            if !store.remove(index)? {
                println!("no task at index {index}");
            }
        }
        Command::Edit { index, title } => {
            if !store.edit_title(index, &title)? {
                println!("no task at index {index}");
            }
        }
        Command::Toggle { index } => {
            if !store.toggle_state(index)? {
                println!("no task at index {index}");
            }
        }
        Command::Ui => interactive(&mut store)?,
    }

    Ok(())
}

fn render(tasks: &[Task], criteria: &FilterCriteria, session: Option<&EditSession>) {
    let visible = visible_tasks(tasks, criteria);
    if visible.is_empty() {
        println!("no tasks match");
        return;
    }

    let editing = session.and_then(EditSession::editing_index);
    for (index, task) in visible {
        let marker = if task.is_in_progress() { " " } else { "x" };
        if editing == Some(index) {
            let buffer = session.and_then(EditSession::buffer).unwrap_or_default();
            println!("[{index}] ({marker}) {} [editing: {buffer}]", task.title);
        } else {
            println!("[{index}] ({marker}) {}", task.title);
        }
    }
}

const UI_HELP: &str = "\
commands:
  add <title>     add a task
  rm <index>      remove a task
  toggle <index>  flip in-progress/completed
  edit <index>    start editing (seeds the buffer with the current title)
  set <text>      replace the pending edit buffer
  confirm [text]  commit the pending edit, optionally replacing the buffer
  search <text>   set the live search query (empty to clear)
  ongoing on|off  show only in-progress tasks
  list            redraw the task list
  quit            exit";

/// What the interactive loop should do after a line was handled.
#[derive(Debug, PartialEq, Eq)]
enum UiAction {
    Redraw,
    Skip,
    Quit,
}

/// Line-based interactive session.
///
/// Filtering is recomputed on every redraw; the edit buffer follows the
/// single-active-edit rule, so `edit` on another row drops an uncommitted
/// buffer without warning.
fn interactive<R: StateRepository>(store: &mut TaskStore<R>) -> Result<(), Box<dyn Error>> {
    let mut criteria = FilterCriteria::default();
    let mut session = EditSession::new();
    let stdin = io::stdin();

    render(store.tasks(), &criteria, Some(&session));
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        match dispatch_ui_line(line.trim_end_matches(['\n', '\r']), store, &mut criteria, &mut session)? {
            UiAction::Redraw => render(store.tasks(), &criteria, Some(&session)),
            UiAction::Skip => {}
            UiAction::Quit => return Ok(()),
        }
    }
}

/// Handles one line of the interactive session.
fn dispatch_ui_line<R: StateRepository>(
    line: &str,
    store: &mut TaskStore<R>,
    criteria: &mut FilterCriteria,
    session: &mut EditSession,
) -> StoreResult<UiAction> {
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest),
        None => (line, ""),
    };

    match command {
        "add" => {
            store.add(rest)?;
        }
        "rm" => match rest.trim().parse::<usize>() {
            Ok(index) => {
                store.remove(index)?;
            }
            Err(_) => println!("usage: rm <index>"),
        },
        "toggle" => match rest.trim().parse::<usize>() {
            Ok(index) => {
                store.toggle_state(index)?;
            }
            Err(_) => println!("usage: toggle <index>"),
        },
        "edit" => match rest.trim().parse::<usize>() {
            Ok(index) => {
                if !session.begin(index, store.tasks()) {
                    println!("no task at index {index}");
                }
            }
            Err(_) => println!("usage: edit <index>"),
        },
        "set" => {
            if session.editing_index().is_none() {
                println!("no edit in progress; use `edit <index>` first");
            } else {
                session.set_buffer(rest);
            }
        }
        "confirm" => {
            if session.editing_index().is_none() {
                println!("no edit in progress");
            } else {
                if !rest.is_empty() {
                    session.set_buffer(rest);
                }
                session.confirm(store)?;
            }
        }
        "search" => criteria.search_query = rest.to_string(),
        "ongoing" => match rest.trim() {
            "on" => criteria.show_in_progress = true,
            "off" => criteria.show_in_progress = false,
            _ => println!("usage: ongoing on|off"),
        },
        "list" => {}
        "help" => {
            println!("{UI_HELP}");
            return Ok(UiAction::Skip);
        }
        "quit" | "exit" => return Ok(UiAction::Quit),
        "" => return Ok(UiAction::Skip),
        other => {
            println!("unknown command `{other}`; type `help`");
            return Ok(UiAction::Skip);
        }
    }

    Ok(UiAction::Redraw)
}

#[cfg(test)]
mod tests {
    use super::{dispatch_ui_line, Cli, UiAction};
    use clap::CommandFactory;
    use taskdeck_core::db::open_db_in_memory;
    use taskdeck_core::{core_version, EditSession, FilterCriteria, SqliteStateRepository, TaskStore};

    #[test]
    fn cli_reports_the_core_crate_version() {
        let command = Cli::command();
        assert_eq!(command.get_version(), Some(core_version()));
    }

    #[test]
    fn confirm_accepts_replacement_text() {
        let conn = open_db_in_memory().unwrap();
        let mut store = TaskStore::load(SqliteStateRepository::new(&conn)).unwrap();
        store.add("draft").unwrap();
        let mut criteria = FilterCriteria::default();
        let mut session = EditSession::new();

        dispatch_ui_line("edit 0", &mut store, &mut criteria, &mut session).unwrap();
        let action =
            dispatch_ui_line("confirm final title", &mut store, &mut criteria, &mut session)
                .unwrap();

        assert_eq!(action, UiAction::Redraw);
        assert_eq!(store.tasks()[0].title, "final title");
        assert_eq!(session.editing_index(), None);
    }

    #[test]
    fn bare_confirm_commits_the_seeded_buffer() {
        let conn = open_db_in_memory().unwrap();
        let mut store = TaskStore::load(SqliteStateRepository::new(&conn)).unwrap();
        store.add("keep me").unwrap();
        let mut criteria = FilterCriteria::default();
        let mut session = EditSession::new();

        dispatch_ui_line("edit 0", &mut store, &mut criteria, &mut session).unwrap();
        dispatch_ui_line("confirm", &mut store, &mut criteria, &mut session).unwrap();

        assert_eq!(store.tasks()[0].title, "keep me");
        assert_eq!(session.editing_index(), None);
    }

    #[test]
    fn search_and_ongoing_update_the_criteria() {
        let conn = open_db_in_memory().unwrap();
        let mut store = TaskStore::load(SqliteStateRepository::new(&conn)).unwrap();
        let mut criteria = FilterCriteria::default();
        let mut session = EditSession::new();

        dispatch_ui_line("search milk", &mut store, &mut criteria, &mut session).unwrap();
        dispatch_ui_line("ongoing on", &mut store, &mut criteria, &mut session).unwrap();
        assert_eq!(criteria.search_query, "milk");
        assert!(criteria.show_in_progress);

        dispatch_ui_line("ongoing off", &mut store, &mut criteria, &mut session).unwrap();
        assert!(!criteria.show_in_progress);
    }

    #[test]
    fn quit_and_unknown_commands_do_not_touch_the_store() {
        let conn = open_db_in_memory().unwrap();
        let mut store = TaskStore::load(SqliteStateRepository::new(&conn)).unwrap();
        store.add("untouched").unwrap();
        let mut criteria = FilterCriteria::default();
        let mut session = EditSession::new();

        let quit = dispatch_ui_line("quit", &mut store, &mut criteria, &mut session).unwrap();
        assert_eq!(quit, UiAction::Quit);

        let unknown = dispatch_ui_line("frobnicate", &mut store, &mut criteria, &mut session).unwrap();
        assert_eq!(unknown, UiAction::Skip);
        assert_eq!(store.len(), 1);
    }
}
