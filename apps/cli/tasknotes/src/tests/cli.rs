// Unit tests for argument parsing

use crate::cli::{Cli, Command, NotesCommand, TasksCommand, parse_due_date};

use chrono::{TimeZone, Utc};
use clap::{CommandFactory, Parser};

/// **VALUE**: The clap definition is internally consistent.
///
/// **BUG THIS CATCHES**: Would catch duplicate short flags or conflicting globals,
/// which clap only reports at runtime.
#[test]
fn given_cli_definition_when_debug_asserted_then_valid() {
    Cli::command().debug_assert();
}

/// **VALUE**: Global flags work after the subcommand and list flags parse.
#[test]
fn given_tasks_list_args_when_parsed_then_search_and_pages_set() {
    let cli = Cli::try_parse_from([
        "tasknotes", "tasks", "list", "--search", "milk", "--pages", "3", "--ephemeral",
    ])
    .expect("valid args");

    assert!(cli.ephemeral);
    match cli.command {
        Command::Tasks(TasksCommand::List(args)) => {
            assert_eq!(args.search.as_deref(), Some("milk"));
            assert_eq!(args.pages, 3);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

/// **VALUE**: `--pages 0` is rejected at parse time.
#[test]
fn given_zero_pages_when_parsed_then_error() {
    let result = Cli::try_parse_from(["tasknotes", "notes", "list", "--pages", "0"]);
    assert!(result.is_err());
}

/// **VALUE**: Task commands require a due date; notes do not.
///
/// **BUG THIS CATCHES**: Would catch the due date becoming optional for tasks,
/// which the backend rejects.
#[test]
fn given_add_commands_without_due_date_when_parsed_then_only_tasks_fail() {
    let task = Cli::try_parse_from([
        "tasknotes", "tasks", "add", "--title", "Pay rent", "-d", "March",
    ]);
    let note = Cli::try_parse_from([
        "tasknotes", "notes", "add", "--title", "Idea", "--content", "ship it",
    ])
    .expect("note without due date");

    assert!(task.is_err());
    assert!(matches!(note.command, Command::Notes(NotesCommand::Add(_))));
}

/// **VALUE**: Task commands require a description, matching the draft validation.
///
/// **BUG THIS CATCHES**: Would catch a blank default that parses fine and then
/// fails later with a less helpful validation error.
#[test]
fn given_task_add_without_description_when_parsed_then_fails() {
    let without = Cli::try_parse_from([
        "tasknotes", "tasks", "add", "-t", "Pay rent", "--due", "2026-10-20",
    ]);
    let with = Cli::try_parse_from([
        "tasknotes", "tasks", "add", "-t", "Pay rent", "-d", "March", "--due", "2026-10-20",
    ])
    .expect("full task arguments");

    assert!(without.is_err());
    match with.command {
        Command::Tasks(TasksCommand::Add(fields)) => assert_eq!(fields.description, "March"),
        other => panic!("unexpected command: {other:?}"),
    }
}

/// **VALUE**: Dates are accepted as RFC 3339 or plain calendar days.
#[test]
fn given_date_inputs_when_parsed_then_utc_timestamps() {
    assert_eq!(
        parse_due_date("2026-10-20"),
        Ok(Utc.with_ymd_and_hms(2026, 10, 20, 0, 0, 0).unwrap())
    );
    assert_eq!(
        parse_due_date("2026-10-20T11:30:00+02:00"),
        Ok(Utc.with_ymd_and_hms(2026, 10, 20, 9, 30, 0).unwrap())
    );
    assert!(parse_due_date("tomorrow").is_err());
    assert!(parse_due_date("2026-02-30").is_err());
}
