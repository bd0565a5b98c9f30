//! Command line surface.

use models::ResourceId;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// tasknotes: tasks and notes from the command line.
#[derive(Debug, Parser)]
#[command(name = "tasknotes", version, about)]
pub struct Cli {
    /// Path to a tasknotes.toml, instead of the platform config directory.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at trace level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Keep the session token in memory only; nothing is written to disk.
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session token.
    Login(LoginArgs),

    /// Create an account and log in.
    Register(RegisterArgs),

    /// Forget the stored session token.
    Logout,

    /// Show whether a session token is stored.
    Whoami,

    /// Manage tasks.
    #[command(subcommand)]
    Tasks(TasksCommand),

    /// Manage notes.
    #[command(subcommand)]
    Notes(NotesCommand),

    /// Manage categories.
    #[command(subcommand)]
    Categories(CategoriesCommand),
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(short, long)]
    pub username: String,

    #[arg(short, long, env = "TASKNOTES_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(short, long)]
    pub username: String,

    #[arg(short, long, env = "TASKNOTES_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Must match --password.
    #[arg(long)]
    pub confirm_password: String,
}

/// Paging for list commands.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only items matching this text.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Number of pages to load.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,
}

#[derive(Debug, Subcommand)]
pub enum TasksCommand {
    /// List tasks.
    List(ListArgs),

    /// Add a task.
    Add(TaskFields),

    /// Replace a task's fields.
    Update {
        id: ResourceId,
        #[command(flatten)]
        fields: TaskFields,
    },

    /// Delete a task and show the reloaded list.
    Delete { id: ResourceId },
}

#[derive(Debug, Args)]
pub struct TaskFields {
    #[arg(short, long)]
    pub title: String,

    #[arg(short, long)]
    pub description: String,

    /// RFC 3339 timestamp or YYYY-MM-DD.
    #[arg(long, value_parser = parse_due_date)]
    pub due: DateTime<Utc>,

    #[arg(long)]
    pub completed: bool,
}

#[derive(Debug, Subcommand)]
pub enum NotesCommand {
    /// List notes.
    List(ListArgs),

    /// Add a note.
    Add(NoteFields),

    /// Replace a note's fields.
    Update {
        id: ResourceId,
        #[command(flatten)]
        fields: NoteFields,
    },

    /// Delete a note and show the reloaded list.
    Delete { id: ResourceId },
}

#[derive(Debug, Args)]
pub struct NoteFields {
    #[arg(short, long)]
    pub title: String,

    #[arg(long)]
    pub content: String,

    #[arg(long)]
    pub image_url: Option<String>,

    #[arg(long)]
    pub link: Option<String>,

    #[arg(long)]
    pub category: Option<ResourceId>,

    /// RFC 3339 timestamp or YYYY-MM-DD.
    #[arg(long, value_parser = parse_due_date)]
    pub due: Option<DateTime<Utc>>,

    #[arg(long)]
    pub completed: bool,
}

#[derive(Debug, Subcommand)]
pub enum CategoriesCommand {
    /// List categories with their note counts.
    List,

    /// Add a category.
    Add { name: String },
}

/// Accepts `2026-10-20T09:00:00Z` or `2026-10-20` (midnight UTC).
pub fn parse_due_date(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| format!("invalid date '{raw}': expected RFC 3339 or YYYY-MM-DD"))
}
