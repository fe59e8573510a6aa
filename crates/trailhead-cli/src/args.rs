use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{DraftCommands, EventCommands, RouteCommands};

/// Create outdoor community events from the terminal
///
/// Trailhead walks an organizer through creating an event: pick an activity,
/// optionally a route, a date and start time, then a name and capacity. The
/// draft is saved after every change, so it can be edited one field at a time
/// with `draft` subcommands, interactively with `new`, or by an AI assistant
/// through the MCP server started with `serve`.
#[derive(Parser)]
#[command(version, about, name = "th")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/trailhead/trailhead.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to the draft file. Defaults to
    /// $XDG_DATA_HOME/trailhead/create-event-draft.json
    #[arg(long, global = true)]
    pub draft_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Trailhead CLI
///
/// - `draft`: Edit and submit the saved draft one field at a time
/// - `new`: Walk through the wizard interactively
/// - `route`: Browse the route catalog
/// - `event`: Browse created events
/// - `serve`: Start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Edit and submit the saved draft
    #[command(alias = "d")]
    Draft {
        #[command(subcommand)]
        command: DraftCommands,
    },
    /// Create an event interactively
    #[command(alias = "n")]
    New,
    /// Browse the route catalog
    #[command(alias = "r")]
    Route {
        #[command(subcommand)]
        command: RouteCommands,
    },
    /// Browse created events
    #[command(alias = "e")]
    Event {
        #[command(subcommand)]
        command: EventCommands,
    },
    /// Start the MCP server
    Serve,
}
