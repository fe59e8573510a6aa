//! Trailhead CLI
//!
//! Command-line interface and MCP server for creating outdoor community
//! events.

mod args;
mod cli;
mod interactive;
mod mcp;
mod renderer;

use std::io;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use interactive::Session;
use log::info;
use mcp::{run_stdio_server, TrailheadMcpServer};
use renderer::TerminalRenderer;
use trailhead_core::{params::ListEvents, OrganizerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        draft_file,
        no_color,
        command,
    } = Args::parse();

    let organizer = OrganizerBuilder::new()
        .with_database_path(database_file)
        .with_draft_path(draft_file)
        .build()
        .await
        .context("Failed to initialize organizer")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Trailhead started");

    match command {
        Some(Draft { command }) => {
            Cli::new(organizer, renderer)
                .handle_draft_command(command)
                .await
        }
        Some(New) => {
            let cli = Cli::new(organizer, renderer);
            Session::new(cli.organizer(), cli.renderer())
                .run(io::stdin().lock())
                .await
        }
        Some(Route { command }) => {
            Cli::new(organizer, renderer)
                .handle_route_command(command)
                .await
        }
        Some(Event { command }) => {
            Cli::new(organizer, renderer)
                .handle_event_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Trailhead MCP server");
            run_stdio_server(TrailheadMcpServer::new(organizer))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(organizer, renderer)
                .list_events(&ListEvents::default())
                .await
        }
    }
}
