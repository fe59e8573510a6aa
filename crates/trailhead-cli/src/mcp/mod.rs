//! MCP server implementation for Trailhead
//!
//! Exposes the event creation wizard and the route and event lookups as MCP
//! tools, so an AI assistant can create events on an organizer's behalf.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};
use trailhead_core::{wizard::ScrollLock, FileDraftStore, Organizer, Wizard};

pub mod errors;
pub mod handlers;

pub use handlers::{
    DiscardDraft, Id, ListEvents, ListRoutes, McpHandlers, McpResult, SelectCategory, SelectRoute,
    SetDetails, SetSchedule,
};

/// MCP server for Trailhead
#[derive(Clone)]
pub struct TrailheadMcpServer {
    organizer: Arc<Organizer>,
    wizard: Arc<Mutex<Wizard<FileDraftStore>>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TrailheadMcpServer {
    /// Create a new Trailhead MCP server with a closed wizard over the
    /// organizer's draft file
    pub fn new(organizer: Organizer) -> Self {
        let wizard = organizer.wizard(ScrollLock::new());
        Self {
            organizer: Arc::new(organizer),
            wizard: Arc::new(Mutex::new(wizard)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(self.organizer.clone(), self.wizard.clone())
    }

    #[tool(
        name = "open_wizard",
        description = "Open the event creation wizard on the activity step. A saved draft is loaded, so previously entered fields are kept. Returns the draft and the current step."
    )]
    async fn open_wizard(&self) -> McpResult {
        self.handlers().open_wizard().await
    }

    #[tool(
        name = "show_wizard",
        description = "Show the draft and the current wizard step, including the options available on that step and whether it can continue."
    )]
    async fn show_wizard(&self) -> McpResult {
        self.handlers().show_wizard().await
    }

    #[tool(
        name = "select_category",
        description = "Choose the activity: hiking, cycling, via-ferrata, skiing, bouldering or social. Hiking, cycling and via-ferrata have an optional route step; switching to another activity clears the selected route."
    )]
    async fn select_category(&self, params: Parameters<SelectCategory>) -> McpResult {
        self.handlers().select_category(params).await
    }

    #[tool(
        name = "select_route",
        description = "On the route step, select a catalog route by ID. Selecting the already selected route clears it. The route is optional; use list_routes to browse."
    )]
    async fn select_route(&self, params: Parameters<SelectRoute>) -> McpResult {
        self.handlers().select_route(params).await
    }

    #[tool(
        name = "set_schedule",
        description = "Set the event date (YYYY-MM-DD, today or later) and/or start time (HH:MM on a half hour from 06:00 to 20:00, or 'to-be-confirmed'). Omitted fields keep their value."
    )]
    async fn set_schedule(&self, params: Parameters<SetSchedule>) -> McpResult {
        self.handlers().set_schedule(params).await
    }

    #[tool(
        name = "set_details",
        description = "Set the event name and/or participant capacity. A capacity that is not a positive whole number means unlimited. Omitted fields keep their value."
    )]
    async fn set_details(&self, params: Parameters<SetDetails>) -> McpResult {
        self.handlers().set_details(params).await
    }

    #[tool(
        name = "next_step",
        description = "Continue to the next wizard step. Fails while the current step is incomplete: the activity step needs an activity, the date step needs both date and time."
    )]
    async fn next_step(&self) -> McpResult {
        self.handlers().next_step().await
    }

    #[tool(
        name = "previous_step",
        description = "Go back one wizard step. Entered fields are kept."
    )]
    async fn previous_step(&self) -> McpResult {
        self.handlers().previous_step().await
    }

    #[tool(
        name = "submit_event",
        description = "On the details step, create the event from the draft. On success the draft is cleared and the wizard closes. On failure the draft is kept and the reason is returned."
    )]
    async fn submit_event(&self) -> McpResult {
        self.handlers().submit_event().await
    }

    #[tool(
        name = "close_wizard",
        description = "Close the wizard. An empty draft closes immediately; otherwise asks for confirmation via discard_draft or continue_editing."
    )]
    async fn close_wizard(&self) -> McpResult {
        self.handlers().close_wizard().await
    }

    #[tool(
        name = "continue_editing",
        description = "Cancel a pending close and return to the current wizard step."
    )]
    async fn continue_editing(&self) -> McpResult {
        self.handlers().continue_editing().await
    }

    #[tool(
        name = "discard_draft",
        description = "Permanently throw away the draft and close the wizard. Requires confirmed=true; this cannot be undone."
    )]
    async fn discard_draft(&self, params: Parameters<DiscardDraft>) -> McpResult {
        self.handlers().discard_draft(params).await
    }

    #[tool(
        name = "list_routes",
        description = "List catalog routes with distance, duration, elevation and grade. Filter by activity, difficulty, max_technicality (T1-T6) or text; sort by name, distance, duration or elevation."
    )]
    async fn list_routes(&self, params: Parameters<ListRoutes>) -> McpResult {
        self.handlers().list_routes(params).await
    }

    #[tool(
        name = "show_route",
        description = "Show a single catalog route by ID."
    )]
    async fn show_route(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_route(params).await
    }

    #[tool(
        name = "list_events",
        description = "List created events. window is upcoming (default), past or all; optionally filter by activity."
    )]
    async fn list_events(&self, params: Parameters<ListEvents>) -> McpResult {
        self.handlers().list_events(params).await
    }

    #[tool(
        name = "show_event",
        description = "Show a created event by ID, including route figures, capacity and departure details."
    )]
    async fn show_event(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_event(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for TrailheadMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "trailhead".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(r#"Trailhead creates outdoor community events through a step-by-step wizard. The draft is saved after every change.

## Steps
1. Activity: `select_category`
2. Route (hiking, cycling and via-ferrata only, optional): `select_route`, browse with `list_routes`
3. Date and time: `set_schedule`
4. Name and capacity: `set_details`, then `submit_event`

## Workflow
1. `open_wizard`, then edit the current step and call `next_step`
2. `previous_step` goes back without losing fields
3. `submit_event` on the last step creates the event and clears the draft
4. `close_wizard` closes an empty draft right away; with a filled-in draft, follow up with `discard_draft` (confirmed=true) or `continue_editing`

## Lookups
- `list_routes`, `show_route`: the route catalog
- `list_events`, `show_event`: created events"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: TrailheadMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Trailhead MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
