//! MCP tool handlers implementation

use std::sync::Arc;

use log::{debug, info};
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;
use trailhead_core::{
    display::CreateResult, params as core, FileDraftStore, Notification, Organizer, RouteCatalog,
    ShellState, TrailheadError, Wizard,
};

use super::errors::{submission_error, to_mcp_error, tool_error};

// ============================================================================
// Generic Parameter Wrapper
// ============================================================================
//
// Core parameter types only derive JsonSchema behind the "schema" feature.
// The transparent wrapper adds what the MCP layer needs on top.

/// Generic MCP wrapper for core parameter types
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type ListRoutes = McpParams<core::ListRoutes>;
pub type ListEvents = McpParams<core::ListEvents>;
pub type SelectCategory = McpParams<core::SelectCategory>;
pub type SelectRoute = McpParams<core::SelectRoute>;
pub type SetSchedule = McpParams<core::SetSchedule>;
pub type SetDetails = McpParams<core::SetDetails>;
pub type DiscardDraft = McpParams<core::DiscardDraft>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(output: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(output)]))
}

/// Handler implementations for the MCP server.
///
/// All wizard tools share one long-lived wizard, so a session behaves like
/// the modal: open it, edit step by step, then submit or close it.
pub struct McpHandlers {
    organizer: Arc<Organizer>,
    wizard: Arc<Mutex<Wizard<FileDraftStore>>>,
}

impl McpHandlers {
    pub fn new(organizer: Arc<Organizer>, wizard: Arc<Mutex<Wizard<FileDraftStore>>>) -> Self {
        Self { organizer, wizard }
    }

    /// Applies an edit to the open wizard and returns the current screen.
    async fn edit<F>(&self, action: &str, edit: F) -> McpResult
    where
        F: FnOnce(&mut Wizard<FileDraftStore>, &RouteCatalog) -> trailhead_core::Result<()>
            + Send,
    {
        let catalog = self.organizer.catalog();
        let mut wizard = self.wizard.lock().await;
        if let Err(e) = edit(&mut *wizard, catalog) {
            return tool_error(action, e);
        }
        text(wizard.screen(catalog).to_string())
    }

    // ── Wizard lifecycle ──

    pub async fn open_wizard(&self) -> McpResult {
        debug!("open_wizard");
        let catalog = self.organizer.catalog();
        let mut wizard = self.wizard.lock().await;
        if let Err(e) = wizard.open() {
            return tool_error("Failed to open wizard", e);
        }
        info!("Wizard opened over {}", self.organizer.draft_path().display());
        text(format!("{}\n{}", wizard.draft(), wizard.screen(catalog)))
    }

    pub async fn show_wizard(&self) -> McpResult {
        debug!("show_wizard");
        let wizard = self.wizard.lock().await;
        match wizard.state() {
            ShellState::Closed => {
                let draft = self.organizer.load_draft();
                text(format!(
                    "{draft}\nThe wizard is closed. Call open_wizard to edit the draft."
                ))
            }
            ShellState::Editing => text(format!(
                "{}\n{}",
                wizard.draft(),
                wizard.screen(self.organizer.catalog())
            )),
            ShellState::ConfirmingDiscard => text(DISCARD_PENDING),
        }
    }

    pub async fn close_wizard(&self) -> McpResult {
        debug!("close_wizard");
        let mut wizard = self.wizard.lock().await;
        if wizard.state() == ShellState::Closed {
            return text("The wizard is already closed.");
        }
        match wizard.request_close() {
            ShellState::Closed => text(
                Notification::success("Wizard closed; there was nothing to keep.").to_string(),
            ),
            _ => text(DISCARD_PENDING),
        }
    }

    pub async fn continue_editing(&self) -> McpResult {
        debug!("continue_editing");
        let mut wizard = self.wizard.lock().await;
        wizard.continue_editing();
        if wizard.state() != ShellState::Editing {
            return tool_error("Failed to continue", TrailheadError::WizardNotEditing);
        }
        text(wizard.screen(self.organizer.catalog()).to_string())
    }

    pub async fn discard_draft(&self, Parameters(params): Parameters<DiscardDraft>) -> McpResult {
        debug!("discard_draft: {params:?}");
        if !params.as_ref().confirmed {
            return tool_error(
                "Failed to discard draft",
                TrailheadError::invalid_input("confirmed")
                    .with_reason("set confirmed to true; a discarded draft cannot be recovered"),
            );
        }

        let mut wizard = self.wizard.lock().await;
        let discarded = match wizard.state() {
            ShellState::Closed => self
                .organizer
                .discard_draft()
                .map_err(|e| to_mcp_error("Failed to discard draft", &e))?,
            ShellState::Editing => {
                if wizard.request_close() == ShellState::ConfirmingDiscard {
                    wizard.discard();
                    true
                } else {
                    false
                }
            }
            ShellState::ConfirmingDiscard => {
                wizard.discard();
                true
            }
        };

        let notification = if discarded {
            Notification::success("Draft discarded")
        } else {
            Notification::success("No draft to discard")
        };
        text(notification.to_string())
    }

    // ── Steps ──

    pub async fn select_category(
        &self,
        Parameters(params): Parameters<SelectCategory>,
    ) -> McpResult {
        debug!("select_category: {params:?}");
        let category = params.as_ref().category;
        self.edit("Failed to select category", move |wizard, _| {
            wizard.select_category(category)
        })
        .await
    }

    pub async fn select_route(&self, Parameters(params): Parameters<SelectRoute>) -> McpResult {
        debug!("select_route: {params:?}");
        let route_id = params.as_ref().route_id;
        self.edit("Failed to select route", move |wizard, catalog| {
            wizard.toggle_route(route_id, catalog).map(|_| ())
        })
        .await
    }

    pub async fn set_schedule(&self, Parameters(params): Parameters<SetSchedule>) -> McpResult {
        debug!("set_schedule: {params:?}");
        self.edit("Failed to set schedule", |wizard, _| {
            wizard.apply_schedule(params.as_ref())
        })
        .await
    }

    pub async fn set_details(&self, Parameters(params): Parameters<SetDetails>) -> McpResult {
        debug!("set_details: {params:?}");
        self.edit("Failed to set details", |wizard, _| {
            wizard.apply_details(params.as_ref())
        })
        .await
    }

    pub async fn next_step(&self) -> McpResult {
        debug!("next_step");
        self.edit("Failed to continue", |wizard, _| wizard.next().map(|_| ()))
            .await
    }

    pub async fn previous_step(&self) -> McpResult {
        debug!("previous_step");
        self.edit("Failed to go back", |wizard, _| wizard.back().map(|_| ()))
            .await
    }

    pub async fn submit_event(&self) -> McpResult {
        debug!("submit_event");
        let gateway = self.organizer.gateway();
        let mut wizard = self.wizard.lock().await;
        match wizard.submit(&gateway).await {
            Ok(event) => {
                info!("Created event {} via MCP", event.id);
                text(CreateResult::new(event).to_string())
            }
            Err(e) => submission_error(&e),
        }
    }

    // ── Lookups ──

    pub async fn list_routes(&self, Parameters(params): Parameters<ListRoutes>) -> McpResult {
        debug!("list_routes: {params:?}");
        let routes = self.organizer.list_routes(params.as_ref());
        let title = if routes.is_empty() {
            "No matching routes"
        } else {
            "Routes"
        };
        text(format!("# {title}\n\n{routes}"))
    }

    pub async fn show_route(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_route: {params:?}");
        match self.organizer.show_route(params.as_ref()) {
            Ok(route) => text(route.to_string()),
            Err(e) => tool_error("Failed to show route", e),
        }
    }

    pub async fn list_events(&self, Parameters(params): Parameters<ListEvents>) -> McpResult {
        debug!("list_events: {params:?}");
        let events = self
            .organizer
            .list_events_summary(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list events", &e))?;
        text(events.to_string())
    }

    pub async fn show_event(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_event: {params:?}");
        match self.organizer.show_event(params.as_ref()).await {
            Ok(event) => text(event.to_string()),
            Err(e) => tool_error("Failed to show event", e),
        }
    }
}

const DISCARD_PENDING: &str = "The draft has content. Call discard_draft with confirmed=true \
                               to throw it away, or continue_editing to keep working on it.";

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use trailhead_core::{models::ActivityCategory, wizard::ScrollLock, OrganizerBuilder};

    use super::*;

    async fn create_handlers() -> (TempDir, McpHandlers) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let organizer = OrganizerBuilder::new()
            .with_database_path(Some(temp_dir.path().join("test.db")))
            .with_draft_path(Some(temp_dir.path().join("draft.json")))
            .build()
            .await
            .expect("Failed to create organizer");
        let wizard = organizer.wizard(ScrollLock::new());
        let handlers = McpHandlers::new(Arc::new(organizer), Arc::new(Mutex::new(wizard)));
        (temp_dir, handlers)
    }

    fn output(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|c| c.as_text().map(|t| t.text.clone()))
            .collect()
    }

    fn params<T: JsonSchema>(inner: T) -> Parameters<McpParams<T>> {
        Parameters(McpParams(inner))
    }

    #[tokio::test]
    async fn test_wizard_session_creates_event() {
        let (_temp_dir, handlers) = create_handlers().await;

        handlers.open_wizard().await.unwrap();
        let result = handlers
            .select_category(params(core::SelectCategory {
                category: ActivityCategory::Social,
            }))
            .await
            .unwrap();
        assert!(output(&result).contains("[x] Social"));

        handlers.next_step().await.unwrap();
        handlers
            .set_schedule(params(core::SetSchedule {
                date: Some("2030-05-01".to_string()),
                time: Some("19:00".to_string()),
            }))
            .await
            .unwrap();
        handlers.next_step().await.unwrap();
        handlers
            .set_details(params(core::SetDetails {
                name: Some("Fondue night".to_string()),
                capacity: Some("12".to_string()),
            }))
            .await
            .unwrap();

        let result = handlers.submit_event().await.unwrap();
        assert_ne!(result.is_error, Some(true));
        assert!(output(&result).contains("Created event with ID: 1"));

        let result = handlers.show_wizard().await.unwrap();
        assert!(output(&result).contains("The wizard is closed"));
    }

    #[tokio::test]
    async fn test_edit_requires_open_wizard() {
        let (_temp_dir, handlers) = create_handlers().await;
        let result = handlers.next_step().await.unwrap();
        assert_eq!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_close_touched_draft_needs_confirmation() {
        let (_temp_dir, handlers) = create_handlers().await;
        handlers.open_wizard().await.unwrap();
        handlers
            .select_category(params(core::SelectCategory {
                category: ActivityCategory::Skiing,
            }))
            .await
            .unwrap();

        let result = handlers.close_wizard().await.unwrap();
        assert!(output(&result).contains("discard_draft"));

        let result = handlers
            .discard_draft(params(core::DiscardDraft { confirmed: false }))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));

        let result = handlers
            .discard_draft(params(core::DiscardDraft { confirmed: true }))
            .await
            .unwrap();
        assert!(output(&result).contains("Draft discarded"));
        assert!(!handlers.organizer.load_draft().is_touched());
    }

    #[tokio::test]
    async fn test_unknown_route_is_tool_error() {
        let (_temp_dir, handlers) = create_handlers().await;
        let result = handlers.show_route(params(core::Id { id: 99 })).await.unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(output(&result).contains("99"));
    }

    #[tokio::test]
    async fn test_switching_category_leaves_route_step() {
        let (_temp_dir, handlers) = create_handlers().await;

        handlers.open_wizard().await.unwrap();
        handlers
            .select_category(params(core::SelectCategory {
                category: ActivityCategory::Hiking,
            }))
            .await
            .unwrap();
        let result = handlers.next_step().await.unwrap();
        assert!(output(&result).contains("# Step 2 of 4: Pick a route"));

        let result = handlers
            .select_category(params(core::SelectCategory {
                category: ActivityCategory::Skiing,
            }))
            .await
            .unwrap();
        assert!(output(&result).contains("# Step 1 of 3: Choose an activity"));
        assert!(output(&result).contains("[x] Skiing"));
    }
}
