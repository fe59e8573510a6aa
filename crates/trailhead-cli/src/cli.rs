//! Command-line argument wrappers and the command handlers.
//!
//! Each clap argument struct converts into the matching core parameter type,
//! keeping clap out of `trailhead-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Organizer
//! ```
//!
//! [`Cli`] runs the parsed commands against an [`Organizer`] and renders the
//! markdown results.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use log::debug;
use trailhead_core::{
    display::CreateResult,
    models::{ActivityCategory, Difficulty, EventWindow, RouteSort, Technicality},
    params::*,
    FileDraftStore, Notification, Organizer, RouteCatalog, Wizard,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Draft arguments
// ============================================================================

/// Choose the activity of the draft event
///
/// Switching to an activity without routes (skiing, bouldering, social)
/// clears any selected route.
#[derive(Args)]
pub struct CategoryArgs {
    #[arg(value_enum, help = "Activity of the event")]
    pub category: ActivityArg,
}

impl From<CategoryArgs> for SelectCategory {
    fn from(val: CategoryArgs) -> Self {
        SelectCategory {
            category: val.category.into(),
        }
    }
}

/// Select a catalog route, or clear it by selecting it again
#[derive(Args)]
pub struct RouteArgs {
    #[arg(help = "Catalog ID of the route (see `th route list`)")]
    pub id: u64,
}

impl From<RouteArgs> for SelectRoute {
    fn from(val: RouteArgs) -> Self {
        SelectRoute { route_id: val.id }
    }
}

/// Set the event day and start time
///
/// Either flag may be given on its own; the other field keeps its value.
#[derive(Args)]
pub struct ScheduleArgs {
    #[arg(short, long, help = "Event day as YYYY-MM-DD, today or later")]
    pub date: Option<String>,
    #[arg(
        short,
        long,
        help = "Start time as HH:MM on a half hour between 06:00 and 20:00, or 'tbc'"
    )]
    pub time: Option<String>,
}

impl From<ScheduleArgs> for SetSchedule {
    fn from(val: ScheduleArgs) -> Self {
        SetSchedule {
            date: val.date,
            time: val.time,
        }
    }
}

/// Set the event name and participant limit
#[derive(Args)]
pub struct DetailsArgs {
    #[arg(short, long, help = "Name of the event")]
    pub name: Option<String>,
    #[arg(
        short,
        long,
        help = "Participant limit; anything but a positive number means unlimited"
    )]
    pub capacity: Option<String>,
}

impl From<DetailsArgs> for SetDetails {
    fn from(val: DetailsArgs) -> Self {
        SetDetails {
            name: val.name,
            capacity: val.capacity,
        }
    }
}

#[derive(Subcommand)]
pub enum DraftCommands {
    /// Show the draft and the step it resumes at
    #[command(alias = "s")]
    Show,
    /// Choose the activity
    #[command(alias = "c")]
    Category(CategoryArgs),
    /// Select or clear the route
    #[command(alias = "r")]
    Route(RouteArgs),
    /// Set date and time
    #[command(alias = "t")]
    Schedule(ScheduleArgs),
    /// Set name and capacity
    #[command(alias = "n")]
    Details(DetailsArgs),
    /// Throw the draft away
    #[command(aliases = ["d", "rm"])]
    Discard,
    /// Create the event from the draft
    Submit,
}

// ============================================================================
// Lookup arguments
// ============================================================================

/// List catalog routes
#[derive(Args)]
pub struct ListRoutesArgs {
    #[arg(short, long, value_enum, help = "Only routes offered for this activity")]
    pub activity: Option<ActivityArg>,
    #[arg(long, help = "Only routes of this difficulty (easy, moderate, hard)")]
    pub difficulty: Option<Difficulty>,
    #[arg(long, help = "Only routes graded at or below this technicality (T1 to T6)")]
    pub max_technicality: Option<Technicality>,
    #[arg(short, long, help = "Match route name or location")]
    pub text: Option<String>,
    #[arg(
        short,
        long,
        default_value = "name",
        help = "Sort by name, distance, duration or elevation"
    )]
    pub sort: RouteSort,
}

impl From<ListRoutesArgs> for ListRoutes {
    fn from(val: ListRoutesArgs) -> Self {
        ListRoutes {
            activity: val.activity.map(Into::into),
            difficulty: val.difficulty,
            max_technicality: val.max_technicality,
            text: val.text,
            sort: val.sort,
        }
    }
}

/// List created events
#[derive(Args)]
pub struct ListEventsArgs {
    #[arg(short, long, value_enum, help = "Only events for this activity")]
    pub activity: Option<ActivityArg>,
    #[arg(short, long, value_enum, default_value_t = WindowArg::Upcoming)]
    pub window: WindowArg,
}

impl From<ListEventsArgs> for ListEvents {
    fn from(val: ListEventsArgs) -> Self {
        ListEvents {
            activity: val.activity.map(Into::into),
            window: val.window.into(),
        }
    }
}

/// Show a route or event by ID
#[derive(Args)]
pub struct ShowArgs {
    #[arg(help = "Unique identifier to show details for")]
    pub id: u64,
}

impl From<ShowArgs> for Id {
    fn from(val: ShowArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum RouteCommands {
    /// List catalog routes
    #[command(aliases = ["l", "ls"])]
    List(ListRoutesArgs),
    /// Show a single route
    #[command(alias = "s")]
    Show(ShowArgs),
}

#[derive(Subcommand)]
pub enum EventCommands {
    /// List created events
    #[command(aliases = ["l", "ls"])]
    List(ListEventsArgs),
    /// Show a single event
    #[command(alias = "s")]
    Show(ShowArgs),
}

/// Command-line representation of activity categories
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ActivityArg {
    Hiking,
    Cycling,
    ViaFerrata,
    Skiing,
    Bouldering,
    Social,
}

impl From<ActivityArg> for ActivityCategory {
    fn from(val: ActivityArg) -> Self {
        match val {
            ActivityArg::Hiking => ActivityCategory::Hiking,
            ActivityArg::Cycling => ActivityCategory::Cycling,
            ActivityArg::ViaFerrata => ActivityCategory::ViaFerrata,
            ActivityArg::Skiing => ActivityCategory::Skiing,
            ActivityArg::Bouldering => ActivityCategory::Bouldering,
            ActivityArg::Social => ActivityCategory::Social,
        }
    }
}

/// Command-line representation of event list windows
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum WindowArg {
    /// Today and later
    Upcoming,
    /// Before today, most recent first
    Past,
    /// Everything
    All,
}

impl From<WindowArg> for EventWindow {
    fn from(val: WindowArg) -> Self {
        match val {
            WindowArg::Upcoming => EventWindow::Upcoming,
            WindowArg::Past => EventWindow::Past,
            WindowArg::All => EventWindow::All,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs parsed commands against the organizer.
pub struct Cli {
    organizer: Organizer,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(organizer: Organizer, renderer: TerminalRenderer) -> Self {
        Self {
            organizer,
            renderer,
        }
    }

    pub fn organizer(&self) -> &Organizer {
        &self.organizer
    }

    pub fn renderer(&self) -> &TerminalRenderer {
        &self.renderer
    }

    pub async fn handle_draft_command(&self, command: DraftCommands) -> Result<()> {
        match command {
            DraftCommands::Show => self.show_draft(),
            DraftCommands::Category(args) => {
                let params = SelectCategory::from(args);
                debug!("draft category: {params:?}");
                self.edit_and_render(|wizard, _| wizard.select_category(params.category))
            }
            DraftCommands::Route(args) => {
                let params = SelectRoute::from(args);
                debug!("draft route: {params:?}");
                self.edit_and_render(|wizard, catalog| {
                    wizard.toggle_route(params.route_id, catalog).map(|_| ())
                })
            }
            DraftCommands::Schedule(args) => {
                let params = SetSchedule::from(args);
                debug!("draft schedule: {params:?}");
                self.edit_and_render(|wizard, _| wizard.apply_schedule(&params))
            }
            DraftCommands::Details(args) => {
                let params = SetDetails::from(args);
                debug!("draft details: {params:?}");
                self.edit_and_render(|wizard, _| wizard.apply_details(&params))
            }
            DraftCommands::Discard => self.discard_draft(),
            DraftCommands::Submit => self.submit_draft().await,
        }
    }

    pub async fn handle_route_command(&self, command: RouteCommands) -> Result<()> {
        match command {
            RouteCommands::List(args) => {
                let routes = self.organizer.list_routes(&args.into());
                self.renderer.render(&routes.to_string())
            }
            RouteCommands::Show(args) => {
                let route = self
                    .organizer
                    .show_route(&args.into())
                    .context("Failed to show route")?;
                self.renderer.render(&route.to_string())
            }
        }
    }

    pub async fn handle_event_command(&self, command: EventCommands) -> Result<()> {
        match command {
            EventCommands::List(args) => self.list_events(&args.into()).await,
            EventCommands::Show(args) => {
                let event = self
                    .organizer
                    .show_event(&args.into())
                    .await
                    .context("Failed to show event")?;
                self.renderer.render(&event.to_string())
            }
        }
    }

    pub async fn list_events(&self, params: &ListEvents) -> Result<()> {
        let events = self
            .organizer
            .list_events_summary(params)
            .await
            .context("Failed to list events")?;
        self.renderer.render(&events.to_string())
    }

    fn show_draft(&self) -> Result<()> {
        let draft = self.organizer.load_draft();
        let mut output = draft.to_string();
        if draft.is_touched() {
            let screen = self
                .organizer
                .draft_screen()
                .context("Failed to open draft")?;
            output = format!("{output}\n{screen}");
        }
        self.renderer.render(&output)
    }

    fn edit_and_render<F>(&self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Wizard<FileDraftStore>, &RouteCatalog) -> trailhead_core::Result<()>,
    {
        let screen = self
            .organizer
            .edit_draft(edit)
            .context("Failed to update draft")?;
        let output = format!("{}\n{screen}", Notification::success("Draft saved"));
        self.renderer.render(&output)
    }

    fn discard_draft(&self) -> Result<()> {
        let discarded = self
            .organizer
            .discard_draft()
            .context("Failed to discard draft")?;
        let notification = if discarded {
            Notification::success("Draft discarded")
        } else {
            Notification::success("No draft to discard")
        };
        self.renderer.render(&notification.to_string())
    }

    async fn submit_draft(&self) -> Result<()> {
        match self.organizer.submit_draft().await {
            Ok(event) => self.renderer.render(&CreateResult::new(event).to_string()),
            Err(e) => {
                self.renderer.render(&Notification::from(&e).to_string())?;
                bail!("Event was not created: {e}")
            }
        }
    }
}
