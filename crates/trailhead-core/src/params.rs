//! Parameter structures shared by the CLI and the MCP server.
//!
//! Core parameters carry no interface-specific derives besides the optional
//! JSON schema. Each interface wraps them in its own types (clap `Args`,
//! transparent serde wrappers) and converts with `.into()`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Dates and times travel as strings and are parsed by the organizer, so the
//! same error messages reach every interface.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{
    ActivityCategory, Difficulty, EventFilter, EventWindow, RouteFilter, RouteSort, Technicality,
};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_route and show_event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for listing catalog routes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListRoutes {
    /// Only routes offered for this activity
    #[serde(default)]
    pub activity: Option<ActivityCategory>,
    /// Only routes with this difficulty
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Only routes graded at or below this technicality (T1 to T6)
    #[serde(default)]
    pub max_technicality: Option<Technicality>,
    /// Case-insensitive text matched against route name and location
    #[serde(default)]
    pub text: Option<String>,
    /// Sort order: name, distance, duration or elevation
    #[serde(default)]
    pub sort: RouteSort,
}

impl From<&ListRoutes> for RouteFilter {
    fn from(params: &ListRoutes) -> Self {
        RouteFilter {
            activity: params.activity,
            difficulty: params.difficulty,
            max_technicality: params.max_technicality,
            text: params.text.clone(),
            sort: params.sort,
        }
    }
}

/// Parameters for listing created events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListEvents {
    /// Only events for this activity
    #[serde(default)]
    pub activity: Option<ActivityCategory>,
    /// upcoming (default), past or all
    #[serde(default)]
    pub window: EventWindow,
}

impl From<&ListEvents> for EventFilter {
    fn from(params: &ListEvents) -> Self {
        EventFilter {
            activity: params.activity,
            window: params.window,
        }
    }
}

/// Parameters for the category step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SelectCategory {
    /// hiking, cycling, via-ferrata, skiing, bouldering or social
    pub category: ActivityCategory,
}

/// Parameters for the route step. Selecting the selected route clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SelectRoute {
    /// Catalog id of the route to toggle
    pub route_id: u64,
}

/// Parameters for the date and time step. Omitted fields are left as they
/// are.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetSchedule {
    /// Event day as YYYY-MM-DD, today or later
    #[serde(default)]
    pub date: Option<String>,
    /// Start time as HH:MM on a half-hour between 06:00 and 20:00, or
    /// "to-be-confirmed"
    #[serde(default)]
    pub time: Option<String>,
}

/// Parameters for the details step. Omitted fields are left as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetDetails {
    /// Event name
    #[serde(default)]
    pub name: Option<String>,
    /// Participant limit; anything but a positive integer means unlimited
    #[serde(default)]
    pub capacity: Option<String>,
}

/// Parameters for discarding a touched draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DiscardDraft {
    /// Must be true; the draft cannot be recovered
    #[serde(default)]
    pub confirmed: bool,
}
