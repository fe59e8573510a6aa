//! Core library for Trailhead, an outdoor community app's event creation
//! wizard.
//!
//! The wizard walks an organizer through up to four steps (activity, optional
//! route, date and time, name and capacity), persisting the in-progress
//! [`Draft`] after every change and finally turning it into an [`Event`] in the
//! event store.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): drafts, activities, time slots, routes, events
//! - **Draft store** ([`draft_store`]): best-effort persistence of the draft
//! - **Wizard** ([`wizard`]): step sequencing, step views and the modal shell
//! - **Gateway** ([`gateway`]): validates a draft and creates the event
//! - **Catalog** ([`catalog`]) and **database** ([`db`]): reference routes and
//!   created events
//! - **Organizer** ([`organizer`]): the async facade used by the CLI and MCP
//!   server
//! - **Display** ([`display`]): markdown rendering of all of the above
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trailhead_core::{
//!     models::ActivityCategory,
//!     params::{SetDetails, SetSchedule},
//!     OrganizerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let organizer = OrganizerBuilder::new()
//!     .with_database_path(Some("events.db"))
//!     .with_draft_path(Some("draft.json"))
//!     .build()
//!     .await?;
//!
//! organizer.edit_draft(|wizard, _| wizard.select_category(ActivityCategory::Social))?;
//! organizer.edit_draft(|wizard, _| {
//!     wizard.apply_schedule(&SetSchedule {
//!         date: Some("2030-05-01".to_string()),
//!         time: Some("19:00".to_string()),
//!     })
//! })?;
//! let screen = organizer.edit_draft(|wizard, _| {
//!     wizard.apply_details(&SetDetails {
//!         name: Some("Spring get-together".to_string()),
//!         capacity: None,
//!     })
//! })?;
//! println!("{screen}");
//!
//! let event = organizer.submit_draft().await?;
//! println!("Created event {}", event.id);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod draft_store;
pub mod error;
pub mod gateway;
pub mod models;
pub mod organizer;
pub mod params;
pub mod wizard;

// Re-export commonly used types
pub use catalog::RouteCatalog;
pub use db::Database;
pub use display::{CreateResult, Events, Notification, Routes, WizardScreen};
pub use draft_store::{DraftStore, FileDraftStore, MemoryDraftStore};
pub use error::{Result, SubmissionError, TrailheadError};
pub use gateway::{EventStore, SubmissionGateway};
pub use models::{
    ActivityCategory, Difficulty, Draft, Event, EventFilter, EventRecord, EventWindow, Route,
    RouteFilter, RouteSort, Technicality, TimeSlot,
};
pub use organizer::{Organizer, OrganizerBuilder};
pub use wizard::{ScrollLock, ShellState, StepView, Wizard, WizardStep};
