//! High-level async API over the wizard, the route catalog and the event
//! store.
//!
//! [`Organizer`] is what the CLI and the MCP server talk to. It knows where
//! the event database and the draft file live, owns the route catalog, and
//! hands out wizards and submission gateways wired to them.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │  Database /     │
//! │ (handlers)      │───▶│ (event_ops,     │───▶│  Draft file /   │
//! │                 │    │  draft_ops)     │    │  Catalog        │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     Display output      Business logic         Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: configures paths and the catalog, initializes the database
//! - [`event_ops`]: event store access on blocking threads; implements
//!   [`EventStore`](crate::gateway::EventStore)
//! - [`draft_ops`]: wizard construction and headless draft editing
//! - [`handlers`]: listing and lookup operations returning display wrappers
//!
//! # Example
//!
//! ```rust,no_run
//! use trailhead_core::{params::ListEvents, OrganizerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let organizer = OrganizerBuilder::new()
//!     .with_database_path(Some("/tmp/trailhead.db"))
//!     .build()
//!     .await?;
//!
//! let upcoming = organizer.list_events_summary(&ListEvents::default()).await?;
//! println!("{upcoming}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use crate::catalog::RouteCatalog;

pub mod builder;
pub mod draft_ops;
pub mod event_ops;
pub mod handlers;

#[cfg(test)]
mod tests;

pub use builder::OrganizerBuilder;

/// Entry point for organizing events.
pub struct Organizer {
    pub(crate) db_path: PathBuf,
    pub(crate) draft_path: PathBuf,
    pub(crate) catalog: RouteCatalog,
}

impl Organizer {
    pub(crate) fn new(db_path: PathBuf, draft_path: PathBuf, catalog: RouteCatalog) -> Self {
        Self {
            db_path,
            draft_path,
            catalog,
        }
    }

    /// Location of the event database.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Location of the persisted draft.
    pub fn draft_path(&self) -> &Path {
        &self.draft_path
    }

    /// The route catalog.
    pub fn catalog(&self) -> &RouteCatalog {
        &self.catalog
    }
}
