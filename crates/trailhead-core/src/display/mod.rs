//! Display formatting wrappers.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the newtypes in this module format collections, operation results, status
//! messages and wizard screens. Everything renders as markdown so the same
//! text serves the terminal renderer and MCP tool responses.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (Event, Route)  │───▶│ Step Screens    │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use trailhead_core::display::Notification;
//!
//! let status = Notification::failure("Nothing to discard");
//! assert_eq!(status.to_string(), "Error: Nothing to discard\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;
pub mod wizard;

pub use collections::{Events, Routes};
pub use datetime::{DateLabel, LocalDateTime};
pub use results::CreateResult;
pub use status::Notification;
pub use wizard::WizardScreen;
