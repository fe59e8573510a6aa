//! Data models for drafts, routes and events.
//!
//! This module contains the core domain models of the event creation wizard.
//! Display implementations for these models live in [`crate::display::models`]
//! so that data structures stay separate from presentation.
//!
//! # Model Overview
//!
//! - [`ActivityCategory`]: the fixed set of activities an event can be about.
//!   Some of them require a route, which decides whether the wizard shows its
//!   route step.
//! - [`TimeSlot`]: a start time picked from half-hour slots, or
//!   "to-be-confirmed".
//! - [`Draft`]: the in-progress event, mutated field by field while the user
//!   walks through the wizard.
//! - [`Route`]: a read-only catalog record with technicality grade and
//!   derived distance/duration/elevation labels.
//! - [`EventRecord`] / [`Event`]: the record handed to the event store and the
//!   stored row returned from it.
//!
//! # Examples
//!
//! ```rust
//! use trailhead_core::models::{ActivityCategory, Draft};
//!
//! let mut draft = Draft::default();
//! assert!(!draft.is_touched());
//!
//! draft.activity_category = Some(ActivityCategory::Skiing);
//! assert!(draft.is_touched());
//! assert!(!draft.requires_route());
//! ```

pub mod activity;
pub mod draft;
pub mod event;
pub mod filters;
pub mod route;

#[cfg(test)]
mod tests;

pub use activity::{ActivityCategory, TimeSlot};
pub use draft::Draft;
pub use event::{Event, EventRecord};
pub use filters::{EventFilter, EventWindow, RouteFilter, RouteSort};
pub use route::{Difficulty, Route, Technicality};
