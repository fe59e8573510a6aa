//! Translation of a completed draft into a created event.
//!
//! The gateway validates the draft locally, resolves the referenced route to
//! fill in the derived display fields, and issues exactly one create call to
//! the event store. It never retries; a failed submission leaves the draft
//! untouched for the caller to resubmit.

use std::future::Future;

use jiff::{civil::Date, Zoned};
use log::{debug, info, warn};

use crate::{
    catalog::RouteCatalog,
    display::DateLabel,
    error::{Result, SubmissionError},
    models::{Difficulty, Draft, Event, EventRecord, Route},
};

/// Display name of the fixed demo identity that organizes every event.
pub const DEMO_ORGANIZER: &str = "Trailhead Demo";
/// Placeholder for route-derived text fields when no route is referenced.
pub const PLACEHOLDER_TBD: &str = "TBD";
/// Placeholder for the elevation field when no route is referenced.
pub const PLACEHOLDER_NOT_AVAILABLE: &str = "N/A";

/// Write side of the hosted event store.
pub trait EventStore {
    /// Persists a new event, returning it with its assigned id.
    fn create_event(&self, record: EventRecord) -> impl Future<Output = Result<Event>> + Send;
}

/// Submits drafts to an [`EventStore`].
pub struct SubmissionGateway<'a, E> {
    catalog: &'a RouteCatalog,
    store: &'a E,
    organizer: String,
}

impl<'a, E: EventStore + Sync> SubmissionGateway<'a, E> {
    pub fn new(catalog: &'a RouteCatalog, store: &'a E) -> Self {
        Self {
            catalog,
            store,
            organizer: DEMO_ORGANIZER.to_string(),
        }
    }

    /// Overrides the organizer name written into records.
    pub fn with_organizer(mut self, organizer: impl Into<String>) -> Self {
        self.organizer = organizer.into();
        self
    }

    /// Builds the record for a draft without contacting the store.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::Validation` naming the first missing field
    /// among date, time, name and activity.
    pub fn build_record(
        &self,
        draft: &Draft,
        today: Date,
    ) -> std::result::Result<EventRecord, SubmissionError> {
        if let Some(field) = draft.first_missing_field() {
            return Err(SubmissionError::Validation { field });
        }
        let (Some(activity), Some(event_date), Some(time), Some(title)) = (
            draft.activity_category,
            draft.scheduled_date,
            draft.scheduled_time,
            draft.trimmed_name(),
        ) else {
            return Err(SubmissionError::Validation { field: "draft" });
        };

        let route = self.resolve_route(draft);

        Ok(EventRecord {
            title: title.to_string(),
            activity,
            event_date,
            date_label: DateLabel(&event_date).to_string(),
            time,
            route_id: route.map(|r| r.id),
            available_spots: draft.capacity,
            difficulty: route.map_or(Difficulty::Moderate, |r| r.difficulty),
            distance: route.map_or_else(|| PLACEHOLDER_TBD.to_string(), Route::distance_label),
            duration: route.map_or_else(|| PLACEHOLDER_TBD.to_string(), Route::duration_label),
            elevation: route.map_or_else(
                || PLACEHOLDER_NOT_AVAILABLE.to_string(),
                Route::elevation_label,
            ),
            departure_location: route
                .map_or_else(|| PLACEHOLDER_TBD.to_string(), |r| r.location.clone()),
            transport_method: PLACEHOLDER_TBD.to_string(),
            organizer: self.organizer.clone(),
            image: route.map_or_else(
                || activity.default_image().to_string(),
                |r| r.thumbnail.clone(),
            ),
            attendees: 1,
            is_past: event_date < today,
        })
    }

    /// Validates the draft and creates the event, using the local date for
    /// the `is_past` flag.
    pub async fn submit(&self, draft: &Draft) -> std::result::Result<Event, SubmissionError> {
        self.submit_on(draft, Zoned::now().date()).await
    }

    /// Like [`SubmissionGateway::submit`] with an explicit current date.
    pub async fn submit_on(
        &self,
        draft: &Draft,
        today: Date,
    ) -> std::result::Result<Event, SubmissionError> {
        let record = self.build_record(draft, today)?;
        debug!("Submitting event record: {record:?}");

        match self.store.create_event(record).await {
            Ok(event) => {
                info!("Created event {} ({})", event.id, event.record.title);
                Ok(event)
            }
            Err(e) => {
                warn!("Event store rejected submission: {e}");
                Err(SubmissionError::Store(e))
            }
        }
    }

    fn resolve_route(&self, draft: &Draft) -> Option<&'a Route> {
        if !draft.requires_route() {
            return None;
        }
        let id = draft.route_reference?;
        let route = self.catalog.get(id);
        if route.is_none() {
            warn!("Draft references unknown route {id}; using placeholders");
        }
        route
    }
}
