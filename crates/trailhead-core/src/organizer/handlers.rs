//! Lookup handlers returning display-ready values.

use super::Organizer;
use crate::{
    display::{Events, Routes},
    error::{Result, TrailheadError},
    models::{Event, Route, RouteFilter},
    params::{Id, ListEvents, ListRoutes},
};

impl Organizer {
    /// Handle listing catalog routes with filtering and sorting.
    ///
    /// ```rust,no_run
    /// # use trailhead_core::{models::ActivityCategory, params::ListRoutes, OrganizerBuilder};
    /// # async {
    /// let organizer = OrganizerBuilder::new().build().await?;
    /// let params = ListRoutes {
    ///     activity: Some(ActivityCategory::ViaFerrata),
    ///     ..Default::default()
    /// };
    /// println!("{}", organizer.list_routes(&params));
    /// # Result::<(), trailhead_core::TrailheadError>::Ok(())
    /// # };
    /// ```
    pub fn list_routes(&self, params: &ListRoutes) -> Routes {
        Routes(self.catalog.list(&RouteFilter::from(params)))
    }

    /// Handle showing a single route.
    ///
    /// # Errors
    ///
    /// `TrailheadError::RouteNotFound` for an unknown id.
    pub fn show_route(&self, params: &Id) -> Result<Route> {
        self.catalog.require(params.id).cloned()
    }

    /// Handle listing events for the list view.
    pub async fn list_events_summary(&self, params: &ListEvents) -> Result<Events> {
        self.list_events(params).await.map(Events)
    }

    /// Handle showing an event for the detail view.
    ///
    /// # Errors
    ///
    /// `TrailheadError::EventNotFound` for an unknown id.
    pub async fn show_event(&self, params: &Id) -> Result<Event> {
        self.get_event(params)
            .await?
            .ok_or(TrailheadError::EventNotFound { id: params.id })
    }
}
