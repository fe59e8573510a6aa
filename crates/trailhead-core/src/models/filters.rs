//! Filter types for querying routes and events.

use std::{cmp::Ordering, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ActivityCategory, Difficulty, Route, Technicality};

/// Sort order for route listings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum RouteSort {
    #[default]
    Name,
    Distance,
    Duration,
    Elevation,
}

impl FromStr for RouteSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(RouteSort::Name),
            "distance" => Ok(RouteSort::Distance),
            "duration" => Ok(RouteSort::Duration),
            "elevation" => Ok(RouteSort::Elevation),
            _ => Err(format!("Invalid route sort order: {s}")),
        }
    }
}

/// Filter options for the route catalog.
///
/// Every set criterion must hold for a route to be listed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RouteFilter {
    /// Only routes serving this activity
    pub activity: Option<ActivityCategory>,

    /// Only routes with exactly this difficulty
    pub difficulty: Option<Difficulty>,

    /// Only routes graded at or below this technicality
    pub max_technicality: Option<Technicality>,

    /// Case-insensitive match on route name or location
    pub text: Option<String>,

    /// Ordering of the result
    #[serde(default)]
    pub sort: RouteSort,
}

impl RouteFilter {
    /// Filter listing the routes offered for a category, as the route step
    /// does.
    ///
    /// ```rust
    /// use trailhead_core::models::{ActivityCategory, RouteFilter};
    ///
    /// let filter = RouteFilter::for_activity(ActivityCategory::Cycling);
    /// assert_eq!(filter.activity, Some(ActivityCategory::Cycling));
    /// assert!(filter.difficulty.is_none());
    /// ```
    pub fn for_activity(activity: ActivityCategory) -> Self {
        Self {
            activity: Some(activity),
            ..Default::default()
        }
    }

    /// Whether a route satisfies all criteria.
    pub fn matches(&self, route: &Route) -> bool {
        let text = self.text.as_deref().map(str::to_lowercase);

        self.activity.map_or(true, |a| route.serves(a))
            && self.difficulty.map_or(true, |d| route.difficulty == d)
            && self.max_technicality.map_or(true, |t| route.technicality <= t)
            && text.map_or(true, |t| {
                route.name.to_lowercase().contains(&t)
                    || route.location.to_lowercase().contains(&t)
            })
    }

    /// Orders two routes according to [`RouteFilter::sort`], breaking ties by
    /// id.
    pub fn compare(&self, a: &Route, b: &Route) -> Ordering {
        let primary = match self.sort {
            RouteSort::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            RouteSort::Distance => a.distance_km.total_cmp(&b.distance_km),
            RouteSort::Duration => a.duration_minutes.cmp(&b.duration_minutes),
            RouteSort::Elevation => a.elevation_gain_m.cmp(&b.elevation_gain_m),
        };
        primary.then(a.id.cmp(&b.id))
    }
}

/// Time window for event listings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum EventWindow {
    #[default]
    Upcoming,
    Past,
    All,
}

impl FromStr for EventWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upcoming" => Ok(EventWindow::Upcoming),
            "past" => Ok(EventWindow::Past),
            "all" => Ok(EventWindow::All),
            _ => Err(format!("Invalid event window: {s}")),
        }
    }
}

/// Filter options for querying events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct EventFilter {
    /// Only events for this activity
    pub activity: Option<ActivityCategory>,

    /// Upcoming (default), past or all events
    #[serde(default)]
    pub window: EventWindow,
}
