//! Route catalog records.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ActivityCategory;

/// Overall effort rating of a route.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    /// Also used for events that do not reference a route
    #[default]
    Moderate,
    Hard,
    Expert,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Moderate => "moderate",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "moderate" => Ok(Difficulty::Moderate),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

/// Six-level technicality grade (T1 to T6) attached to routes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum Technicality {
    T1,
    T2,
    T3,
    T4,
    T5,
    T6,
}

impl Technicality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Technicality::T1 => "T1",
            Technicality::T2 => "T2",
            Technicality::T3 => "T3",
            Technicality::T4 => "T4",
            Technicality::T5 => "T5",
            Technicality::T6 => "T6",
        }
    }

    /// Short description of what the grade demands.
    pub fn description(&self) -> &'static str {
        match self {
            Technicality::T1 => "Hiking",
            Technicality::T2 => "Mountain hiking",
            Technicality::T3 => "Demanding mountain hiking",
            Technicality::T4 => "Alpine hiking",
            Technicality::T5 => "Demanding alpine hiking",
            Technicality::T6 => "Difficult alpine hiking",
        }
    }
}

impl FromStr for Technicality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "T1" | "1" => Ok(Technicality::T1),
            "T2" | "2" => Ok(Technicality::T2),
            "T3" | "3" => Ok(Technicality::T3),
            "T4" | "4" => Ok(Technicality::T4),
            "T5" | "5" => Ok(Technicality::T5),
            "T6" | "6" => Ok(Technicality::T6),
            _ => Err(format!("Invalid technicality grade: {s}")),
        }
    }
}

/// A read-only route from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Route {
    /// Catalog identifier
    pub id: u64,

    /// Display name
    pub name: String,

    /// Thumbnail image URL
    pub thumbnail: String,

    /// Total distance in kilometres
    pub distance_km: f64,

    /// Expected walking/riding time in minutes
    pub duration_minutes: u32,

    /// Cumulative ascent in metres
    pub elevation_gain_m: u32,

    /// Overall effort rating
    pub difficulty: Difficulty,

    /// Technicality grade
    pub technicality: Technicality,

    /// Departure location
    pub location: String,

    /// Activities the route is suitable for
    #[serde(default)]
    pub activities: Vec<ActivityCategory>,
}

impl Route {
    /// Whether the route is offered for the given activity.
    pub fn serves(&self, category: ActivityCategory) -> bool {
        self.activities.contains(&category)
    }

    /// Distance as shown on event cards, e.g. `"12.5 km"`.
    pub fn distance_label(&self) -> String {
        format!("{:.1} km", self.distance_km)
    }

    /// Duration as shown on event cards, e.g. `"4h 30m"`.
    ///
    /// ```rust
    /// # use trailhead_core::models::{Difficulty, Route, Technicality};
    /// # let mut route = Route {
    /// #     id: 1,
    /// #     name: "Test".to_string(),
    /// #     thumbnail: String::new(),
    /// #     distance_km: 1.0,
    /// #     duration_minutes: 0,
    /// #     elevation_gain_m: 0,
    /// #     difficulty: Difficulty::Easy,
    /// #     technicality: Technicality::T1,
    /// #     location: String::new(),
    /// #     activities: vec![],
    /// # };
    /// route.duration_minutes = 270;
    /// assert_eq!(route.duration_label(), "4h 30m");
    /// route.duration_minutes = 120;
    /// assert_eq!(route.duration_label(), "2h");
    /// route.duration_minutes = 45;
    /// assert_eq!(route.duration_label(), "45m");
    /// ```
    pub fn duration_label(&self) -> String {
        let hours = self.duration_minutes / 60;
        let minutes = self.duration_minutes % 60;
        match (hours, minutes) {
            (0, m) => format!("{m}m"),
            (h, 0) => format!("{h}h"),
            (h, m) => format!("{h}h {m}m"),
        }
    }

    /// Elevation gain as shown on event cards, e.g. `"850 m"`.
    pub fn elevation_label(&self) -> String {
        format!("{} m", self.elevation_gain_m)
    }
}
