//! Activity categories and start time slots.

use std::{fmt, str::FromStr};

use jiff::civil::Time;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the activities an event can be organized for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum ActivityCategory {
    Hiking,
    Cycling,
    ViaFerrata,
    Skiing,
    Bouldering,
    Social,
}

impl ActivityCategory {
    /// Every category, in the order the category step lists them.
    pub const ALL: [ActivityCategory; 6] = [
        ActivityCategory::Hiking,
        ActivityCategory::Cycling,
        ActivityCategory::ViaFerrata,
        ActivityCategory::Skiing,
        ActivityCategory::Bouldering,
        ActivityCategory::Social,
    ];

    /// Wire and storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Hiking => "hiking",
            ActivityCategory::Cycling => "cycling",
            ActivityCategory::ViaFerrata => "via-ferrata",
            ActivityCategory::Skiing => "skiing",
            ActivityCategory::Bouldering => "bouldering",
            ActivityCategory::Social => "social",
        }
    }

    /// Human readable name shown in the category step.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityCategory::Hiking => "Hiking",
            ActivityCategory::Cycling => "Cycling",
            ActivityCategory::ViaFerrata => "Via ferrata",
            ActivityCategory::Skiing => "Skiing",
            ActivityCategory::Bouldering => "Bouldering",
            ActivityCategory::Social => "Social",
        }
    }

    /// Whether the wizard offers a route step for this category.
    ///
    /// ```rust
    /// use trailhead_core::models::ActivityCategory;
    ///
    /// assert!(ActivityCategory::ViaFerrata.requires_route());
    /// assert!(!ActivityCategory::Bouldering.requires_route());
    /// ```
    pub fn requires_route(&self) -> bool {
        matches!(
            self,
            ActivityCategory::Hiking | ActivityCategory::Cycling | ActivityCategory::ViaFerrata
        )
    }

    /// Image used for events that do not reference a route.
    pub fn default_image(&self) -> &'static str {
        match self {
            ActivityCategory::Hiking => "https://images.trailhead.app/defaults/hiking.jpg",
            ActivityCategory::Cycling => "https://images.trailhead.app/defaults/cycling.jpg",
            ActivityCategory::ViaFerrata => "https://images.trailhead.app/defaults/via-ferrata.jpg",
            ActivityCategory::Skiing => "https://images.trailhead.app/defaults/skiing.jpg",
            ActivityCategory::Bouldering => "https://images.trailhead.app/defaults/bouldering.jpg",
            ActivityCategory::Social => "https://images.trailhead.app/defaults/social.jpg",
        }
    }
}

impl FromStr for ActivityCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hiking" => Ok(ActivityCategory::Hiking),
            "cycling" => Ok(ActivityCategory::Cycling),
            "via-ferrata" | "via_ferrata" | "viaferrata" => Ok(ActivityCategory::ViaFerrata),
            "skiing" => Ok(ActivityCategory::Skiing),
            "bouldering" => Ok(ActivityCategory::Bouldering),
            "social" => Ok(ActivityCategory::Social),
            _ => Err(format!("Invalid activity category: {s}")),
        }
    }
}

/// First and last bookable slot, and the spacing between slots.
const FIRST_SLOT_HOUR: i8 = 6;
const LAST_SLOT_HOUR: i8 = 20;
const SLOT_MINUTES: i8 = 30;

/// Literal stored for a start time that is not fixed yet.
pub const TO_BE_CONFIRMED: &str = "to-be-confirmed";

/// Start time of an event.
///
/// Serialized as `"HH:MM"` or the literal `"to-be-confirmed"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub enum TimeSlot {
    /// One of the fixed half-hour slots
    At(Time),
    /// The organizer has not fixed the start time yet
    ToBeConfirmed,
}

impl TimeSlot {
    /// All selectable slots in chronological order, followed by
    /// [`TimeSlot::ToBeConfirmed`].
    pub fn all() -> Vec<TimeSlot> {
        let mut slots = Vec::new();
        for hour in FIRST_SLOT_HOUR..=LAST_SLOT_HOUR {
            for minute in [0, SLOT_MINUTES] {
                if hour == LAST_SLOT_HOUR && minute > 0 {
                    break;
                }
                slots.push(TimeSlot::At(Time::constant(hour, minute, 0, 0)));
            }
        }
        slots.push(TimeSlot::ToBeConfirmed);
        slots
    }

    fn is_bookable(time: Time) -> bool {
        let (hour, minute) = (time.hour(), time.minute());
        time.second() == 0
            && time.subsec_nanosecond() == 0
            && (minute == 0 || minute == SLOT_MINUTES)
            && (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR).contains(&hour)
            && !(hour == LAST_SLOT_HOUR && minute != 0)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeSlot::At(time) => write!(f, "{:02}:{:02}", time.hour(), time.minute()),
            TimeSlot::ToBeConfirmed => f.write_str(TO_BE_CONFIRMED),
        }
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(TO_BE_CONFIRMED) || s.eq_ignore_ascii_case("tbc") {
            return Ok(TimeSlot::ToBeConfirmed);
        }

        let invalid = || format!("Invalid time slot: {s}");
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let hour: i8 = hour.parse().map_err(|_| invalid())?;
        let minute: i8 = minute.parse().map_err(|_| invalid())?;
        let time = Time::new(hour, minute, 0, 0).map_err(|_| invalid())?;

        if TimeSlot::is_bookable(time) {
            Ok(TimeSlot::At(time))
        } else {
            Err(format!(
                "Time slot {s} is not offered; pick a half-hour slot between 06:00 and 20:00"
            ))
        }
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}
