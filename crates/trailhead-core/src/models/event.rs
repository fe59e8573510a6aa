//! Event records handed to and returned from the event store.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{ActivityCategory, Difficulty, TimeSlot};

/// The record created in the event store when a draft is submitted.
///
/// Route-derived fields carry placeholder values when no route is referenced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventRecord {
    /// Event title (the trimmed draft name)
    pub title: String,

    /// Activity category
    pub activity: ActivityCategory,

    /// Calendar day, serialized as an ISO date
    pub event_date: Date,

    /// Human readable date, e.g. `"Sat, Oct 24"`
    pub date_label: String,

    /// Start time slot or `to-be-confirmed`
    pub time: TimeSlot,

    /// Referenced catalog route
    pub route_id: Option<u64>,

    /// Participant limit; `None` means unlimited
    pub available_spots: Option<u32>,

    pub difficulty: Difficulty,
    pub distance: String,
    pub duration: String,
    pub elevation: String,
    pub departure_location: String,
    pub transport_method: String,

    /// Display name of the organizer
    pub organizer: String,

    /// Cover image URL
    pub image: String,

    /// Number of confirmed participants
    pub attendees: u32,

    /// Whether the event date lies in the past
    pub is_past: bool,
}

/// An event as stored, with its identifier and creation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// The record contents
    #[serde(flatten)]
    pub record: EventRecord,

    /// Timestamp when the event was created (UTC)
    pub created_at: Timestamp,
}

impl Event {
    /// Whether the event happens before `today`.
    pub fn is_past_on(&self, today: Date) -> bool {
        self.record.event_date < today
    }
}
