//! The in-progress event authored by the wizard.

use jiff::civil::Date;

use super::{ActivityCategory, TimeSlot};

/// The not-yet-submitted event being built step by step.
///
/// A default draft is empty. The draft store only persists a draft once
/// [`Draft::is_touched`] holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Chosen activity, if any
    pub activity_category: Option<ActivityCategory>,

    /// Route catalog id; only set for route-requiring categories
    pub route_reference: Option<u64>,

    /// Calendar day of the event
    pub scheduled_date: Option<Date>,

    /// Start time slot
    pub scheduled_time: Option<TimeSlot>,

    /// Event title as typed by the user
    pub name: String,

    /// Maximum number of participants; `None` means unlimited
    pub capacity: Option<u32>,
}

impl Draft {
    /// Whether any field has been filled in.
    pub fn is_touched(&self) -> bool {
        self.activity_category.is_some()
            || self.route_reference.is_some()
            || self.scheduled_date.is_some()
            || self.scheduled_time.is_some()
            || !self.name.is_empty()
            || self.capacity.is_some()
    }

    /// Whether the route step belongs to this draft's flow.
    ///
    /// An unset category counts as route-requiring until the user picks one.
    pub fn requires_route(&self) -> bool {
        self.activity_category
            .map_or(true, |category| category.requires_route())
    }

    /// The trimmed event title, if it is not blank.
    pub fn trimmed_name(&self) -> Option<&str> {
        let name = self.name.trim();
        (!name.is_empty()).then_some(name)
    }

    /// Name of the first field that must be filled before submission.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        if self.scheduled_date.is_none() {
            Some("date")
        } else if self.scheduled_time.is_none() {
            Some("time")
        } else if self.trimmed_name().is_none() {
            Some("name")
        } else if self.activity_category.is_none() {
            Some("activity")
        } else {
            None
        }
    }
}
