//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the data structures stay free of
//! presentation concerns. All output is markdown for the terminal renderer.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{ActivityCategory, Difficulty, Draft, Event, Route, Technicality};

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Technicality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.description())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Location**: {}", self.location)?;
        writeln!(
            f,
            "- **Distance**: {} · **Duration**: {} · **Elevation**: {}",
            self.distance_label(),
            self.duration_label(),
            self.elevation_label()
        )?;
        writeln!(
            f,
            "- **Difficulty**: {} · **Grade**: {}",
            self.difficulty, self.technicality
        )?;
        if !self.activities.is_empty() {
            let activities: Vec<_> = self.activities.iter().map(|a| a.label()).collect();
            writeln!(f, "- **Activities**: {}", activities.join(", "))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = &self.record;
        writeln!(f, "# {}. {}", self.id, record.title)?;
        writeln!(f)?;
        writeln!(f, "- Activity: {}", record.activity)?;
        writeln!(f, "- When: {} at {}", record.date_label, record.time)?;
        match record.available_spots {
            Some(spots) => writeln!(f, "- Spots: {}/{spots}", record.attendees)?,
            None => writeln!(f, "- Spots: {} (unlimited)", record.attendees)?,
        }
        writeln!(f, "- Difficulty: {}", record.difficulty)?;
        writeln!(
            f,
            "- Distance: {} · Duration: {} · Elevation: {}",
            record.distance, record.duration, record.elevation
        )?;
        writeln!(
            f,
            "- Departure: {} ({})",
            record.departure_location, record.transport_method
        )?;
        if let Some(route_id) = record.route_id {
            writeln!(f, "- Route: {route_id}")?;
        }
        writeln!(f, "- Organizer: {}", record.organizer)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        if record.is_past {
            writeln!(f)?;
            writeln!(f, "_This event has already taken place._")?;
        }
        Ok(())
    }
}

impl fmt::Display for Draft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_unset<T: fmt::Display>(value: Option<T>) -> String {
            value.map_or_else(|| "_not set_".to_string(), |v| v.to_string())
        }

        if !self.is_touched() {
            return writeln!(f, "No draft in progress.");
        }
        writeln!(f, "# Draft event")?;
        writeln!(f)?;
        writeln!(f, "- Activity: {}", or_unset(self.activity_category))?;
        if self.requires_route() {
            writeln!(f, "- Route: {}", or_unset(self.route_reference))?;
        }
        writeln!(f, "- Date: {}", or_unset(self.scheduled_date))?;
        writeln!(f, "- Time: {}", or_unset(self.scheduled_time))?;
        writeln!(f, "- Name: {}", or_unset(self.trimmed_name()))?;
        writeln!(
            f,
            "- Capacity: {}",
            self.capacity
                .map_or_else(|| "unlimited".to_string(), |c| c.to_string())
        )
    }
}
