//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::{Event, Route};

/// Newtype wrapper for displaying route listings.
///
/// # Examples
///
/// ```rust
/// use trailhead_core::{catalog::RouteCatalog, display::Routes, models::RouteFilter};
///
/// let catalog = RouteCatalog::bundled().unwrap();
/// let routes = Routes(catalog.list(&RouteFilter::default()));
/// assert!(routes.to_string().contains("Oeschinen"));
/// assert_eq!(Routes(vec![]).to_string(), "No routes found.\n");
/// ```
pub struct Routes(pub Vec<Route>);

impl Routes {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.0.iter()
    }
}

impl Index<usize> for Routes {
    type Output = Route;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Routes {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Routes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No routes found.");
        }
        for route in &self.0 {
            write!(f, "{route}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying event listings as compact entries.
pub struct Events(pub Vec<Event>);

impl Events {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.0.iter()
    }
}

impl IntoIterator for Events {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Events {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No events found.");
        }
        for event in &self.0 {
            let record = &event.record;
            writeln!(f, "## {} (ID: {})", record.title, event.id)?;
            writeln!(f)?;
            writeln!(
                f,
                "- **{}** on {} at {}",
                record.activity, record.date_label, record.time
            )?;
            writeln!(f, "- **Departure**: {}", record.departure_location)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
