//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::Event;

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust,no_run
/// use trailhead_core::{display::CreateResult, models::Event};
///
/// fn report(event: Event) {
///     println!("{}", CreateResult::new(event));
/// }
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Event> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created event with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}
