//! Date and time display utilities.

use std::fmt;

use jiff::{civil::Date, tz::TimeZone, Timestamp};

/// A `Timestamp` rendered in the system time zone as
/// `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Short human readable day used on event cards, e.g. `Sat, Oct 24`.
///
/// ```rust
/// use jiff::civil::date;
/// use trailhead_core::display::DateLabel;
///
/// assert_eq!(DateLabel(&date(2026, 10, 24)).to_string(), "Sat, Oct 24");
/// assert_eq!(DateLabel(&date(2026, 11, 2)).to_string(), "Mon, Nov 2");
/// ```
pub struct DateLabel<'a>(pub &'a Date);

impl<'a> fmt::Display for DateLabel<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a, %b %-d"))
    }
}
