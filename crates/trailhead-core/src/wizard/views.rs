//! Per-step view models and the input rules behind them.
//!
//! Views are plain values computed from the draft. They never persist or
//! sequence anything themselves; the wizard shell applies updates and moves
//! between steps.

use jiff::civil::Date;

use crate::{
    error::{Result, TrailheadError},
    models::{ActivityCategory, Route, TimeSlot},
};

/// Label of the route step's continue control when nothing is selected.
pub const SKIP_ROUTE_LABEL: &str = "Skip for now";
/// Label of the route step's continue control once a route is selected.
pub const CONFIRM_ROUTE_LABEL: &str = "Continue";

/// Selecting the already-selected route clears the selection.
///
/// ```rust
/// use trailhead_core::wizard::toggle_route;
///
/// assert_eq!(toggle_route(None, 3), Some(3));
/// assert_eq!(toggle_route(Some(3), 3), None);
/// assert_eq!(toggle_route(Some(3), 5), Some(5));
/// ```
pub fn toggle_route(current: Option<u64>, id: u64) -> Option<u64> {
    if current == Some(id) {
        None
    } else {
        Some(id)
    }
}

/// Coerces capacity input into a participant limit.
///
/// Anything that is not a positive integer means "unlimited".
///
/// ```rust
/// use trailhead_core::wizard::parse_capacity;
///
/// assert_eq!(parse_capacity("7"), Some(7));
/// assert_eq!(parse_capacity("0"), None);
/// assert_eq!(parse_capacity("-5"), None);
/// assert_eq!(parse_capacity("abc"), None);
/// ```
pub fn parse_capacity(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|&n| n > 0)
}

/// Checks that a picked date is today or later.
pub fn check_date(date: Date, today: Date) -> Result<Date> {
    if date < today {
        Err(TrailheadError::invalid_input("date")
            .with_reason(format!("{date} is in the past; pick {today} or later")))
    } else {
        Ok(date)
    }
}

/// Category step: one activity at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView {
    pub selected: Option<ActivityCategory>,
}

impl CategoryView {
    /// The selectable categories with their selection state.
    pub fn options(&self) -> impl Iterator<Item = (ActivityCategory, bool)> + '_ {
        ActivityCategory::ALL
            .into_iter()
            .map(move |category| (category, self.selected == Some(category)))
    }

    pub fn can_continue(&self) -> bool {
        self.selected.is_some()
    }
}

/// Route step: optional, always skippable.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteView {
    /// Activity the routes are listed for
    pub category: Option<ActivityCategory>,
    /// Routes offered for the activity
    pub routes: Vec<Route>,
    /// Currently selected route id
    pub selected: Option<u64>,
}

impl RouteView {
    pub fn can_continue(&self) -> bool {
        true
    }

    /// `Skip for now` until a route is selected.
    pub fn continue_label(&self) -> &'static str {
        if self.selected.is_some() {
            CONFIRM_ROUTE_LABEL
        } else {
            SKIP_ROUTE_LABEL
        }
    }
}

/// Date and time step.
#[derive(Debug, Clone, PartialEq)]
pub struct DateTimeView {
    pub date: Option<Date>,
    pub time: Option<TimeSlot>,
    /// Earliest selectable date
    pub earliest: Date,
}

impl DateTimeView {
    /// Selectable start times.
    pub fn slots(&self) -> Vec<TimeSlot> {
        TimeSlot::all()
    }

    pub fn can_continue(&self) -> bool {
        self.date.is_some() && self.time.is_some()
    }
}

/// Name and capacity step, the last one.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsView {
    pub name: String,
    pub capacity: Option<u32>,
    /// A submission is outstanding
    pub submitting: bool,
}

impl DetailsView {
    /// Submit stays disabled while the name is blank or a submission is in
    /// flight.
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty() && !self.submitting
    }
}

/// The view of whichever step is current.
#[derive(Debug, Clone, PartialEq)]
pub enum StepView {
    Category(CategoryView),
    Route(RouteView),
    DateTime(DateTimeView),
    Details(DetailsView),
}

impl StepView {
    /// Whether the primary control (continue or submit) is enabled.
    pub fn primary_enabled(&self) -> bool {
        match self {
            StepView::Category(view) => view.can_continue(),
            StepView::Route(view) => view.can_continue(),
            StepView::DateTime(view) => view.can_continue(),
            StepView::Details(view) => view.can_submit(),
        }
    }

    /// Label of the primary control.
    pub fn primary_label(&self) -> &'static str {
        match self {
            StepView::Route(view) => view.continue_label(),
            StepView::Details(view) if view.submitting => "Creating...",
            StepView::Details(_) => "Create event",
            _ => "Continue",
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_capacity_coercion() {
        for input in ["0", "-5", "abc", "", "  ", "1.5", "99999999999"] {
            assert_eq!(parse_capacity(input), None, "input {input:?}");
        }
        assert_eq!(parse_capacity("7"), Some(7));
        assert_eq!(parse_capacity(" 12 "), Some(12));
    }

    #[test]
    fn test_check_date_inclusive_today() {
        let today = date(2026, 10, 18);
        assert!(check_date(today, today).is_ok());
        assert!(check_date(date(2026, 10, 19), today).is_ok());
        assert!(matches!(
            check_date(date(2026, 10, 17), today),
            Err(TrailheadError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_category_view_single_selection() {
        let view = CategoryView {
            selected: Some(ActivityCategory::Bouldering),
        };
        let selected: Vec<_> = view.options().filter(|(_, s)| *s).collect();
        assert_eq!(selected, vec![(ActivityCategory::Bouldering, true)]);
        assert!(view.can_continue());
        assert!(!CategoryView { selected: None }.can_continue());
    }

    #[test]
    fn test_route_view_label_and_skip() {
        let mut view = RouteView {
            category: Some(ActivityCategory::Hiking),
            routes: vec![],
            selected: None,
        };
        assert!(view.can_continue());
        assert_eq!(view.continue_label(), SKIP_ROUTE_LABEL);

        view.selected = Some(2);
        assert_eq!(view.continue_label(), CONFIRM_ROUTE_LABEL);
    }

    #[test]
    fn test_date_time_view_requires_both() {
        let mut view = DateTimeView {
            date: Some(date(2026, 10, 19)),
            time: None,
            earliest: date(2026, 10, 18),
        };
        assert!(!view.can_continue());
        view.time = Some(TimeSlot::ToBeConfirmed);
        assert!(view.can_continue());
        assert_eq!(view.slots().last(), Some(&TimeSlot::ToBeConfirmed));
    }

    #[test]
    fn test_details_view_submit_rules() {
        let mut view = DetailsView {
            name: "   ".to_string(),
            capacity: None,
            submitting: false,
        };
        assert!(!view.can_submit());

        view.name = "Morning ski".to_string();
        assert!(view.can_submit());

        view.submitting = true;
        assert!(!view.can_submit());
        assert_eq!(StepView::Details(view).primary_label(), "Creating...");
    }
}
