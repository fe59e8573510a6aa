//! Markdown rendering of wizard steps.

use std::fmt;

use super::datetime::DateLabel;
use crate::wizard::{CategoryView, DateTimeView, DetailsView, RouteView, StepView, WizardStep};

/// A step view together with its place in the flow, as shown to the user.
#[derive(Debug)]
pub struct WizardScreen {
    pub step: WizardStep,
    /// 1-based position of the step
    pub position: u8,
    /// Number of steps in the current flow
    pub total: u8,
    pub view: StepView,
}

impl fmt::Display for WizardScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Step {} of {}: {}",
            self.position,
            self.total,
            self.step.title()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.view)?;
        writeln!(f)?;
        let marker = if self.view.primary_enabled() { "▶" } else { "·" };
        writeln!(f, "{marker} {}", self.view.primary_label())
    }
}

impl fmt::Display for StepView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepView::Category(view) => view.fmt(f),
            StepView::Route(view) => view.fmt(f),
            StepView::DateTime(view) => view.fmt(f),
            StepView::Details(view) => view.fmt(f),
        }
    }
}

impl fmt::Display for CategoryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (category, selected) in self.options() {
            let mark = if selected { "x" } else { " " };
            writeln!(f, "- [{mark}] {} (`{}`)", category.label(), category.as_str())?;
        }
        Ok(())
    }
}

impl fmt::Display for RouteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.routes.is_empty() {
            writeln!(f, "No routes available for this activity yet.")?;
        }
        for route in &self.routes {
            let mark = if self.selected == Some(route.id) { "x" } else { " " };
            writeln!(
                f,
                "- [{mark}] {}. {} · {} · {} · {} · {}",
                route.id,
                route.name,
                route.distance_label(),
                route.duration_label(),
                route.elevation_label(),
                route.technicality.as_str()
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for DateTimeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.date {
            Some(date) => writeln!(f, "- Date: {} ({date})", DateLabel(date))?,
            None => writeln!(f, "- Date: _pick {} or later_", self.earliest)?,
        }
        match &self.time {
            Some(time) => writeln!(f, "- Time: {time}")?,
            None => writeln!(f, "- Time: _not set_")?,
        }
        let slots: Vec<String> = self.slots().iter().map(ToString::to_string).collect();
        writeln!(f)?;
        writeln!(f, "Available times: {}", slots.join(", "))
    }
}

impl fmt::Display for DetailsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.trim().is_empty() {
            writeln!(f, "- Name: _required_")?;
        } else {
            writeln!(f, "- Name: {}", self.name.trim())?;
        }
        match self.capacity {
            Some(capacity) => writeln!(f, "- Capacity: {capacity}"),
            None => writeln!(f, "- Capacity: unlimited"),
        }
    }
}
