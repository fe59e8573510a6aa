//! Step sequencing for the event wizard.
//!
//! The flow is `Category → [Route] → DateTime → Details`. The route step only
//! exists for route-requiring categories; an unset category assumes it does.

use serde::{Deserialize, Serialize};

use crate::models::{ActivityCategory, Draft};

/// One logical step of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    Category,
    Route,
    DateTime,
    Details,
}

fn route_step_shown(category: Option<ActivityCategory>) -> bool {
    category.map_or(true, |c| c.requires_route())
}

impl WizardStep {
    /// Number of steps in the flow for the given category.
    ///
    /// ```rust
    /// use trailhead_core::{models::ActivityCategory, wizard::WizardStep};
    ///
    /// assert_eq!(WizardStep::total_steps(None), 4);
    /// assert_eq!(WizardStep::total_steps(Some(ActivityCategory::Hiking)), 4);
    /// assert_eq!(WizardStep::total_steps(Some(ActivityCategory::Social)), 3);
    /// ```
    pub fn total_steps(category: Option<ActivityCategory>) -> u8 {
        if route_step_shown(category) {
            4
        } else {
            3
        }
    }

    /// The steps of the flow, in order.
    pub fn flow(category: Option<ActivityCategory>) -> Vec<WizardStep> {
        if route_step_shown(category) {
            vec![
                WizardStep::Category,
                WizardStep::Route,
                WizardStep::DateTime,
                WizardStep::Details,
            ]
        } else {
            vec![
                WizardStep::Category,
                WizardStep::DateTime,
                WizardStep::Details,
            ]
        }
    }

    /// Successor of this step, or `None` on the last step.
    pub fn next(self, category: Option<ActivityCategory>) -> Option<WizardStep> {
        match self {
            WizardStep::Category if route_step_shown(category) => Some(WizardStep::Route),
            WizardStep::Category | WizardStep::Route => Some(WizardStep::DateTime),
            WizardStep::DateTime => Some(WizardStep::Details),
            WizardStep::Details => None,
        }
    }

    /// Predecessor of this step, or `None` on the first step.
    pub fn previous(self, category: Option<ActivityCategory>) -> Option<WizardStep> {
        match self {
            WizardStep::Category => None,
            WizardStep::Route => Some(WizardStep::Category),
            WizardStep::DateTime if route_step_shown(category) => Some(WizardStep::Route),
            WizardStep::DateTime => Some(WizardStep::Category),
            WizardStep::Details => Some(WizardStep::DateTime),
        }
    }

    /// 1-based index of this step in the effective flow.
    pub fn position(self, category: Option<ActivityCategory>) -> u8 {
        let skipped = u8::from(!route_step_shown(category));
        match self {
            WizardStep::Category => 1,
            WizardStep::Route => 2,
            WizardStep::DateTime => 3 - skipped,
            WizardStep::Details => 4 - skipped,
        }
    }

    /// The first step whose data is still missing, used when a persisted
    /// draft is reopened.
    pub fn resume_point(draft: &Draft) -> WizardStep {
        let Some(category) = draft.activity_category else {
            return WizardStep::Category;
        };
        let schedule_started = draft.scheduled_date.is_some() || draft.scheduled_time.is_some();
        if category.requires_route() && draft.route_reference.is_none() && !schedule_started {
            WizardStep::Route
        } else if draft.scheduled_date.is_none() || draft.scheduled_time.is_none() {
            WizardStep::DateTime
        } else {
            WizardStep::Details
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Category => "category",
            WizardStep::Route => "route",
            WizardStep::DateTime => "date-time",
            WizardStep::Details => "details",
        }
    }

    /// Heading shown above the step.
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Category => "Choose an activity",
            WizardStep::Route => "Pick a route",
            WizardStep::DateTime => "Pick a date and time",
            WizardStep::Details => "Name your event",
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    const WITHOUT_ROUTE: [ActivityCategory; 3] = [
        ActivityCategory::Skiing,
        ActivityCategory::Bouldering,
        ActivityCategory::Social,
    ];
    const WITH_ROUTE: [ActivityCategory; 3] = [
        ActivityCategory::Hiking,
        ActivityCategory::Cycling,
        ActivityCategory::ViaFerrata,
    ];

    #[test]
    fn test_categories_without_route_skip_route_step() {
        for category in WITHOUT_ROUTE {
            let c = Some(category);
            assert_eq!(WizardStep::total_steps(c), 3);
            assert_eq!(WizardStep::Category.next(c), Some(WizardStep::DateTime));
            assert_eq!(WizardStep::DateTime.previous(c), Some(WizardStep::Category));
            assert_eq!(WizardStep::DateTime.position(c), 2);
            assert_eq!(WizardStep::Details.position(c), 3);
        }
    }

    #[test]
    fn test_categories_with_route_reach_route_step() {
        for category in WITH_ROUTE {
            let c = Some(category);
            assert_eq!(WizardStep::total_steps(c), 4);
            assert_eq!(WizardStep::Category.next(c), Some(WizardStep::Route));
            assert_eq!(WizardStep::Route.position(c), 2);
            assert_eq!(WizardStep::DateTime.previous(c), Some(WizardStep::Route));
        }
    }

    #[test]
    fn test_edges_of_flow() {
        assert_eq!(WizardStep::Category.previous(None), None);
        assert_eq!(WizardStep::Details.next(None), None);
        assert_eq!(WizardStep::Route.next(None), Some(WizardStep::DateTime));
        assert_eq!(WizardStep::Details.previous(None), Some(WizardStep::DateTime));
    }

    #[test]
    fn test_flow_matches_next_chain() {
        for category in ActivityCategory::ALL.map(Some).into_iter().chain([None]) {
            let mut chain = vec![WizardStep::Category];
            while let Some(next) = chain.last().and_then(|s| s.next(category)) {
                chain.push(next);
            }
            assert_eq!(chain, WizardStep::flow(category));
            assert_eq!(chain.len(), usize::from(WizardStep::total_steps(category)));
            for (index, step) in chain.iter().enumerate() {
                assert_eq!(usize::from(step.position(category)), index + 1);
            }
        }
    }

    #[test]
    fn test_resume_point() {
        let mut draft = Draft::default();
        assert_eq!(WizardStep::resume_point(&draft), WizardStep::Category);

        draft.activity_category = Some(ActivityCategory::Hiking);
        assert_eq!(WizardStep::resume_point(&draft), WizardStep::Route);

        draft.scheduled_date = Some(date(2030, 1, 1));
        assert_eq!(WizardStep::resume_point(&draft), WizardStep::DateTime);

        draft.scheduled_time = Some("10:00".parse().unwrap());
        assert_eq!(WizardStep::resume_point(&draft), WizardStep::Details);

        let draft = Draft {
            activity_category: Some(ActivityCategory::Social),
            ..Default::default()
        };
        assert_eq!(WizardStep::resume_point(&draft), WizardStep::DateTime);
    }
}
