//! The event creation wizard.
//!
//! [`Wizard`] is the shell composing the step sequencer, the step views, the
//! injected [`DraftStore`] and the submission gateway. It owns the modal
//! lifecycle:
//!
//! ```text
//!            open                      close (draft touched)
//!  Closed ─────────▶ Editing ─────────────────────────────▶ ConfirmingDiscard
//!    ▲  ▲              │  ▲            continue editing            │
//!    │  │  close       │  └────────────────────────────────────────┘
//!    │  └──(untouched)─┤                                           │
//!    │                 │ submit succeeded                 discard  │
//!    └─────────────────┴───────────────────────────────────────────┘
//! ```
//!
//! While not `Closed` the wizard holds the page's [`ScrollGuard`]. Every field
//! update is written through to the draft store.
//!
//! # Example
//!
//! ```rust
//! use jiff::civil::date;
//! use trailhead_core::{
//!     draft_store::MemoryDraftStore,
//!     models::ActivityCategory,
//!     wizard::{ScrollLock, Wizard, WizardStep},
//! };
//!
//! let mut wizard = Wizard::new(MemoryDraftStore::new(), ScrollLock::new())
//!     .with_today(date(2026, 10, 18));
//! wizard.open().unwrap();
//! wizard.select_category(ActivityCategory::Skiing).unwrap();
//! assert_eq!(wizard.next().unwrap(), WizardStep::DateTime);
//! assert_eq!(wizard.total_steps(), 3);
//! ```

use jiff::{civil::Date, Zoned};
use log::debug;

use crate::{
    catalog::RouteCatalog,
    display::WizardScreen,
    draft_store::DraftStore,
    error::{Result, SubmissionError, TrailheadError},
    gateway::{EventStore, SubmissionGateway},
    models::{ActivityCategory, Draft, Event, RouteFilter, TimeSlot},
};

pub mod scroll;
pub mod step;
pub mod views;


pub use scroll::{ScrollGuard, ScrollLock};
pub use step::WizardStep;
pub use views::{
    check_date, parse_capacity, toggle_route, CategoryView, DateTimeView, DetailsView, RouteView,
    StepView,
};

/// Modal lifecycle state of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Closed,
    Editing,
    ConfirmingDiscard,
}

/// Direction of the last step transition, for presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Back,
}

/// The wizard shell.
pub struct Wizard<S> {
    store: S,
    scroll: ScrollLock,
    guard: Option<ScrollGuard>,
    state: ShellState,
    draft: Draft,
    step: WizardStep,
    direction: Direction,
    submitting: bool,
    today: Date,
}

impl<S: DraftStore> Wizard<S> {
    /// Creates a closed wizard over a draft store and the page's scroll lock.
    pub fn new(store: S, scroll: ScrollLock) -> Self {
        Self {
            store,
            scroll,
            guard: None,
            state: ShellState::Closed,
            draft: Draft::default(),
            step: WizardStep::Category,
            direction: Direction::Forward,
            submitting: false,
            today: Zoned::now().date(),
        }
    }

    /// Overrides the date used for the "not in the past" rule.
    pub fn with_today(mut self, today: Date) -> Self {
        self.today = today;
        self
    }

    // ── Lifecycle ──

    /// Opens the wizard on the category step, hydrating the draft from the
    /// store. Opening an already open wizard does nothing.
    ///
    /// # Errors
    ///
    /// Returns `TrailheadError::WizardAlreadyOpen` if another wizard holds the
    /// page's scroll lock.
    pub fn open(&mut self) -> Result<()> {
        if self.state != ShellState::Closed {
            return Ok(());
        }
        let guard = self
            .scroll
            .try_acquire()
            .ok_or(TrailheadError::WizardAlreadyOpen)?;

        self.guard = Some(guard);
        self.draft = self.store.load();
        self.step = WizardStep::Category;
        self.direction = Direction::Forward;
        self.submitting = false;
        self.state = ShellState::Editing;
        debug!("Wizard opened (draft touched: {})", self.draft.is_touched());
        Ok(())
    }

    /// Opens the wizard on the first step whose data is still missing.
    pub fn resume(&mut self) -> Result<()> {
        self.open()?;
        self.step = WizardStep::resume_point(&self.draft);
        Ok(())
    }

    /// Handles a close request.
    ///
    /// An untouched draft closes straight away; otherwise the wizard asks for
    /// discard confirmation first.
    pub fn request_close(&mut self) -> ShellState {
        if self.state == ShellState::Editing {
            if self.draft.is_touched() {
                self.state = ShellState::ConfirmingDiscard;
            } else {
                self.close();
            }
        }
        self.state
    }

    /// Returns from the discard confirmation to editing.
    pub fn continue_editing(&mut self) {
        if self.state == ShellState::ConfirmingDiscard {
            self.state = ShellState::Editing;
        }
    }

    /// Confirms the discard: clears the stored draft and closes.
    pub fn discard(&mut self) {
        if self.state == ShellState::ConfirmingDiscard {
            self.store.clear();
            self.draft = Draft::default();
            self.close();
        }
    }

    fn close(&mut self) {
        self.state = ShellState::Closed;
        self.step = WizardStep::Category;
        self.direction = Direction::Forward;
        self.submitting = false;
        self.guard = None;
        debug!("Wizard closed");
    }

    // ── Accessors ──

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Number of steps in the current flow.
    pub fn total_steps(&self) -> u8 {
        WizardStep::total_steps(self.draft.activity_category)
    }

    /// 1-based position of the current step in the current flow.
    pub fn position(&self) -> u8 {
        self.step.position(self.draft.activity_category)
    }

    // ── Field updates ──

    fn ensure_editing(&self) -> Result<()> {
        if self.state == ShellState::Editing {
            Ok(())
        } else {
            Err(TrailheadError::WizardNotEditing)
        }
    }

    /// Writes the draft through to the store. A draft emptied field by field
    /// leaves nothing behind to restore.
    fn persist(&self) {
        if self.draft.is_touched() {
            self.store.save(&self.draft);
        } else {
            self.store.clear();
        }
    }

    /// Selects the activity. Switching to a category without routes drops any
    /// selected route, and a current step outside the new flow falls back to
    /// the category step.
    pub fn select_category(&mut self, category: ActivityCategory) -> Result<()> {
        self.ensure_editing()?;
        self.draft.activity_category = Some(category);
        if !category.requires_route() {
            self.draft.route_reference = None;
        }
        if !WizardStep::flow(Some(category)).contains(&self.step) {
            self.step = WizardStep::Category;
            self.direction = Direction::Back;
        }
        self.persist();
        Ok(())
    }

    /// Toggles a route: selecting the selected route deselects it.
    ///
    /// Returns the resulting selection.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidInput` when the current category has no route step,
    /// or the route does not exist or does not serve the category.
    pub fn toggle_route(&mut self, id: u64, catalog: &RouteCatalog) -> Result<Option<u64>> {
        self.ensure_editing()?;
        let Some(category) = self.draft.activity_category.filter(|c| c.requires_route()) else {
            return Err(TrailheadError::invalid_input("route")
                .with_reason("the selected activity does not use routes"));
        };
        if self.draft.route_reference != Some(id) {
            let route = catalog.require(id)?;
            if !route.serves(category) {
                return Err(TrailheadError::invalid_input("route").with_reason(format!(
                    "route {id} is not offered for {}",
                    category.label()
                )));
            }
        }
        self.draft.route_reference = toggle_route(self.draft.route_reference, id);
        self.persist();
        Ok(self.draft.route_reference)
    }

    /// Sets the event date, which must not lie before today.
    pub fn set_date(&mut self, date: Date) -> Result<()> {
        self.ensure_editing()?;
        self.draft.scheduled_date = Some(check_date(date, self.today)?);
        self.persist();
        Ok(())
    }

    /// Sets the start time slot.
    pub fn set_time(&mut self, slot: TimeSlot) -> Result<()> {
        self.ensure_editing()?;
        self.draft.scheduled_time = Some(slot);
        self.persist();
        Ok(())
    }

    /// Sets the event name as typed.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.ensure_editing()?;
        self.draft.name = name.into();
        self.persist();
        Ok(())
    }

    /// Sets the capacity from raw input; anything but a positive integer
    /// means unlimited. Returns the resulting capacity.
    pub fn set_capacity_input(&mut self, input: &str) -> Result<Option<u32>> {
        self.ensure_editing()?;
        self.draft.capacity = parse_capacity(input);
        self.persist();
        Ok(self.draft.capacity)
    }

    // ── Sequencing ──

    /// The view of the current step.
    pub fn view(&self, catalog: &RouteCatalog) -> StepView {
        match self.step {
            WizardStep::Category => StepView::Category(CategoryView {
                selected: self.draft.activity_category,
            }),
            WizardStep::Route => StepView::Route(RouteView {
                category: self.draft.activity_category,
                routes: self
                    .draft
                    .activity_category
                    .map(|c| catalog.list(&RouteFilter::for_activity(c)))
                    .unwrap_or_default(),
                selected: self.draft.route_reference,
            }),
            WizardStep::DateTime => StepView::DateTime(DateTimeView {
                date: self.draft.scheduled_date,
                time: self.draft.scheduled_time,
                earliest: self.today,
            }),
            WizardStep::Details => StepView::Details(DetailsView {
                name: self.draft.name.clone(),
                capacity: self.draft.capacity,
                submitting: self.submitting,
            }),
        }
    }

    /// The current step view with its position in the flow.
    pub fn screen(&self, catalog: &RouteCatalog) -> WizardScreen {
        WizardScreen {
            step: self.step,
            position: self.position(),
            total: self.total_steps(),
            view: self.view(catalog),
        }
    }

    fn can_continue(&self) -> bool {
        match self.step {
            WizardStep::Category => self.draft.activity_category.is_some(),
            WizardStep::Route => true,
            WizardStep::DateTime => {
                self.draft.scheduled_date.is_some() && self.draft.scheduled_time.is_some()
            }
            WizardStep::Details => false,
        }
    }

    /// Advances to the next step of the flow.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidInput` while the current step is incomplete or when
    /// already on the last step.
    pub fn next(&mut self) -> Result<WizardStep> {
        self.ensure_editing()?;
        if !self.can_continue() {
            return Err(TrailheadError::invalid_input(self.step.as_str())
                .with_reason("complete this step before continuing"));
        }
        let next = self
            .step
            .next(self.draft.activity_category)
            .ok_or_else(|| {
                TrailheadError::invalid_input(self.step.as_str())
                    .with_reason("this is the last step; submit the event instead")
            })?;
        self.step = next;
        self.direction = Direction::Forward;
        Ok(next)
    }

    /// Goes back one step, staying on the first step if already there.
    pub fn back(&mut self) -> Result<WizardStep> {
        self.ensure_editing()?;
        if let Some(previous) = self.step.previous(self.draft.activity_category) {
            self.step = previous;
        }
        self.direction = Direction::Back;
        Ok(self.step)
    }

    // ── Submission ──

    /// Marks a submission as in flight and returns the draft to submit.
    ///
    /// # Errors
    ///
    /// `NotEditing` unless editing on the details step, `InFlight` while a
    /// submission is outstanding.
    pub fn begin_submission(&mut self) -> std::result::Result<Draft, SubmissionError> {
        if self.state != ShellState::Editing || self.step != WizardStep::Details {
            return Err(SubmissionError::NotEditing);
        }
        if self.submitting {
            return Err(SubmissionError::InFlight);
        }
        self.submitting = true;
        Ok(self.draft.clone())
    }

    /// Records the outcome of the outstanding submission.
    ///
    /// Success clears the stored draft and closes the wizard; failure keeps
    /// the draft for a manual retry.
    pub fn finish_submission(&mut self, outcome: &std::result::Result<Event, SubmissionError>) {
        self.submitting = false;
        if outcome.is_ok() {
            self.store.clear();
            self.draft = Draft::default();
            self.close();
        }
    }

    /// Submits the draft through the gateway and applies the outcome.
    pub async fn submit<E: EventStore + Sync>(
        &mut self,
        gateway: &SubmissionGateway<'_, E>,
    ) -> std::result::Result<Event, SubmissionError> {
        let draft = self.begin_submission()?;
        let outcome = gateway.submit_on(&draft, self.today).await;
        self.finish_submission(&outcome);
        outcome
    }
}
