//! Wizard construction and headless editing of the persisted draft.

use jiff::civil::Date;
use log::info;

use super::Organizer;
use crate::{
    catalog::RouteCatalog,
    display::WizardScreen,
    draft_store::{DraftStore, FileDraftStore},
    error::{Result, SubmissionError, TrailheadError},
    gateway::SubmissionGateway,
    models::{Draft, Event, TimeSlot},
    params::{SetDetails, SetSchedule},
    wizard::{ScrollLock, ShellState, Wizard, WizardStep},
};

impl<S: DraftStore> Wizard<S> {
    /// Applies the schedule fields that are present.
    pub fn apply_schedule(&mut self, params: &SetSchedule) -> Result<()> {
        if let Some(raw) = params.date.as_deref() {
            let date = raw.trim().parse::<Date>().map_err(|e| {
                TrailheadError::invalid_input("date").with_reason(format!("{raw}: {e}"))
            })?;
            self.set_date(date)?;
        }
        if let Some(raw) = params.time.as_deref() {
            let slot = raw
                .parse::<TimeSlot>()
                .map_err(|e| TrailheadError::invalid_input("time").with_reason(e))?;
            self.set_time(slot)?;
        }
        Ok(())
    }

    /// Applies the detail fields that are present.
    pub fn apply_details(&mut self, params: &SetDetails) -> Result<()> {
        if let Some(name) = &params.name {
            self.set_name(name.as_str())?;
        }
        if let Some(capacity) = &params.capacity {
            self.set_capacity_input(capacity)?;
        }
        Ok(())
    }
}

impl Organizer {
    /// Draft store backed by the configured draft file.
    pub fn draft_store(&self) -> FileDraftStore {
        FileDraftStore::new(&self.draft_path)
    }

    /// A closed wizard over the draft file.
    pub fn wizard(&self, scroll: ScrollLock) -> Wizard<FileDraftStore> {
        Wizard::new(self.draft_store(), scroll)
    }

    /// Gateway creating events in this organizer's database.
    pub fn gateway(&self) -> SubmissionGateway<'_, Organizer> {
        SubmissionGateway::new(&self.catalog, self)
    }

    /// The persisted draft.
    pub fn load_draft(&self) -> Draft {
        self.draft_store().load()
    }

    /// The screen the persisted draft resumes at.
    pub fn draft_screen(&self) -> Result<WizardScreen> {
        let mut wizard = self.wizard(ScrollLock::new());
        wizard.resume()?;
        Ok(wizard.screen(&self.catalog))
    }

    /// Applies one edit to the persisted draft through a short-lived wizard
    /// and returns the screen the draft now resumes at.
    pub fn edit_draft<F>(&self, edit: F) -> Result<WizardScreen>
    where
        F: FnOnce(&mut Wizard<FileDraftStore>, &RouteCatalog) -> Result<()>,
    {
        {
            let mut wizard = self.wizard(ScrollLock::new());
            wizard.resume()?;
            edit(&mut wizard, &self.catalog)?;
        }
        self.draft_screen()
    }

    /// Discards the persisted draft. Returns whether there was anything to
    /// discard.
    pub fn discard_draft(&self) -> Result<bool> {
        let mut wizard = self.wizard(ScrollLock::new());
        wizard.open()?;
        if wizard.request_close() == ShellState::ConfirmingDiscard {
            wizard.discard();
            info!("Discarded draft at {}", self.draft_path.display());
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Submits the persisted draft.
    ///
    /// A draft that cannot reach the details step yet fails validation with
    /// its first missing field, without contacting the event store.
    pub async fn submit_draft(&self) -> std::result::Result<Event, SubmissionError> {
        let mut wizard = self.wizard(ScrollLock::new());
        wizard.resume()?;
        if wizard.step() != WizardStep::Details {
            let field = wizard.draft().first_missing_field().unwrap_or("activity");
            return Err(SubmissionError::Validation { field });
        }
        wizard.submit(&self.gateway()).await
    }
}
