//! Event store operations for the Organizer.

use jiff::{civil::Date, Zoned};
use tokio::task;

use super::Organizer;
use crate::{
    db::Database,
    error::{Result, TrailheadError},
    gateway::EventStore,
    models::{Event, EventFilter, EventRecord},
    params::{Id, ListEvents},
};

impl Organizer {
    /// Inserts a new event record.
    pub async fn insert_event(&self, record: EventRecord) -> Result<Event> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_event(&record)
        })
        .await
        .map_err(TrailheadError::join)?
    }

    /// Retrieves an event by its ID.
    pub async fn get_event(&self, params: &Id) -> Result<Option<Event>> {
        let db_path = self.db_path.clone();
        let event_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_event(event_id)
        })
        .await
        .map_err(TrailheadError::join)?
    }

    /// Lists events relative to the local date.
    pub async fn list_events(&self, params: &ListEvents) -> Result<Vec<Event>> {
        self.list_events_on(EventFilter::from(params), Zoned::now().date())
            .await
    }

    /// Lists events relative to an explicit date.
    pub async fn list_events_on(&self, filter: EventFilter, today: Date) -> Result<Vec<Event>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_events(&filter, today)
        })
        .await
        .map_err(TrailheadError::join)?
    }
}

impl EventStore for Organizer {
    async fn create_event(&self, record: EventRecord) -> Result<Event> {
        self.insert_event(record).await
    }
}
