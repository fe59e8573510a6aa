//! Event create and read queries.

use std::{fmt::Display, str::FromStr};

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Event, EventFilter, EventRecord, EventWindow},
};

const INSERT_EVENT_SQL: &str = "INSERT INTO events (title, activity, event_date, date_label, time, route_id, available_spots, difficulty, distance, duration, elevation, departure_location, transport_method, organizer, image, attendees, is_past, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)";
const EVENT_COLUMNS: &str = "id, title, activity, event_date, date_label, time, route_id, available_spots, difficulty, distance, duration, elevation, departure_location, transport_method, organizer, image, attendees, is_past, created_at";

/// Parses a text column, reporting failures as conversion errors.
fn parse_column<T>(row: &Row<'_>, index: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw: String = row.get(index)?;
    raw.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            index,
            Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid value '{raw}': {e}"),
            )),
        )
    })
}

fn event_from_row(row: &Row<'_>) -> rusqlite::Result<Event> {
    Ok(Event {
        id: row.get::<_, i64>(0)? as u64,
        record: EventRecord {
            title: row.get(1)?,
            activity: parse_column(row, 2)?,
            event_date: parse_column::<Date>(row, 3)?,
            date_label: row.get(4)?,
            time: parse_column(row, 5)?,
            route_id: row.get::<_, Option<i64>>(6)?.map(|id| id as u64),
            available_spots: row.get(7)?,
            difficulty: parse_column(row, 8)?,
            distance: row.get(9)?,
            duration: row.get(10)?,
            elevation: row.get(11)?,
            departure_location: row.get(12)?,
            transport_method: row.get(13)?,
            organizer: row.get(14)?,
            image: row.get(15)?,
            attendees: row.get(16)?,
            is_past: row.get(17)?,
        },
        created_at: parse_column::<Timestamp>(row, 18)?,
    })
}

impl super::Database {
    /// Inserts a new event and returns it with its assigned id.
    pub fn create_event(&mut self, record: &EventRecord) -> Result<Event> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();

        tx.execute(
            INSERT_EVENT_SQL,
            params![
                record.title,
                record.activity.as_str(),
                record.event_date.to_string(),
                record.date_label,
                record.time.to_string(),
                record.route_id.map(|id| id as i64),
                record.available_spots,
                record.difficulty.as_str(),
                record.distance,
                record.duration,
                record.elevation,
                record.departure_location,
                record.transport_method,
                record.organizer,
                record.image,
                record.attendees,
                record.is_past,
                now.to_string(),
            ],
        )
        .db_context("Failed to insert event")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Event {
            id,
            record: record.clone(),
            created_at: now,
        })
    }

    /// Retrieves an event by its ID.
    pub fn get_event(&self, id: u64) -> Result<Option<Event>> {
        let query = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?1");
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id as i64], event_from_row)
            .optional()
            .db_context("Failed to query event")
    }

    /// Lists events in the filter's time window relative to `today`.
    ///
    /// Upcoming and all events are ordered soonest first; past events most
    /// recent first.
    pub fn list_events(&self, filter: &EventFilter, today: Date) -> Result<Vec<Event>> {
        let mut query = format!("SELECT {EVENT_COLUMNS} FROM events");
        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        match filter.window {
            EventWindow::Upcoming => {
                conditions.push("event_date >= ?");
                params_vec.push(Box::new(today.to_string()));
            }
            EventWindow::Past => {
                conditions.push("event_date < ?");
                params_vec.push(Box::new(today.to_string()));
            }
            EventWindow::All => {}
        }

        if let Some(activity) = filter.activity {
            conditions.push("activity = ?");
            params_vec.push(Box::new(activity.as_str()));
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(match filter.window {
            EventWindow::Past => " ORDER BY event_date DESC, id DESC",
            EventWindow::Upcoming | EventWindow::All => " ORDER BY event_date ASC, id ASC",
        });

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let events = stmt
            .query_map(&params_refs[..], event_from_row)
            .db_context("Failed to query events")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read event rows")?;

        Ok(events)
    }
}
