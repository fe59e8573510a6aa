//! Database schema initialization and migrations.

use log::info;

use crate::error::{DatabaseResultExt, Result};

const SCHEMA_SQL: &str = include_str!("../../assets/schema.sql");

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute_batch(SCHEMA_SQL)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Brings databases created by earlier releases up to date.
    fn apply_migrations(&self) -> Result<()> {
        let has_transport_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('events') WHERE name = 'transport_method'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect events table")?;

        if !has_transport_column {
            info!("Adding transport_method column to events table");
            self.connection
                .execute(
                    "ALTER TABLE events ADD COLUMN transport_method TEXT NOT NULL DEFAULT 'TBD'",
                    [],
                )
                .db_context("Failed to add transport_method column to events table")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use tempfile::TempDir;

    use crate::db::Database;

    #[test]
    fn test_adds_missing_transport_column() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("legacy.db");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(
                "CREATE TABLE events (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT NOT NULL,
                    activity TEXT NOT NULL,
                    event_date TEXT NOT NULL,
                    date_label TEXT NOT NULL,
                    time TEXT NOT NULL,
                    route_id INTEGER,
                    available_spots INTEGER,
                    difficulty TEXT NOT NULL,
                    distance TEXT NOT NULL,
                    duration TEXT NOT NULL,
                    elevation TEXT NOT NULL,
                    departure_location TEXT NOT NULL,
                    organizer TEXT NOT NULL,
                    image TEXT NOT NULL,
                    attendees INTEGER NOT NULL,
                    is_past INTEGER NOT NULL,
                    created_at TEXT NOT NULL
                );",
            )
            .unwrap();
        }

        let db = Database::new(&path).expect("migration succeeds");
        let count: i64 = db
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('events') WHERE name = 'transport_method'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);

        // Idempotent on an up-to-date database
        drop(db);
        assert!(Database::new(&path).is_ok());
    }
}
