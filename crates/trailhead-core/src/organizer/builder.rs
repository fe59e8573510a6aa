//! Builder for creating and configuring Organizer instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Organizer;
use crate::{
    catalog::RouteCatalog,
    db::Database,
    draft_store::FileDraftStore,
    error::{Result, TrailheadError},
};

/// Builder for creating and configuring Organizer instances.
#[derive(Debug, Clone, Default)]
pub struct OrganizerBuilder {
    database_path: Option<PathBuf>,
    draft_path: Option<PathBuf>,
    catalog: Option<RouteCatalog>,
}

impl OrganizerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses `$XDG_DATA_HOME/trailhead/trailhead.db`.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets a custom draft file path.
    ///
    /// If not specified, uses
    /// `$XDG_DATA_HOME/trailhead/create-event-draft.json`.
    pub fn with_draft_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.draft_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Replaces the bundled route catalog.
    pub fn with_catalog(mut self, catalog: RouteCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Builds the organizer, creating the database if needed.
    ///
    /// # Errors
    ///
    /// Returns `TrailheadError::XdgDirectory` if a default path cannot be
    /// resolved, `TrailheadError::FileSystem` if the database directory cannot
    /// be created, and `TrailheadError::Database` if schema initialization
    /// fails.
    pub async fn build(self) -> Result<Organizer> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };
        let draft_path = match self.draft_path {
            Some(path) => path,
            None => FileDraftStore::with_default_path()?.path().to_path_buf(),
        };
        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => RouteCatalog::bundled()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TrailheadError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), TrailheadError>(())
        })
        .await
        .map_err(TrailheadError::join)??;

        debug!(
            "Organizer ready (database: {}, draft: {}, {} routes)",
            db_path.display(),
            draft_path.display(),
            catalog.len()
        );
        Ok(Organizer::new(db_path, draft_path, catalog))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("trailhead")
            .place_data_file("trailhead.db")
            .map_err(|e| TrailheadError::XdgDirectory(e.to_string()))
    }
}
