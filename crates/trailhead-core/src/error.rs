//! Error types for the trailhead library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for catalog, store and configuration operations.
#[derive(Error, Debug)]
pub enum TrailheadError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Event not found for the given ID
    #[error("Event with ID {id} not found")]
    EventNotFound { id: u64 },
    /// Route not found in the catalog
    #[error("Route with ID {id} not found")]
    RouteNotFound { id: u64 },
    /// A wizard instance already holds the page
    #[error("Another event wizard is already open")]
    WizardAlreadyOpen,
    /// The wizard must be in the editing state for this operation
    #[error("The event wizard is not open for editing")]
    WizardNotEditing,
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TrailheadError {
        TrailheadError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TrailheadError {
        TrailheadError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TrailheadError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a `spawn_blocking` join failure.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TrailheadError::database(message).with_source(e))
    }
}

/// Errors surfaced by the submission path of the wizard.
///
/// Validation failures never reach the event store; store failures leave the
/// draft untouched so the user can submit again.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// A required draft field was missing at submit time
    #[error("Missing required field: {field}")]
    Validation { field: &'static str },
    /// A submission is already outstanding
    #[error("A submission is already in progress")]
    InFlight,
    /// The wizard is not in the editing state
    #[error("The wizard is not open for editing")]
    NotEditing,
    /// The event store rejected the create operation
    #[error("Failed to create event: {0}")]
    Store(#[from] TrailheadError),
}

/// Result type alias for trailhead operations
pub type Result<T> = std::result::Result<T, TrailheadError>;
