//! Best-effort persistence of the in-progress draft.
//!
//! The draft lives under a single fixed storage key as a JSON record. Storage
//! is never correctness-critical: read and parse failures yield an empty
//! draft, write failures are logged and otherwise ignored.
//!
//! ```text
//! {
//!   "activityCategory": "hiking",
//!   "routeReference": 3,
//!   "scheduledDate": "2026-10-24T00:00:00Z",
//!   "scheduledTime": "09:00",
//!   "name": "Sunrise ridge walk",
//!   "capacity": 8
//! }
//! ```

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use jiff::{civil::Date, tz::TimeZone, Timestamp};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrailheadError},
    models::{ActivityCategory, Draft, TimeSlot},
};

/// Fixed key the draft is stored under.
pub const DRAFT_STORAGE_KEY: &str = "create-event-draft";

/// Persistence for the wizard's draft.
///
/// Implementations must never fail towards the caller.
pub trait DraftStore {
    /// Reads the persisted draft, or an empty draft when none is usable.
    fn load(&self) -> Draft;

    /// Persists the draft if it has been touched; an empty draft is never
    /// written.
    fn save(&self, draft: &Draft);

    /// Removes the persisted draft.
    fn clear(&self);
}

impl<T: DraftStore + ?Sized> DraftStore for &T {
    fn load(&self) -> Draft {
        (**self).load()
    }

    fn save(&self, draft: &Draft) {
        (**self).save(draft)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// On-disk shape of a draft.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredDraft {
    #[serde(default)]
    activity_category: Option<ActivityCategory>,
    #[serde(default)]
    route_reference: Option<u64>,
    #[serde(default)]
    scheduled_date: Option<String>,
    #[serde(default)]
    scheduled_time: Option<TimeSlot>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    capacity: Option<u32>,
}

/// Serializes a draft, writing the date as a midnight UTC timestamp.
pub fn encode_draft(draft: &Draft) -> Result<String> {
    let stored = StoredDraft {
        activity_category: draft.activity_category,
        route_reference: draft.route_reference,
        scheduled_date: draft.scheduled_date.map(|date| format!("{date}T00:00:00Z")),
        scheduled_time: draft.scheduled_time,
        name: draft.name.clone(),
        capacity: draft.capacity,
    };
    Ok(serde_json::to_string(&stored)?)
}

/// Parses a serialized draft.
///
/// The date accepts a full timestamp or a bare ISO date. Values that violate
/// draft invariants (a route on a category without routes, zero capacity) are
/// dropped rather than rejected.
pub fn decode_draft(raw: &str) -> Result<Draft> {
    let stored: StoredDraft = serde_json::from_str(raw)?;

    let scheduled_date = stored
        .scheduled_date
        .as_deref()
        .map(parse_stored_date)
        .transpose()?;

    let mut draft = Draft {
        activity_category: stored.activity_category,
        route_reference: stored.route_reference,
        scheduled_date,
        scheduled_time: stored.scheduled_time,
        name: stored.name,
        capacity: stored.capacity.filter(|&c| c > 0),
    };
    if !draft.requires_route() {
        draft.route_reference = None;
    }
    Ok(draft)
}

fn parse_stored_date(value: &str) -> Result<Date> {
    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Ok(timestamp.to_zoned(TimeZone::UTC).date());
    }
    value.parse::<Date>().map_err(|e| {
        TrailheadError::invalid_input("scheduledDate").with_reason(format!("{value}: {e}"))
    })
}

/// Draft store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileDraftStore {
    path: PathBuf,
}

impl FileDraftStore {
    /// Creates a store writing to the given file.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates a store for the default XDG location:
    /// `$XDG_DATA_HOME/trailhead/create-event-draft.json`.
    pub fn with_default_path() -> Result<Self> {
        xdg::BaseDirectories::with_prefix("trailhead")
            .place_data_file(format!("{DRAFT_STORAGE_KEY}.json"))
            .map(Self::new)
            .map_err(|e| TrailheadError::XdgDirectory(e.to_string()))
    }

    /// Path of the draft file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, contents)
    }
}

impl DraftStore for FileDraftStore {
    fn load(&self) -> Draft {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Draft::default(),
            Err(e) => {
                warn!("Failed to read draft at {}: {e}", self.path.display());
                return Draft::default();
            }
        };

        match decode_draft(&raw) {
            Ok(draft) => draft,
            Err(e) => {
                warn!("Discarding unreadable draft at {}: {e}", self.path.display());
                self.clear();
                Draft::default()
            }
        }
    }

    fn save(&self, draft: &Draft) {
        if !draft.is_touched() {
            debug!("Skipping save of empty draft");
            return;
        }
        let result = encode_draft(draft).and_then(|json| {
            self.write(&json).map_err(|e| TrailheadError::FileSystem {
                path: self.path.clone(),
                source: e,
            })
        });
        if let Err(e) = result {
            warn!("Failed to save draft: {e}");
        }
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("Cleared draft at {}", self.path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to clear draft at {}: {e}", self.path.display()),
        }
    }
}

/// Draft store kept in process memory, keyed like browser local storage.
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryDraftStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose draft key already holds `raw`.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let store = Self::new();
        store.set_raw(raw);
        store
    }

    /// The raw value under the draft key, if any.
    pub fn raw(&self) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(DRAFT_STORAGE_KEY)
            .cloned()
    }

    /// Overwrites the raw value under the draft key.
    pub fn set_raw(&self, raw: impl Into<String>) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(DRAFT_STORAGE_KEY.to_string(), raw.into());
    }
}

impl DraftStore for MemoryDraftStore {
    fn load(&self) -> Draft {
        let Some(raw) = self.raw() else {
            return Draft::default();
        };
        decode_draft(&raw).unwrap_or_else(|e| {
            warn!("Discarding unreadable draft: {e}");
            self.clear();
            Draft::default()
        })
    }

    fn save(&self, draft: &Draft) {
        if !draft.is_touched() {
            return;
        }
        match encode_draft(draft) {
            Ok(json) => self.set_raw(json),
            Err(e) => warn!("Failed to save draft: {e}"),
        }
    }

    fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(DRAFT_STORAGE_KEY);
    }
}
