#![allow(dead_code)]

use jiff::civil::Date;
use tempfile::TempDir;
use trailhead_core::{ActivityCategory, Draft, Organizer, OrganizerBuilder, TimeSlot};

/// Helper function to create a test organizer with its database and draft
/// file inside a temporary directory
pub async fn create_test_organizer() -> (TempDir, Organizer) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let organizer = OrganizerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_draft_path(Some(temp_dir.path().join("create-event-draft.json")))
        .build()
        .await
        .expect("Failed to create organizer");
    (temp_dir, organizer)
}

/// A draft ready for submission
pub fn complete_draft(category: ActivityCategory, name: &str, date: Date) -> Draft {
    Draft {
        activity_category: Some(category),
        scheduled_date: Some(date),
        scheduled_time: Some(TimeSlot::ToBeConfirmed),
        name: name.to_string(),
        ..Default::default()
    }
}
