//! Tests for the organizer module.

use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::{
    error::{SubmissionError, TrailheadError},
    gateway::{EventStore, PLACEHOLDER_TBD},
    models::{ActivityCategory, Difficulty, EventFilter, EventWindow, TimeSlot},
    params::{Id, ListEvents, ListRoutes, SetDetails, SetSchedule},
    wizard::WizardStep,
};

/// Helper function to create a test organizer
async fn create_test_organizer() -> (TempDir, Organizer) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let organizer = OrganizerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_draft_path(Some(temp_dir.path().join("draft.json")))
        .build()
        .await
        .expect("Failed to create organizer");
    (temp_dir, organizer)
}

fn schedule(date: &str, time: &str) -> SetSchedule {
    SetSchedule {
        date: Some(date.to_string()),
        time: Some(time.to_string()),
    }
}

#[tokio::test]
async fn test_headless_draft_flow_creates_event() {
    let (_temp_dir, organizer) = create_test_organizer().await;

    let screen = organizer
        .edit_draft(|wizard, _| wizard.select_category(ActivityCategory::Hiking))
        .unwrap();
    assert_eq!(screen.step, WizardStep::Route);
    assert_eq!(screen.total, 4);

    organizer
        .edit_draft(|wizard, catalog| wizard.toggle_route(8, catalog).map(|_| ()))
        .unwrap();
    organizer
        .edit_draft(|wizard, _| wizard.apply_schedule(&schedule("2030-06-01", "07:30")))
        .unwrap();
    let screen = organizer
        .edit_draft(|wizard, _| {
            wizard.apply_details(&SetDetails {
                name: Some(" Faulhorn sunrise ".to_string()),
                capacity: Some("6".to_string()),
            })
        })
        .unwrap();
    assert_eq!(screen.step, WizardStep::Details);

    let event = organizer.submit_draft().await.expect("submit succeeds");
    assert_eq!(event.record.title, "Faulhorn sunrise");
    assert_eq!(event.record.route_id, Some(8));
    assert_eq!(event.record.available_spots, Some(6));
    assert_eq!(event.record.date_label, "Sat, Jun 1");

    assert!(!organizer.load_draft().is_touched());
    assert!(!organizer.draft_path().exists());

    let stored = organizer.show_event(&Id { id: event.id }).await.unwrap();
    assert_eq!(stored.record, event.record);
}

#[tokio::test]
async fn test_submit_incomplete_draft_names_missing_field() {
    let (_temp_dir, organizer) = create_test_organizer().await;
    organizer
        .edit_draft(|wizard, _| wizard.select_category(ActivityCategory::Social))
        .unwrap();

    let err = organizer.submit_draft().await.unwrap_err();
    assert!(matches!(err, SubmissionError::Validation { field: "date" }));

    organizer
        .edit_draft(|wizard, _| wizard.apply_schedule(&schedule("2030-01-05", "tbc")))
        .unwrap();
    let err = organizer.submit_draft().await.unwrap_err();
    assert!(matches!(err, SubmissionError::Validation { field: "name" }));

    assert!(organizer.load_draft().is_touched());
    let events = organizer
        .list_events(&ListEvents {
            window: EventWindow::All,
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_invalid_schedule_input_rejected() {
    let (_temp_dir, organizer) = create_test_organizer().await;

    let err = organizer
        .edit_draft(|wizard, _| wizard.apply_schedule(&schedule("2030-13-40", "09:00")))
        .unwrap_err();
    assert!(matches!(err, TrailheadError::InvalidInput { ref field, .. } if field == "date"));

    let err = organizer
        .edit_draft(|wizard, _| wizard.apply_schedule(&schedule("2030-01-05", "09:15")))
        .unwrap_err();
    assert!(matches!(err, TrailheadError::InvalidInput { ref field, .. } if field == "time"));

    let err = organizer
        .edit_draft(|wizard, _| wizard.apply_schedule(&schedule("2001-01-01", "09:00")))
        .unwrap_err();
    assert!(matches!(err, TrailheadError::InvalidInput { ref field, .. } if field == "date"));
}

#[tokio::test]
async fn test_discard_draft() {
    let (_temp_dir, organizer) = create_test_organizer().await;
    assert!(!organizer.discard_draft().unwrap());

    organizer
        .edit_draft(|wizard, _| wizard.set_name("Temporary"))
        .unwrap();
    assert!(organizer.draft_path().exists());

    assert!(organizer.discard_draft().unwrap());
    assert!(!organizer.draft_path().exists());
}

#[tokio::test]
async fn test_list_events_windows() {
    let (_temp_dir, organizer) = create_test_organizer().await;
    let gateway = organizer.gateway();
    let today = date(2026, 10, 18);

    for (name, day, activity) in [
        ("Past ride", date(2026, 9, 1), ActivityCategory::Cycling),
        ("Today social", today, ActivityCategory::Social),
        ("Later hike", date(2026, 12, 24), ActivityCategory::Hiking),
    ] {
        let draft = crate::models::Draft {
            activity_category: Some(activity),
            scheduled_date: Some(day),
            scheduled_time: Some(TimeSlot::ToBeConfirmed),
            name: name.to_string(),
            ..Default::default()
        };
        let record = gateway.build_record(&draft, today).unwrap();
        organizer.create_event(record).await.unwrap();
    }

    let titles = |events: Vec<crate::models::Event>| -> Vec<String> {
        events.into_iter().map(|e| e.record.title).collect()
    };

    let upcoming = organizer
        .list_events_on(EventFilter::default(), today)
        .await
        .unwrap();
    assert_eq!(titles(upcoming), vec!["Today social", "Later hike"]);

    let past = organizer
        .list_events_on(
            EventFilter {
                window: EventWindow::Past,
                ..Default::default()
            },
            today,
        )
        .await
        .unwrap();
    assert_eq!(titles(past.clone()), vec!["Past ride"]);
    assert!(past[0].record.is_past);

    let hikes = organizer
        .list_events_on(
            EventFilter {
                activity: Some(ActivityCategory::Hiking),
                window: EventWindow::All,
            },
            today,
        )
        .await
        .unwrap();
    assert_eq!(titles(hikes), vec!["Later hike"]);
}

#[tokio::test]
async fn test_placeholders_persisted() {
    let (_temp_dir, organizer) = create_test_organizer().await;
    let draft = crate::models::Draft {
        activity_category: Some(ActivityCategory::Bouldering),
        scheduled_date: Some(date(2030, 3, 3)),
        scheduled_time: Some("18:00".parse().unwrap()),
        name: "Bouldering night".to_string(),
        ..Default::default()
    };

    let event = organizer.gateway().submit(&draft).await.unwrap();
    let stored = organizer.show_event(&Id { id: event.id }).await.unwrap();
    assert_eq!(stored.record.difficulty, Difficulty::Moderate);
    assert_eq!(stored.record.distance, PLACEHOLDER_TBD);
    assert_eq!(stored.record.elevation, "N/A");
    assert_eq!(stored.record.transport_method, PLACEHOLDER_TBD);
    assert_eq!(stored.record.attendees, 1);
    assert_eq!(stored.record.available_spots, None);
}

#[tokio::test]
async fn test_route_handlers() {
    let (_temp_dir, organizer) = create_test_organizer().await;

    let routes = organizer.list_routes(&ListRoutes {
        activity: Some(ActivityCategory::Cycling),
        ..Default::default()
    });
    let names: Vec<_> = routes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Grosse Scheidegg Pass", "Lake Thun Shoreline"]);

    assert_eq!(organizer.show_route(&Id { id: 6 }).unwrap().name, "Mürren Via Ferrata");
    assert!(matches!(
        organizer.show_route(&Id { id: 404 }),
        Err(TrailheadError::RouteNotFound { id: 404 })
    ));
    assert!(matches!(
        organizer.show_event(&Id { id: 404 }).await,
        Err(TrailheadError::EventNotFound { id: 404 })
    ));
}
