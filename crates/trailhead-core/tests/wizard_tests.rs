mod common;

use std::fs;

use common::{complete_draft, create_test_organizer};
use jiff::civil::date;
use trailhead_core::{
    display::Notification,
    gateway::{DEMO_ORGANIZER, PLACEHOLDER_NOT_AVAILABLE, PLACEHOLDER_TBD},
    params::{ListEvents, SetDetails, SetSchedule},
    ActivityCategory, Difficulty, DraftStore, EventWindow, ScrollLock, ShellState, StepView,
    SubmissionError, WizardStep,
};

#[tokio::test]
async fn test_full_wizard_session_against_database() {
    let (_temp_dir, organizer) = create_test_organizer().await;
    let scroll = ScrollLock::new();
    let mut wizard = organizer.wizard(scroll.clone()).with_today(date(2030, 5, 1));

    wizard.open().expect("wizard opens");
    assert!(scroll.is_suppressed());

    wizard.select_category(ActivityCategory::ViaFerrata).unwrap();
    assert_eq!(wizard.next().unwrap(), WizardStep::Route);
    assert_eq!(wizard.toggle_route(7, organizer.catalog()).unwrap(), Some(7));
    assert_eq!(
        wizard.view(organizer.catalog()).primary_label(),
        "Continue"
    );
    wizard.next().unwrap();
    wizard
        .apply_schedule(&SetSchedule {
            date: Some("2030-05-10".to_string()),
            time: Some("08:00".to_string()),
        })
        .unwrap();
    wizard.next().unwrap();
    wizard
        .apply_details(&SetDetails {
            name: Some("Tälli classic".to_string()),
            capacity: Some("abc".to_string()),
        })
        .unwrap();
    assert_eq!(wizard.position(), 4);

    let event = wizard
        .submit(&organizer.gateway())
        .await
        .expect("submission succeeds");

    let route = organizer.catalog().get(7).unwrap();
    assert_eq!(event.record.route_id, Some(7));
    assert_eq!(event.record.difficulty, route.difficulty);
    assert_eq!(event.record.distance, route.distance_label());
    assert_eq!(event.record.image, route.thumbnail);
    assert_eq!(event.record.available_spots, None);
    assert_eq!(event.record.organizer, DEMO_ORGANIZER);

    assert_eq!(wizard.state(), ShellState::Closed);
    assert!(!scroll.is_suppressed());
    assert!(!organizer.draft_path().exists());

    let listed = organizer
        .list_events(&ListEvents {
            window: EventWindow::All,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, event.id);
}

#[tokio::test]
async fn test_event_without_route_gets_placeholders() {
    let (_temp_dir, organizer) = create_test_organizer().await;
    let draft = complete_draft(ActivityCategory::Skiing, "Powder day", date(2030, 1, 15));

    let event = organizer.gateway().submit(&draft).await.unwrap();
    let record = &event.record;
    assert_eq!(record.difficulty, Difficulty::Moderate);
    assert_eq!(record.distance, PLACEHOLDER_TBD);
    assert_eq!(record.duration, PLACEHOLDER_TBD);
    assert_eq!(record.elevation, PLACEHOLDER_NOT_AVAILABLE);
    assert_eq!(record.departure_location, PLACEHOLDER_TBD);
    assert_eq!(record.image, ActivityCategory::Skiing.default_image());
    assert_eq!(record.date_label, "Tue, Jan 15");
}

#[tokio::test]
async fn test_draft_survives_reopen_through_file() {
    let (_temp_dir, organizer) = create_test_organizer().await;
    let scroll = ScrollLock::new();

    {
        let mut wizard = organizer.wizard(scroll.clone());
        wizard.open().unwrap();
        wizard.select_category(ActivityCategory::Cycling).unwrap();
        wizard.set_capacity_input("15").unwrap();
        assert_eq!(wizard.request_close(), ShellState::ConfirmingDiscard);
        wizard.continue_editing();
    }
    assert!(!scroll.is_suppressed());

    let raw = fs::read_to_string(organizer.draft_path()).unwrap();
    assert!(raw.contains("\"activityCategory\":\"cycling\""));

    let mut wizard = organizer.wizard(scroll);
    wizard.resume().unwrap();
    assert_eq!(wizard.draft().capacity, Some(15));
    assert_eq!(wizard.step(), WizardStep::Route);
    let StepView::Route(view) = wizard.view(organizer.catalog()) else {
        panic!("expected route view");
    };
    assert_eq!(view.routes.len(), 2);
}

#[tokio::test]
async fn test_corrupted_draft_file_yields_empty_draft() {
    let (_temp_dir, organizer) = create_test_organizer().await;
    fs::write(organizer.draft_path(), "{\"scheduledDate\": 12, oops").unwrap();

    let draft = organizer.draft_store().load();
    assert!(!draft.is_touched());

    let mut wizard = organizer.wizard(ScrollLock::new());
    wizard.open().unwrap();
    assert_eq!(wizard.request_close(), ShellState::Closed);
}

#[tokio::test]
async fn test_failed_validation_notification() {
    let (_temp_dir, organizer) = create_test_organizer().await;
    organizer
        .edit_draft(|wizard, _| wizard.select_category(ActivityCategory::Bouldering))
        .unwrap();

    let err = organizer.submit_draft().await.unwrap_err();
    assert!(matches!(err, SubmissionError::Validation { field: "date" }));
    assert_eq!(
        Notification::from(&err).to_string(),
        "Missing: please provide the event date.\n"
    );
}

#[tokio::test]
async fn test_skiing_session_takes_three_steps() {
    let (_temp_dir, organizer) = create_test_organizer().await;
    let today = date(2030, 5, 1);
    let mut wizard = organizer.wizard(ScrollLock::new()).with_today(today);

    wizard.open().unwrap();
    wizard.select_category(ActivityCategory::Skiing).unwrap();
    assert_eq!(wizard.total_steps(), 3);
    assert_eq!(wizard.next().unwrap(), WizardStep::DateTime);
    assert_eq!(wizard.back().unwrap(), WizardStep::Category);
    wizard.next().unwrap();

    wizard.set_date(today.tomorrow().unwrap()).unwrap();
    wizard.set_time("09:00".parse().unwrap()).unwrap();
    assert_eq!(wizard.next().unwrap(), WizardStep::Details);
    assert_eq!(wizard.position(), 3);
    wizard.set_name("Morning ski").unwrap();

    let event = wizard.submit(&organizer.gateway()).await.unwrap();
    assert_eq!(event.record.difficulty, Difficulty::Moderate);
    assert_eq!(event.record.distance, PLACEHOLDER_TBD);
    assert_eq!(event.record.route_id, None);
    assert_eq!(event.record.available_spots, None);
}

#[tokio::test]
async fn test_hiking_session_with_skipped_route_uses_placeholders() {
    let (_temp_dir, organizer) = create_test_organizer().await;
    let mut wizard = organizer
        .wizard(ScrollLock::new())
        .with_today(date(2030, 5, 1));

    wizard.open().unwrap();
    wizard.select_category(ActivityCategory::Hiking).unwrap();
    assert_eq!(wizard.total_steps(), 4);
    assert_eq!(wizard.next().unwrap(), WizardStep::Route);
    assert_eq!(wizard.position(), 2);

    assert_eq!(wizard.toggle_route(1, organizer.catalog()).unwrap(), Some(1));
    assert_eq!(wizard.toggle_route(1, organizer.catalog()).unwrap(), None);
    match wizard.view(organizer.catalog()) {
        StepView::Route(view) => assert_eq!(view.continue_label(), "Skip for now"),
        _ => panic!("expected the route step"),
    }
    assert_eq!(wizard.next().unwrap(), WizardStep::DateTime);

    wizard.set_date(date(2030, 5, 20)).unwrap();
    wizard.set_time("tbc".parse().unwrap()).unwrap();
    wizard.next().unwrap();
    wizard.set_name("Open ridge walk").unwrap();

    let event = wizard.submit(&organizer.gateway()).await.unwrap();
    assert_eq!(event.record.route_id, None);
    assert_eq!(event.record.difficulty, Difficulty::Moderate);
    assert_eq!(event.record.elevation, PLACEHOLDER_NOT_AVAILABLE);
    assert_eq!(event.record.image, ActivityCategory::Hiking.default_image());
}
