#[cfg(test)]
mod model_tests {
    use jiff::civil::{date, time};

    use crate::models::{
        ActivityCategory, Difficulty, Draft, EventWindow, Route, RouteSort, Technicality,
        TimeSlot,
    };

    fn create_test_route() -> Route {
        Route {
            id: 42,
            name: "Test Ridge".to_string(),
            thumbnail: "https://example.com/ridge.jpg".to_string(),
            distance_km: 12.34,
            duration_minutes: 275,
            elevation_gain_m: 980,
            difficulty: Difficulty::Hard,
            technicality: Technicality::T3,
            location: "Grindelwald".to_string(),
            activities: vec![ActivityCategory::Hiking],
        }
    }

    #[test]
    fn test_activity_category_round_trip_and_routes() {
        for category in ActivityCategory::ALL {
            assert_eq!(category.as_str().parse::<ActivityCategory>(), Ok(category));
            assert!(category.default_image().ends_with(".jpg"));
        }
        let with_route: Vec<_> = ActivityCategory::ALL
            .into_iter()
            .filter(ActivityCategory::requires_route)
            .collect();
        assert_eq!(
            with_route,
            vec![
                ActivityCategory::Hiking,
                ActivityCategory::Cycling,
                ActivityCategory::ViaFerrata
            ]
        );
        assert!("knitting".parse::<ActivityCategory>().is_err());
    }

    #[test]
    fn test_activity_category_serde() {
        let json = serde_json::to_string(&ActivityCategory::ViaFerrata).unwrap();
        assert_eq!(json, "\"via-ferrata\"");
    }

    #[test]
    fn test_time_slots() {
        let slots = TimeSlot::all();
        assert_eq!(slots.first(), Some(&TimeSlot::At(time(6, 0, 0, 0))));
        assert_eq!(slots[slots.len() - 2], TimeSlot::At(time(20, 0, 0, 0)));
        assert_eq!(slots.last(), Some(&TimeSlot::ToBeConfirmed));
        // 06:00 through 20:00 in half hours, plus to-be-confirmed
        assert_eq!(slots.len(), 30);
    }

    #[test]
    fn test_time_slot_parsing() {
        assert_eq!("7:30".parse::<TimeSlot>(), Ok(TimeSlot::At(time(7, 30, 0, 0))));
        assert_eq!("TBC".parse::<TimeSlot>(), Ok(TimeSlot::ToBeConfirmed));
        for invalid in ["05:30", "20:30", "09:15", "noon", "25:00"] {
            assert!(invalid.parse::<TimeSlot>().is_err(), "{invalid}");
        }
        let json = serde_json::to_string(&TimeSlot::At(time(9, 0, 0, 0))).unwrap();
        assert_eq!(json, "\"09:00\"");
        assert!(serde_json::from_str::<TimeSlot>("\"09:10\"").is_err());
    }

    #[test]
    fn test_draft_touched() {
        let mut draft = Draft::default();
        assert!(!draft.is_touched());
        assert!(draft.requires_route());

        draft.capacity = Some(4);
        assert!(draft.is_touched());

        let draft = Draft {
            scheduled_date: Some(date(2030, 1, 1)),
            ..Default::default()
        };
        assert!(draft.is_touched());
    }

    #[test]
    fn test_first_missing_field_order() {
        let mut draft = Draft::default();
        assert_eq!(draft.first_missing_field(), Some("date"));
        draft.scheduled_date = Some(date(2030, 1, 1));
        assert_eq!(draft.first_missing_field(), Some("time"));
        draft.scheduled_time = Some(TimeSlot::ToBeConfirmed);
        assert_eq!(draft.first_missing_field(), Some("name"));
        draft.name = "   ".to_string();
        assert_eq!(draft.first_missing_field(), Some("name"));
        draft.name = "Name".to_string();
        assert_eq!(draft.first_missing_field(), Some("activity"));
        draft.activity_category = Some(ActivityCategory::Social);
        assert_eq!(draft.first_missing_field(), None);
    }

    #[test]
    fn test_route_labels() {
        let route = create_test_route();
        assert_eq!(route.distance_label(), "12.3 km");
        assert_eq!(route.duration_label(), "4h 35m");
        assert_eq!(route.elevation_label(), "980 m");
        assert!(route.serves(ActivityCategory::Hiking));
        assert!(!route.serves(ActivityCategory::Cycling));
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("t4".parse::<Technicality>(), Ok(Technicality::T4));
        assert_eq!("5".parse::<Technicality>(), Ok(Technicality::T5));
        assert_eq!("elevation".parse::<RouteSort>(), Ok(RouteSort::Elevation));
        assert_eq!("past".parse::<EventWindow>(), Ok(EventWindow::Past));
        assert!("t7".parse::<Technicality>().is_err());
        assert!(Technicality::T2 < Technicality::T5);
        assert_eq!(Difficulty::default(), Difficulty::Moderate);
    }
}
