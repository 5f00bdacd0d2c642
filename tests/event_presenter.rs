use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use family_hub::calendar::{EventPresenter, EventStatus};
use family_hub::choices::{Priority, Role};
use family_hub::config::DisplayConfig;
use family_hub::constants::{COLOR_PAST, COLOR_TODAY};
use family_hub::entities::{event, member};
use family_hub::icons::IconTheme;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn sample_event(start_date: NaiveDate, priority: Priority) -> event::Model {
    event::Model {
        uuid: Uuid::new_v4(),
        title: "Piano recital".to_string(),
        description: String::new(),
        start_date,
        end_date: None,
        start_time: None,
        end_time: None,
        is_all_day: false,
        repeat: "none".to_string(),
        repeat_until: None,
        category_uuid: None,
        location: String::new(),
        priority: priority.as_str().to_string(),
        is_reminder_enabled: true,
        reminder_minutes: 60,
        created_by: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn sample_member(name: &str) -> member::Model {
    member::Model {
        uuid: Uuid::new_v4(),
        name: name.to_string(),
        role: Role::Daughter.as_str().to_string(),
        birthday: None,
        photo_path: None,
        favorite_food: String::new(),
        hobby: String::new(),
        introduction: String::new(),
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn test_urgent_in_five_days_is_red_with_alert_glyph() {
    let today = date(2025, 3, 10);
    let presenter = EventPresenter::with_defaults(today);
    let event = sample_event(today + Duration::days(5), Priority::Urgent);

    assert_eq!(presenter.status_color(&event), "#e74c3c");
    assert_eq!(presenter.priority_glyph(&event), "🚨");
    assert_ne!(presenter.priority_glyph(&event), "⭐⭐⭐");
}

#[test]
fn test_past_and_today_ignore_priority() {
    let today = date(2025, 3, 10);
    let presenter = EventPresenter::with_defaults(today);

    for priority in Priority::ALL {
        let past = sample_event(today - Duration::days(1), priority);
        assert_eq!(presenter.status(&past), EventStatus::Past);
        assert_eq!(presenter.status_color(&past), COLOR_PAST);

        let current = sample_event(today, priority);
        assert_eq!(presenter.status(&current), EventStatus::Today);
        assert_eq!(presenter.status_color(&current), COLOR_TODAY);
    }
}

#[test]
fn test_future_follows_priority_table() {
    let today = date(2025, 3, 10);
    let presenter = EventPresenter::with_defaults(today);
    let expected = [
        (Priority::Low, "#3498db"),
        (Priority::Normal, "#2ecc71"),
        (Priority::High, "#f39c12"),
        (Priority::Urgent, "#e74c3c"),
    ];
    for (priority, color) in expected {
        let event = sample_event(today + Duration::days(1), priority);
        assert_eq!(presenter.status_color(&event), color, "{}", priority);
    }
}

#[test]
fn test_unknown_stored_priority_reads_as_normal() {
    let today = date(2025, 3, 10);
    let presenter = EventPresenter::with_defaults(today);
    let mut event = sample_event(today + Duration::days(3), Priority::Normal);
    event.priority = "critical".to_string();
    assert_eq!(presenter.status_color(&event), "#2ecc71");
    assert_eq!(presenter.priority_glyph(&event), "⭐⭐");
}

#[test]
fn test_today_counts_as_upcoming() {
    let today = date(2025, 3, 10);
    let presenter = EventPresenter::with_defaults(today);

    let current = sample_event(today, Priority::Normal);
    assert!(presenter.is_today(&current));
    assert!(presenter.is_upcoming(&current));

    let past = sample_event(today - Duration::days(1), Priority::Normal);
    assert!(!presenter.is_today(&past));
    assert!(!presenter.is_upcoming(&past));

    let later = sample_event(today + Duration::days(1), Priority::Normal);
    assert!(!presenter.is_today(&later));
    assert!(presenter.is_upcoming(&later));
}

#[test]
fn test_duration_display() {
    let presenter = EventPresenter::with_defaults(date(2025, 3, 1));

    let mut trip = sample_event(date(2025, 3, 10), Priority::High);
    trip.is_all_day = true;
    trip.end_date = Some(date(2025, 3, 12));
    assert_eq!(presenter.duration(&trip), "2025-03-10 – 2025-03-12 (all day)");

    trip.end_date = Some(date(2025, 3, 10));
    assert_eq!(presenter.duration(&trip), "2025-03-10 (all day)");

    let mut checkup = sample_event(date(2025, 3, 10), Priority::Normal);
    checkup.start_time = Some(time(14, 0));
    assert_eq!(presenter.duration(&checkup), "2025-03-10 14:00");

    checkup.end_time = Some(time(15, 30));
    assert_eq!(presenter.duration(&checkup), "2025-03-10 14:00 – 15:30");
}

#[test]
fn test_duration_uses_configured_formats() {
    let display = DisplayConfig {
        date_format: "%d/%m/%Y".to_string(),
        time_format: "%I:%M %p".to_string(),
        icon_theme: IconTheme::Ascii,
        use_colors: false,
    };
    let presenter = EventPresenter::new(date(2025, 3, 1), &display);

    let mut event = sample_event(date(2025, 3, 10), Priority::Urgent);
    event.start_time = Some(time(14, 0));
    assert_eq!(presenter.duration(&event), "10/03/2025 02:00 PM");
    assert_eq!(presenter.priority_glyph(&event), "!!");
}

#[test]
fn test_participants_default_to_everyone() {
    let presenter = EventPresenter::with_defaults(date(2025, 3, 1));
    assert_eq!(presenter.participants(&[]), "everyone");
    assert_eq!(
        presenter.participants(&[sample_member("Hana"), sample_member("Ken")]),
        "Hana, Ken"
    );
}

#[test]
fn test_present_serializes() {
    let today = date(2025, 3, 10);
    let presenter = EventPresenter::with_defaults(today);
    let mut event = sample_event(today, Priority::High);
    event.repeat = "weekly".to_string();

    let view = presenter.present(&event, &[]);
    assert!(view.is_today);
    assert!(view.is_recurring);
    assert_eq!(view.relative, "today");

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["priority"], "high");
    assert_eq!(json["participants"], "everyone");
    assert_eq!(json["color"], COLOR_TODAY);
}
