mod common;

use chrono::Duration;
use common::{add_member, date, storage};
use family_hub::choices::{Priority, Role};
use family_hub::dashboard;
use family_hub::repositories::{CategoryRepository, EventFilter, EventRepository};
use family_hub::seed;

#[tokio::test]
async fn test_ensure_admin_is_idempotent() {
    let storage = storage().await;
    let first = seed::ensure_admin(&storage.conn, "admin", "admin@example.com").await.unwrap();
    let second = seed::ensure_admin(&storage.conn, "admin", "other@example.com").await.unwrap();
    assert!(first.is_admin);
    assert_eq!(first.uuid, second.uuid);
    assert_eq!(second.email, "admin@example.com");
}

#[tokio::test]
async fn test_sample_events_require_admin() {
    let storage = storage().await;
    assert!(seed::create_sample_events(&storage.conn, date(2025, 3, 10)).await.is_err());
    assert_eq!(EventRepository::count_all(&storage.conn).await.unwrap(), 0);
}

#[tokio::test]
async fn test_sample_events_are_created_once() {
    let storage = storage().await;
    let today = date(2025, 3, 10);
    let admin = seed::ensure_admin(&storage.conn, "admin", "admin@example.com").await.unwrap();
    for (name, role) in [("Taro", Role::Father), ("Yuki", Role::Mother), ("Hana", Role::Daughter), ("Ken", Role::Son)] {
        add_member(&storage, name, role).await;
    }

    let report = seed::create_sample_events(&storage.conn, today).await.unwrap();
    assert_eq!(report.categories_created, 8);
    assert_eq!(report.events_created, 7);

    let again = seed::create_sample_events(&storage.conn, today).await.unwrap();
    assert_eq!(again.categories_created, 0);
    assert_eq!(again.categories_existing, 8);
    assert_eq!(again.events_created, 0);
    assert_eq!(again.events_existing, 7);
    assert_eq!(EventRepository::count_all(&storage.conn).await.unwrap(), 7);

    let trip = EventRepository::get_by_title_and_date(&storage.conn, "Family trip (hot springs)", today + Duration::days(30))
        .await
        .unwrap()
        .unwrap();
    assert!(trip.is_all_day);
    assert_eq!(trip.end_date, Some(today + Duration::days(32)));
    assert_eq!(trip.priority(), Priority::High);
    assert_eq!(trip.created_by, Some(admin.uuid));

    let travel = CategoryRepository::get_by_name(&storage.conn, "Travel").await.unwrap().unwrap();
    assert_eq!(trip.category_uuid, Some(travel.uuid));

    for event in EventRepository::search(&storage.conn, &EventFilter::default(), today).await.unwrap() {
        let participants = EventRepository::participants_of(&storage.conn, &event.uuid).await.unwrap();
        assert!((1..=3).contains(&participants.len()), "{}", event.title);
    }
}

#[tokio::test]
async fn test_dashboard_counts() {
    let storage = storage().await;
    let today = date(2025, 3, 10);
    seed::ensure_admin(&storage.conn, "admin", "admin@example.com").await.unwrap();
    add_member(&storage, "Taro", Role::Father).await;
    seed::create_sample_events(&storage.conn, today).await.unwrap();

    let stats = dashboard::stats(&storage.conn, today).await.unwrap();
    assert_eq!(stats.members, 1);
    assert_eq!(stats.photos, 0);
    assert_eq!(stats.events, 7);
    assert_eq!(stats.upcoming_events, 7);

    // Two months later only the anniversary is still ahead
    let later = dashboard::stats(&storage.conn, today + Duration::days(60)).await.unwrap();
    assert_eq!(later.upcoming_events, 1);
}
