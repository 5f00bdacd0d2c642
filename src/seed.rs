//! Sample data for a fresh household
//!
//! Both entry points are idempotent: running them twice leaves the database
//! as after the first run.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveValue::Set, ConnectionTrait};
use uuid::Uuid;

use crate::choices::{Priority, Repeat};
use crate::entities::{account, event, event_category};
use crate::repositories::{AccountRepository, CategoryRepository, EventRepository, MemberRepository};

struct SampleCategory {
    name: &'static str,
    emoji: &'static str,
    color: &'static str,
    description: &'static str,
}

const SAMPLE_CATEGORIES: [SampleCategory; 8] = [
    SampleCategory { name: "Birthday", emoji: "🎂", color: "#e74c3c", description: "Celebrate family birthdays" },
    SampleCategory { name: "Anniversary", emoji: "❤️", color: "#e91e63", description: "Wedding and other special anniversaries" },
    SampleCategory { name: "Travel", emoji: "✈️", color: "#3498db", description: "Family trips and outings" },
    SampleCategory { name: "School", emoji: "🏫", color: "#f39c12", description: "School events and activities" },
    SampleCategory { name: "Medical", emoji: "🏥", color: "#2ecc71", description: "Doctor visits and checkups" },
    SampleCategory { name: "Lessons", emoji: "📚", color: "#9b59b6", description: "Lessons and classes" },
    SampleCategory { name: "Family Meeting", emoji: "👨‍👩‍👧‍👦", color: "#34495e", description: "Time to talk things over together" },
    SampleCategory { name: "Shopping", emoji: "🛒", color: "#16a085", description: "Family shopping trips" },
];

struct SampleEvent {
    title: &'static str,
    description: &'static str,
    days_ahead: i64,
    /// Length in days beyond the first, for multi-day events
    extra_days: Option<i64>,
    /// (start, end) as (hour, hour); `None` means all day
    hours: Option<(u32, u32)>,
    category: &'static str,
    priority: Priority,
    location: &'static str,
}

const SAMPLE_EVENTS: [SampleEvent; 7] = [
    SampleEvent {
        title: "Dad's birthday",
        description: "Let's celebrate Dad's birthday together! Don't forget the cake and presents.",
        days_ahead: 7,
        extra_days: None,
        hours: None,
        category: "Birthday",
        priority: Priority::High,
        location: "Home",
    },
    SampleEvent {
        title: "Family trip (hot springs)",
        description: "Our yearly family trip. Time to recharge together!",
        days_ahead: 30,
        extra_days: Some(2),
        hours: None,
        category: "Travel",
        priority: Priority::High,
        location: "Hakone",
    },
    SampleEvent {
        title: "Dental checkup",
        description: "Regular six-month checkup.",
        days_ahead: 14,
        extra_days: None,
        hours: Some((14, 15)),
        category: "Medical",
        priority: Priority::Normal,
        location: "Tanaka Dental Clinic",
    },
    SampleEvent {
        title: "Piano recital",
        description: "A year of practice on stage. Let's all go and cheer!",
        days_ahead: 21,
        extra_days: None,
        hours: Some((15, 17)),
        category: "Lessons",
        priority: Priority::High,
        location: "Concert hall",
    },
    SampleEvent {
        title: "Family meeting",
        description: "This month's budget and next month's plans.",
        days_ahead: 3,
        extra_days: None,
        hours: Some((20, 21)),
        category: "Family Meeting",
        priority: Priority::Normal,
        location: "Living room",
    },
    SampleEvent {
        title: "Sports day",
        description: "The kids' sports day. Bring lunch boxes and the camera!",
        days_ahead: 45,
        extra_days: None,
        hours: Some((9, 15)),
        category: "School",
        priority: Priority::High,
        location: "Elementary school grounds",
    },
    SampleEvent {
        title: "Wedding anniversary",
        description: "Our wedding anniversary. Dinner is booked.",
        days_ahead: 60,
        extra_days: None,
        hours: Some((18, 21)),
        category: "Anniversary",
        priority: Priority::High,
        location: "Restaurant Rose",
    },
];

/// What a sample data run did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub categories_created: usize,
    pub categories_existing: usize,
    pub events_created: usize,
    pub events_existing: usize,
}

/// Create the administrator account unless the username is taken
pub async fn ensure_admin<C>(conn: &C, username: &str, email: &str) -> Result<account::Model>
where
    C: ConnectionTrait,
{
    if let Some(existing) = AccountRepository::get_by_username(conn, username).await? {
        log::info!("Account '{}' already exists", username);
        return Ok(existing);
    }

    let admin = AccountRepository::create(
        conn,
        account::ActiveModel {
            uuid: Set(Uuid::new_v4()),
            username: Set(username.to_string()),
            email: Set(email.to_string()),
            is_admin: Set(true),
            created_at: Set(Utc::now()),
        },
    )
    .await?;
    log::info!("Created administrator '{}'", admin.username);
    Ok(admin)
}

/// Sample categories and events dated relative to `today`
///
/// Requires an administrator account, who becomes the creator of every event.
/// Events already present with the same title and start date are skipped.
pub async fn create_sample_events<C>(conn: &C, today: NaiveDate) -> Result<SeedReport>
where
    C: ConnectionTrait,
{
    let admin = AccountRepository::first_admin(conn)
        .await?
        .context("No administrator account found, create one first")?;
    let mut report = SeedReport::default();

    for sample in &SAMPLE_CATEGORIES {
        if CategoryRepository::get_by_name(conn, sample.name).await?.is_some() {
            report.categories_existing += 1;
            continue;
        }
        CategoryRepository::create(
            conn,
            event_category::ActiveModel {
                uuid: Set(Uuid::new_v4()),
                name: Set(sample.name.to_string()),
                emoji: Set(sample.emoji.to_string()),
                color: Set(sample.color.to_string()),
                description: Set(sample.description.to_string()),
                created_at: Set(Utc::now()),
            },
        )
        .await?;
        log::info!("Created category {} {}", sample.emoji, sample.name);
        report.categories_created += 1;
    }

    let members: Vec<Uuid> = MemberRepository::get_active(conn)
        .await?
        .into_iter()
        .map(|m| m.uuid)
        .collect();

    for (index, sample) in SAMPLE_EVENTS.iter().enumerate() {
        let start_date = today + Duration::days(sample.days_ahead);
        if EventRepository::get_by_title_and_date(conn, sample.title, start_date)
            .await?
            .is_some()
        {
            report.events_existing += 1;
            continue;
        }

        let category = CategoryRepository::get_by_name(conn, sample.category).await?;
        let (start_time, end_time) = match sample.hours {
            Some((start, end)) => (NaiveTime::from_hms_opt(start, 0, 0), NaiveTime::from_hms_opt(end, 0, 0)),
            None => (None, None),
        };
        let now = Utc::now();

        let saved = EventRepository::insert(
            conn,
            event::ActiveModel {
                uuid: Set(Uuid::new_v4()),
                title: Set(sample.title.to_string()),
                description: Set(sample.description.to_string()),
                start_date: Set(start_date),
                end_date: Set(sample.extra_days.map(|days| start_date + Duration::days(days))),
                start_time: Set(start_time),
                end_time: Set(end_time),
                is_all_day: Set(sample.hours.is_none()),
                repeat: Set(Repeat::None.as_str().to_string()),
                repeat_until: Set(None),
                category_uuid: Set(category.map(|c| c.uuid)),
                location: Set(sample.location.to_string()),
                priority: Set(sample.priority.as_str().to_string()),
                is_reminder_enabled: Set(true),
                reminder_minutes: Set(60),
                created_by: Set(Some(admin.uuid)),
                created_at: Set(now),
                updated_at: Set(now),
            },
        )
        .await?;
        EventRepository::set_participants(conn, saved.uuid, &sample_participants(&members, index)).await?;

        log::info!("Created sample event '{}' ({})", saved.title, saved.start_date);
        report.events_created += 1;
    }

    Ok(report)
}

/// Between one and three members, rotating through the household by event index
fn sample_participants(members: &[Uuid], index: usize) -> Vec<Uuid> {
    if members.is_empty() {
        return Vec::new();
    }
    let count = (index % 3 + 1).min(members.len());
    (0..count).map(|i| members[(index + i) % members.len()]).collect()
}
