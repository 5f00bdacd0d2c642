//! Calendar operations on top of the repositories

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveValue::Set, TransactionTrait};
use serde::Serialize;
use uuid::Uuid;

use super::presenter::EventPresenter;
use super::validation::EventDraft;
use crate::choices::Priority;
use crate::config::Config;
use crate::constants::{DEFAULT_CATEGORY_COLOR, DEFAULT_CATEGORY_EMOJI, MAX_UPCOMING_DAYS, RELATED_EVENTS_LIMIT};
use crate::entities::{event, event_category, member};
use crate::forms;
use crate::repositories::{CategoryRepository, EventFilter, EventRepository, NotFoundError, Page};
use crate::storage::LocalStorage;
use crate::utils::date;

/// Everything the calendar screen shows for one day
#[derive(Debug, Clone)]
pub struct CalendarOverview {
    /// Filtered events starting today
    pub today: Vec<event::Model>,
    /// Filtered events in the current Monday–Sunday week, today excluded
    pub this_week: Vec<event::Model>,
    pub page: Page<event::Model>,
    pub categories: Vec<(event_category::Model, u64)>,
}

/// An event with its category, participants and a few related events
#[derive(Debug, Clone)]
pub struct EventDetail {
    pub event: event::Model,
    pub category: Option<event_category::Model>,
    pub participants: Vec<member::Model>,
    pub related: Vec<event::Model>,
}

/// One entry of the upcoming events feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingItem {
    pub id: Uuid,
    pub title: String,
    pub start_date: String,
    pub start_time: Option<String>,
    pub category: Option<String>,
    pub category_emoji: String,
    pub category_color: String,
    pub participants: Vec<String>,
    pub priority_glyph: String,
    pub is_today: bool,
}

/// Calendar use cases
pub struct CalendarService<'a> {
    storage: &'a LocalStorage,
    config: &'a Config,
}

impl<'a> CalendarService<'a> {
    pub fn new(storage: &'a LocalStorage, config: &'a Config) -> Self {
        Self { storage, config }
    }

    pub fn presenter(&self, today: NaiveDate) -> EventPresenter {
        EventPresenter::new(today, &self.config.display)
    }

    /// Validate and save a new event; `actor` becomes its creator
    pub async fn create(&self, actor: Option<Uuid>, draft: &EventDraft) -> Result<event::Model> {
        if let Err(e) = draft.validate() {
            log::warn!("Rejected new event '{}': {}", draft.title.trim(), e);
            return Err(e.into());
        }

        let now = Utc::now();
        let active = event::ActiveModel {
            uuid: Set(Uuid::new_v4()),
            created_by: Set(actor),
            created_at: Set(now),
            ..Self::fields_from(draft, now)
        };

        let txn = self.storage.conn.begin().await?;
        let saved = EventRepository::insert(&txn, active).await?;
        EventRepository::set_participants(&txn, saved.uuid, &draft.participants).await?;
        txn.commit().await?;

        log::info!("Created event '{}' on {}", saved.title, saved.start_date);
        Ok(saved)
    }

    /// Replace every editable field of an event; creator and creation time stay
    pub async fn update(&self, uuid: &Uuid, draft: &EventDraft) -> Result<event::Model> {
        if let Err(e) = draft.validate() {
            log::warn!("Rejected update of event {}: {}", uuid, e);
            return Err(e.into());
        }

        let txn = self.storage.conn.begin().await?;
        let existing = EventRepository::get_by_id(&txn, uuid)
            .await?
            .ok_or(NotFoundError::new("event", *uuid))?;

        let active = event::ActiveModel {
            uuid: sea_orm::ActiveValue::Unchanged(existing.uuid),
            created_by: sea_orm::ActiveValue::Unchanged(existing.created_by),
            created_at: sea_orm::ActiveValue::Unchanged(existing.created_at),
            ..Self::fields_from(draft, Utc::now())
        };
        let saved = EventRepository::update(&txn, active).await?;
        EventRepository::set_participants(&txn, saved.uuid, &draft.participants).await?;
        txn.commit().await?;

        log::info!("Updated event '{}'", saved.title);
        Ok(saved)
    }

    pub async fn delete(&self, uuid: &Uuid) -> Result<()> {
        if !EventRepository::delete(&self.storage.conn, uuid).await? {
            return Err(NotFoundError::new("event", *uuid).into());
        }
        log::info!("Deleted event {}", uuid);
        Ok(())
    }

    /// Turn reminders on or off for several events, returning how many changed
    pub async fn set_reminders(&self, uuids: &[Uuid], enabled: bool) -> Result<u64> {
        let changed = EventRepository::set_reminder(&self.storage.conn, uuids, enabled).await?;
        log::info!("Reminder = {} on {} event(s)", enabled, changed);
        Ok(changed)
    }

    pub async fn set_priority(&self, uuids: &[Uuid], priority: Priority) -> Result<u64> {
        let changed = EventRepository::set_priority(&self.storage.conn, uuids, priority).await?;
        log::info!("Priority = {} on {} event(s)", priority, changed);
        Ok(changed)
    }

    /// Add an event category; emoji and color fall back to the calendar defaults
    pub async fn create_category(
        &self,
        name: &str,
        emoji: Option<&str>,
        color: Option<&str>,
        description: &str,
    ) -> Result<event_category::Model> {
        let name = forms::required("name", name)?;
        let color = match color {
            Some(color) => forms::hex_color("color", color)?,
            None => DEFAULT_CATEGORY_COLOR.to_string(),
        };
        let emoji = emoji
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or(DEFAULT_CATEGORY_EMOJI)
            .to_string();

        let category = CategoryRepository::create(
            &self.storage.conn,
            event_category::ActiveModel {
                uuid: Set(Uuid::new_v4()),
                name: Set(name),
                emoji: Set(emoji),
                color: Set(color),
                description: Set(description.trim().to_string()),
                created_at: Set(Utc::now()),
            },
        )
        .await?;
        log::info!("Created category {}", category.label());
        Ok(category)
    }

    fn fields_from(draft: &EventDraft, updated_at: chrono::DateTime<Utc>) -> event::ActiveModel {
        let schedule = &draft.schedule;
        event::ActiveModel {
            title: Set(draft.title.trim().to_string()),
            description: Set(draft.description.trim().to_string()),
            start_date: Set(schedule.start_date),
            end_date: Set(schedule.end_date),
            start_time: Set(schedule.start_time),
            end_time: Set(schedule.end_time),
            is_all_day: Set(schedule.is_all_day),
            repeat: Set(schedule.repeat.as_str().to_string()),
            repeat_until: Set(schedule.repeat_until),
            category_uuid: Set(draft.category),
            location: Set(draft.location.trim().to_string()),
            priority: Set(draft.priority.as_str().to_string()),
            is_reminder_enabled: Set(draft.is_reminder_enabled),
            reminder_minutes: Set(draft.reminder_minutes),
            updated_at: Set(updated_at),
            ..Default::default()
        }
    }

    /// Today's events, the rest of this week and one page, all narrowed by `filter`, plus category stats
    pub async fn overview(&self, today: NaiveDate, filter: &EventFilter, page: u64) -> Result<CalendarOverview> {
        let conn = &self.storage.conn;
        let (monday, sunday) = date::week_bounds(today);

        let today_events = EventRepository::search_between(conn, filter, today, today, today).await?;
        let this_week = EventRepository::search_between(conn, filter, today, monday, sunday)
            .await?
            .into_iter()
            .filter(|e| e.start_date != today)
            .collect();
        let page = EventRepository::search_page(conn, filter, today, self.config.events.events_per_page, page).await?;
        let categories = CategoryRepository::with_event_counts(conn).await?;

        Ok(CalendarOverview {
            today: today_events,
            this_week,
            page,
            categories,
        })
    }

    /// Events starting within `days` days of `today`, today included
    pub async fn upcoming_feed(&self, today: NaiveDate, days: i64) -> Result<Vec<UpcomingItem>> {
        if !(0..=MAX_UPCOMING_DAYS).contains(&days) {
            anyhow::bail!("Upcoming window must be between 0 and {} days, got {}", MAX_UPCOMING_DAYS, days);
        }
        let until = Duration::try_days(days)
            .and_then(|span| today.checked_add_signed(span))
            .with_context(|| format!("{} days after {} is out of range", days, today))?;

        let conn = &self.storage.conn;
        let presenter = self.presenter(today);

        let mut items = Vec::new();
        for event in EventRepository::between(conn, today, until).await? {
            let category = match event.category_uuid {
                Some(uuid) => CategoryRepository::get_by_id(conn, &uuid).await?,
                None => None,
            };
            let participants = EventRepository::participants_of(conn, &event.uuid).await?;

            items.push(UpcomingItem {
                id: event.uuid,
                title: event.title.clone(),
                start_date: date::format_ymd(event.start_date),
                start_time: event.start_time.map(|t| t.format(date::TIME_FORMAT).to_string()),
                category: category.as_ref().map(|c| c.name.clone()),
                category_emoji: category
                    .as_ref()
                    .map_or_else(|| DEFAULT_CATEGORY_EMOJI.to_string(), |c| c.emoji.clone()),
                category_color: category
                    .as_ref()
                    .map_or_else(|| DEFAULT_CATEGORY_COLOR.to_string(), |c| c.color.clone()),
                participants: participants.into_iter().map(|m| m.name).collect(),
                priority_glyph: presenter.priority_glyph(&event).to_string(),
                is_today: presenter.is_today(&event),
            });
        }
        Ok(items)
    }

    pub async fn detail(&self, uuid: &Uuid) -> Result<EventDetail> {
        let conn = &self.storage.conn;
        let event = EventRepository::get_by_id(conn, uuid)
            .await?
            .ok_or(NotFoundError::new("event", *uuid))?;
        let category = match event.category_uuid {
            Some(category) => CategoryRepository::get_by_id(conn, &category).await?,
            None => None,
        };
        let participants = EventRepository::participants_of(conn, uuid).await?;
        let related = EventRepository::related(conn, &event, RELATED_EVENTS_LIMIT).await?;

        Ok(EventDetail {
            event,
            category,
            participants,
            related,
        })
    }
}
