//! Event repository for database operations.

use anyhow::Result;
use chrono::NaiveDate;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, QueryTrait, Select,
};
use uuid::Uuid;

use super::{fetch_page, Page};
use crate::choices::Priority;
use crate::entities::{event, event_participant, member};

/// Search criteria for the event calendar.
///
/// An empty filter lists upcoming events only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Matched against title, description and location
    pub search: Option<String>,
    pub category: Option<Uuid>,
    pub participant: Option<Uuid>,
    pub priority: Option<Priority>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub upcoming_only: bool,
}

impl EventFilter {
    /// No criterion set (blank search text counts as unset)
    pub fn is_empty(&self) -> bool {
        self.search_text().is_none()
            && self.category.is_none()
            && self.participant.is_none()
            && self.priority.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && !self.upcoming_only
    }

    fn search_text(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Repository for event-related database operations.
pub struct EventRepository;

impl EventRepository {
    /// Insert a new event row.
    pub async fn insert<C>(conn: &C, event: event::ActiveModel) -> Result<event::Model>
    where
        C: ConnectionTrait,
    {
        Ok(event.insert(conn).await?)
    }

    /// Update an event row.
    pub async fn update<C>(conn: &C, event: event::ActiveModel) -> Result<event::Model>
    where
        C: ConnectionTrait,
    {
        Ok(event.update(conn).await?)
    }

    /// Replace the participant set of an event.
    pub async fn set_participants<C>(conn: &C, event_uuid: Uuid, members: &[Uuid]) -> Result<()>
    where
        C: ConnectionTrait,
    {
        event_participant::Entity::delete_many()
            .filter(event_participant::Column::EventUuid.eq(event_uuid))
            .exec(conn)
            .await?;

        let mut unique = members.to_vec();
        unique.sort_unstable();
        unique.dedup();
        if unique.is_empty() {
            return Ok(());
        }

        let rows = unique.into_iter().map(|member_uuid| event_participant::ActiveModel {
            event_uuid: sea_orm::ActiveValue::Set(event_uuid),
            member_uuid: sea_orm::ActiveValue::Set(member_uuid),
        });
        event_participant::Entity::insert_many(rows)
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }

    /// Get a single event by UUID.
    pub async fn get_by_id<C>(conn: &C, uuid: &Uuid) -> Result<Option<event::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(event::Entity::find_by_id(*uuid).one(conn).await?)
    }

    /// Find an event by exact title on a given start date.
    pub async fn get_by_title_and_date<C>(conn: &C, title: &str, start_date: NaiveDate) -> Result<Option<event::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(event::Entity::find()
            .filter(event::Column::Title.eq(title))
            .filter(event::Column::StartDate.eq(start_date))
            .one(conn)
            .await?)
    }

    /// Members taking part in an event, ordered by name.
    pub async fn participants_of<C>(conn: &C, event_uuid: &Uuid) -> Result<Vec<member::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(member::Entity::find()
            .filter(
                member::Column::Uuid.in_subquery(
                    event_participant::Entity::find()
                        .filter(event_participant::Column::EventUuid.eq(*event_uuid))
                        .select_only()
                        .column(event_participant::Column::MemberUuid)
                        .into_query(),
                ),
            )
            .order_by_asc(member::Column::Name)
            .all(conn)
            .await?)
    }

    /// Build the calendar query for a filter, ordered by date, time and title.
    pub fn search_query(filter: &EventFilter, today: NaiveDate) -> Select<event::Entity> {
        let mut query = event::Entity::find();

        if let Some(text) = filter.search_text() {
            query = query.filter(
                Condition::any()
                    .add(event::Column::Title.contains(text))
                    .add(event::Column::Description.contains(text))
                    .add(event::Column::Location.contains(text)),
            );
        }
        if let Some(category) = filter.category {
            query = query.filter(event::Column::CategoryUuid.eq(category));
        }
        if let Some(participant) = filter.participant {
            query = query.filter(
                event::Column::Uuid.in_subquery(
                    event_participant::Entity::find()
                        .filter(event_participant::Column::MemberUuid.eq(participant))
                        .select_only()
                        .column(event_participant::Column::EventUuid)
                        .into_query(),
                ),
            );
        }
        if let Some(priority) = filter.priority {
            query = query.filter(event::Column::Priority.eq(priority.as_str()));
        }
        if let Some(from) = filter.date_from {
            query = query.filter(event::Column::StartDate.gte(from));
        }
        if let Some(to) = filter.date_to {
            query = query.filter(event::Column::StartDate.lte(to));
        }
        if filter.upcoming_only || filter.is_empty() {
            query = query.filter(event::Column::StartDate.gte(today));
        }

        query
            .order_by_asc(event::Column::StartDate)
            .order_by_asc(event::Column::StartTime)
            .order_by_asc(event::Column::Title)
    }

    /// All events matching a filter.
    pub async fn search<C>(conn: &C, filter: &EventFilter, today: NaiveDate) -> Result<Vec<event::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(Self::search_query(filter, today).all(conn).await?)
    }

    /// One page of events matching a filter.
    pub async fn search_page<C>(
        conn: &C,
        filter: &EventFilter,
        today: NaiveDate,
        per_page: u64,
        page: u64,
    ) -> Result<Page<event::Model>>
    where
        C: ConnectionTrait,
    {
        fetch_page(Self::search_query(filter, today).paginate(conn, per_page), page).await
    }

    /// Events matching a filter that start between two dates, both inclusive.
    pub async fn search_between<C>(
        conn: &C,
        filter: &EventFilter,
        today: NaiveDate,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<event::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(Self::search_query(filter, today)
            .filter(event::Column::StartDate.between(from, to))
            .all(conn)
            .await?)
    }

    /// Events starting between two dates, both inclusive.
    pub async fn between<C>(conn: &C, from: NaiveDate, to: NaiveDate) -> Result<Vec<event::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(event::Entity::find()
            .filter(event::Column::StartDate.between(from, to))
            .order_by_asc(event::Column::StartDate)
            .order_by_asc(event::Column::StartTime)
            .order_by_asc(event::Column::Title)
            .all(conn)
            .await?)
    }

    /// Events sharing the category or the start date of `anchor`.
    pub async fn related<C>(conn: &C, anchor: &event::Model, limit: u64) -> Result<Vec<event::Model>>
    where
        C: ConnectionTrait,
    {
        let mut same = Condition::any().add(event::Column::StartDate.eq(anchor.start_date));
        if let Some(category) = anchor.category_uuid {
            same = same.add(event::Column::CategoryUuid.eq(category));
        }

        Ok(event::Entity::find()
            .filter(same)
            .filter(event::Column::Uuid.ne(anchor.uuid))
            .order_by_asc(event::Column::StartDate)
            .limit(limit)
            .all(conn)
            .await?)
    }

    /// Total number of events.
    pub async fn count_all<C>(conn: &C) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(event::Entity::find().count(conn).await?)
    }

    /// Number of events starting today or later.
    pub async fn count_upcoming<C>(conn: &C, today: NaiveDate) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(event::Entity::find()
            .filter(event::Column::StartDate.gte(today))
            .count(conn)
            .await?)
    }

    /// Turn reminders on or off for several events at once.
    pub async fn set_reminder<C>(conn: &C, uuids: &[Uuid], enabled: bool) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = event::Entity::update_many()
            .col_expr(event::Column::IsReminderEnabled, Expr::value(enabled))
            .filter(event::Column::Uuid.is_in(uuids.iter().copied()))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }

    /// Set the priority of several events at once.
    pub async fn set_priority<C>(conn: &C, uuids: &[Uuid], priority: Priority) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = event::Entity::update_many()
            .col_expr(event::Column::Priority, Expr::value(priority.as_str()))
            .filter(event::Column::Uuid.is_in(uuids.iter().copied()))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }

    /// Delete an event; its participant rows go with it.
    pub async fn delete<C>(conn: &C, uuid: &Uuid) -> Result<bool>
    where
        C: ConnectionTrait,
    {
        let result = event::Entity::delete_by_id(*uuid).exec(conn).await?;
        Ok(result.rows_affected > 0)
    }
}
