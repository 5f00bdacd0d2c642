//! Event category repository for database operations.

use anyhow::Result;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entities::{event, event_category};

/// Repository for event category database operations.
pub struct CategoryRepository;

impl CategoryRepository {
    /// Insert a new category.
    pub async fn create<C>(conn: &C, category: event_category::ActiveModel) -> Result<event_category::Model>
    where
        C: ConnectionTrait,
    {
        Ok(category.insert(conn).await?)
    }

    /// Get all categories ordered by name.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<event_category::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(event_category::Entity::find()
            .order_by_asc(event_category::Column::Name)
            .all(conn)
            .await?)
    }

    /// Get a single category by UUID.
    pub async fn get_by_id<C>(conn: &C, uuid: &Uuid) -> Result<Option<event_category::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(event_category::Entity::find_by_id(*uuid).one(conn).await?)
    }

    /// Get a single category by name.
    pub async fn get_by_name<C>(conn: &C, name: &str) -> Result<Option<event_category::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(event_category::Entity::find()
            .filter(event_category::Column::Name.eq(name))
            .one(conn)
            .await?)
    }

    /// Categories with the number of events filed under each, busiest first.
    pub async fn with_event_counts<C>(conn: &C) -> Result<Vec<(event_category::Model, u64)>>
    where
        C: ConnectionTrait,
    {
        let mut counted = Vec::new();
        for category in Self::get_all(conn).await? {
            let count = event::Entity::find()
                .filter(event::Column::CategoryUuid.eq(category.uuid))
                .count(conn)
                .await?;
            counted.push((category, count));
        }
        counted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.name.cmp(&b.0.name)));
        Ok(counted)
    }

    /// Delete a category. Its events stay, uncategorized.
    pub async fn delete<C>(conn: &C, uuid: &Uuid) -> Result<bool>
    where
        C: ConnectionTrait,
    {
        let result = event_category::Entity::delete_by_id(*uuid).exec(conn).await?;
        Ok(result.rows_affected > 0)
    }
}
