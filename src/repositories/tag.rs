//! Photo tag repository for database operations.

use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait,
};
use uuid::Uuid;

use crate::entities::{photo, photo_tag, photo_tag_link};

/// Repository for tag-related database operations.
pub struct TagRepository;

impl TagRepository {
    /// Insert a new tag.
    pub async fn create<C>(conn: &C, tag: photo_tag::ActiveModel) -> Result<photo_tag::Model>
    where
        C: ConnectionTrait,
    {
        Ok(tag.insert(conn).await?)
    }

    /// Get all tags ordered by name.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<photo_tag::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(photo_tag::Entity::find()
            .order_by_asc(photo_tag::Column::Name)
            .all(conn)
            .await?)
    }

    /// Get a single tag by name.
    pub async fn get_by_name<C>(conn: &C, name: &str) -> Result<Option<photo_tag::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(photo_tag::Entity::find()
            .filter(photo_tag::Column::Name.eq(name))
            .one(conn)
            .await?)
    }

    /// Tags attached to a photo, ordered by name.
    pub async fn for_photo<C>(conn: &C, photo_uuid: &Uuid) -> Result<Vec<photo_tag::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(photo_tag::Entity::find()
            .filter(
                photo_tag::Column::Uuid.in_subquery(
                    photo_tag_link::Entity::find()
                        .filter(photo_tag_link::Column::PhotoUuid.eq(*photo_uuid))
                        .select_only()
                        .column(photo_tag_link::Column::TagUuid)
                        .into_query(),
                ),
            )
            .order_by_asc(photo_tag::Column::Name)
            .all(conn)
            .await?)
    }

    /// Number of public photos carrying a tag.
    pub async fn public_photo_count<C>(conn: &C, tag_uuid: &Uuid) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(photo::Entity::find()
            .filter(photo::Column::IsPublic.eq(true))
            .filter(
                photo::Column::Uuid.in_subquery(
                    photo_tag_link::Entity::find()
                        .filter(photo_tag_link::Column::TagUuid.eq(*tag_uuid))
                        .select_only()
                        .column(photo_tag_link::Column::PhotoUuid)
                        .into_query(),
                ),
            )
            .count(conn)
            .await?)
    }

    /// Most used tags on public photos, unused tags left out.
    pub async fn popular<C>(conn: &C, limit: usize) -> Result<Vec<(photo_tag::Model, u64)>>
    where
        C: ConnectionTrait,
    {
        let mut counted = Vec::new();
        for tag in Self::get_all(conn).await? {
            let count = Self::public_photo_count(conn, &tag.uuid).await?;
            if count > 0 {
                counted.push((tag, count));
            }
        }
        counted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.name.cmp(&b.0.name)));
        counted.truncate(limit);
        Ok(counted)
    }

    pub async fn count_all<C>(conn: &C) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(photo_tag::Entity::find().count(conn).await?)
    }

    /// Delete a tag; photos lose the tag but stay.
    pub async fn delete<C>(conn: &C, uuid: &Uuid) -> Result<bool>
    where
        C: ConnectionTrait,
    {
        let result = photo_tag::Entity::delete_by_id(*uuid).exec(conn).await?;
        Ok(result.rows_affected > 0)
    }
}
