//! Photo album repository for database operations.

use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::entities::{photo, photo_album};

/// Repository for album-related database operations.
pub struct AlbumRepository;

impl AlbumRepository {
    /// Insert a new album.
    pub async fn create<C>(conn: &C, album: photo_album::ActiveModel) -> Result<photo_album::Model>
    where
        C: ConnectionTrait,
    {
        Ok(album.insert(conn).await?)
    }

    /// Get a single album by UUID.
    pub async fn get_by_id<C>(conn: &C, uuid: &Uuid) -> Result<Option<photo_album::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(photo_album::Entity::find_by_id(*uuid).one(conn).await?)
    }

    /// Public albums, newest first, optionally matching title or description.
    pub async fn get_public<C>(conn: &C, search: Option<&str>) -> Result<Vec<photo_album::Model>>
    where
        C: ConnectionTrait,
    {
        let mut query = photo_album::Entity::find().filter(photo_album::Column::IsPublic.eq(true));
        if let Some(text) = search.map(str::trim).filter(|s| !s.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(photo_album::Column::Title.contains(text))
                    .add(photo_album::Column::Description.contains(text)),
            );
        }
        Ok(query
            .order_by_desc(photo_album::Column::CreatedAt)
            .all(conn)
            .await?)
    }

    /// Number of photos filed in an album, public or not.
    pub async fn photo_count<C>(conn: &C, album_uuid: &Uuid) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(photo::Entity::find()
            .filter(photo::Column::AlbumUuid.eq(*album_uuid))
            .count(conn)
            .await?)
    }

    pub async fn count_public<C>(conn: &C) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(photo_album::Entity::find()
            .filter(photo_album::Column::IsPublic.eq(true))
            .count(conn)
            .await?)
    }

    /// Delete an album; its photos stay, without an album.
    pub async fn delete<C>(conn: &C, uuid: &Uuid) -> Result<bool>
    where
        C: ConnectionTrait,
    {
        let result = photo_album::Entity::delete_by_id(*uuid).exec(conn).await?;
        Ok(result.rows_affected > 0)
    }
}
