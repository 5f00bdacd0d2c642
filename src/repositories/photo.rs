//! Photo repository for database operations.

use anyhow::Result;
use chrono::NaiveDate;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait, Select,
};
use uuid::Uuid;

use super::{fetch_page, Page};
use crate::entities::{member, photo, photo_member, photo_tag, photo_tag_link};

/// Search criteria for the gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoFilter {
    /// Matched against title, description and location
    pub search: Option<String>,
    pub tag: Option<Uuid>,
    pub member: Option<Uuid>,
    pub album: Option<Uuid>,
    /// Year the photo was taken
    pub year: Option<i32>,
    pub favorite_only: bool,
}

/// Repository for photo-related database operations.
pub struct PhotoRepository;

impl PhotoRepository {
    /// Insert a photo along with its tag and member links.
    pub async fn create<C>(conn: &C, photo: photo::ActiveModel, tags: &[Uuid], members: &[Uuid]) -> Result<photo::Model>
    where
        C: ConnectionTrait,
    {
        let photo = photo.insert(conn).await?;
        Self::set_tags(conn, photo.uuid, tags).await?;
        Self::set_members(conn, photo.uuid, members).await?;
        Ok(photo)
    }

    /// Replace the tags of a photo.
    pub async fn set_tags<C>(conn: &C, photo_uuid: Uuid, tags: &[Uuid]) -> Result<()>
    where
        C: ConnectionTrait,
    {
        photo_tag_link::Entity::delete_many()
            .filter(photo_tag_link::Column::PhotoUuid.eq(photo_uuid))
            .exec(conn)
            .await?;

        let mut unique = tags.to_vec();
        unique.sort_unstable();
        unique.dedup();
        if unique.is_empty() {
            return Ok(());
        }

        let rows = unique.into_iter().map(|tag_uuid| photo_tag_link::ActiveModel {
            photo_uuid: Set(photo_uuid),
            tag_uuid: Set(tag_uuid),
        });
        photo_tag_link::Entity::insert_many(rows)
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }

    /// Replace the members shown in a photo.
    pub async fn set_members<C>(conn: &C, photo_uuid: Uuid, members: &[Uuid]) -> Result<()>
    where
        C: ConnectionTrait,
    {
        photo_member::Entity::delete_many()
            .filter(photo_member::Column::PhotoUuid.eq(photo_uuid))
            .exec(conn)
            .await?;

        let mut unique = members.to_vec();
        unique.sort_unstable();
        unique.dedup();
        if unique.is_empty() {
            return Ok(());
        }

        let rows = unique.into_iter().map(|member_uuid| photo_member::ActiveModel {
            photo_uuid: Set(photo_uuid),
            member_uuid: Set(member_uuid),
        });
        photo_member::Entity::insert_many(rows)
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }

    /// Get a single photo by UUID.
    pub async fn get_by_id<C>(conn: &C, uuid: &Uuid) -> Result<Option<photo::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(photo::Entity::find_by_id(*uuid).one(conn).await?)
    }

    /// Build the gallery query: public photos only, newest first.
    pub fn search_query(filter: &PhotoFilter) -> Select<photo::Entity> {
        let mut query = photo::Entity::find().filter(photo::Column::IsPublic.eq(true));

        if let Some(text) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(photo::Column::Title.contains(text))
                    .add(photo::Column::Description.contains(text))
                    .add(photo::Column::Location.contains(text)),
            );
        }
        if let Some(tag) = filter.tag {
            query = query.filter(
                photo::Column::Uuid.in_subquery(
                    photo_tag_link::Entity::find()
                        .filter(photo_tag_link::Column::TagUuid.eq(tag))
                        .select_only()
                        .column(photo_tag_link::Column::PhotoUuid)
                        .into_query(),
                ),
            );
        }
        if let Some(member) = filter.member {
            query = query.filter(
                photo::Column::Uuid.in_subquery(
                    photo_member::Entity::find()
                        .filter(photo_member::Column::MemberUuid.eq(member))
                        .select_only()
                        .column(photo_member::Column::PhotoUuid)
                        .into_query(),
                ),
            );
        }
        if let Some(album) = filter.album {
            query = query.filter(photo::Column::AlbumUuid.eq(album));
        }
        if let Some(year) = filter.year {
            if let (Some(first), Some(last)) = (NaiveDate::from_ymd_opt(year, 1, 1), NaiveDate::from_ymd_opt(year, 12, 31)) {
                query = query.filter(photo::Column::TakenDate.between(first, last));
            }
        }
        if filter.favorite_only {
            query = query.filter(photo::Column::IsFavorite.eq(true));
        }

        query
            .order_by_desc(photo::Column::TakenDate)
            .order_by_desc(photo::Column::CreatedAt)
    }

    /// All public photos matching a filter.
    pub async fn search<C>(conn: &C, filter: &PhotoFilter) -> Result<Vec<photo::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(Self::search_query(filter).all(conn).await?)
    }

    /// One page of public photos matching a filter.
    pub async fn search_page<C>(conn: &C, filter: &PhotoFilter, per_page: u64, page: u64) -> Result<Page<photo::Model>>
    where
        C: ConnectionTrait,
    {
        fetch_page(Self::search_query(filter).paginate(conn, per_page), page).await
    }

    /// Public photos in the same album or sharing a tag with `anchor`.
    pub async fn related<C>(conn: &C, anchor: &photo::Model, limit: u64) -> Result<Vec<photo::Model>>
    where
        C: ConnectionTrait,
    {
        // Photos sharing any of the anchor's tags
        let anchor_tags = photo_tag_link::Entity::find()
            .filter(photo_tag_link::Column::PhotoUuid.eq(anchor.uuid))
            .select_only()
            .column(photo_tag_link::Column::TagUuid)
            .into_query();
        let sharing_tag = photo_tag_link::Entity::find()
            .filter(photo_tag_link::Column::TagUuid.in_subquery(anchor_tags))
            .select_only()
            .column(photo_tag_link::Column::PhotoUuid)
            .into_query();

        let mut same = Condition::any().add(photo::Column::Uuid.in_subquery(sharing_tag));
        if let Some(album) = anchor.album_uuid {
            same = same.add(photo::Column::AlbumUuid.eq(album));
        }

        Ok(photo::Entity::find()
            .filter(photo::Column::IsPublic.eq(true))
            .filter(photo::Column::Uuid.ne(anchor.uuid))
            .filter(same)
            .order_by_desc(photo::Column::TakenDate)
            .limit(limit)
            .all(conn)
            .await?)
    }

    /// Distinct years with public photos, most recent first.
    pub async fn years<C>(conn: &C) -> Result<Vec<i32>>
    where
        C: ConnectionTrait,
    {
        let dates: Vec<NaiveDate> = photo::Entity::find()
            .filter(photo::Column::IsPublic.eq(true))
            .select_only()
            .column(photo::Column::TakenDate)
            .into_tuple()
            .all(conn)
            .await?;

        let mut years: Vec<i32> = dates.iter().map(chrono::Datelike::year).collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        Ok(years)
    }

    /// Latest public photos a member appears in.
    pub async fn for_member<C>(conn: &C, member_uuid: &Uuid, limit: u64) -> Result<Vec<photo::Model>>
    where
        C: ConnectionTrait,
    {
        let filter = PhotoFilter {
            member: Some(*member_uuid),
            ..Default::default()
        };
        Ok(Self::search_query(&filter).limit(limit).all(conn).await?)
    }

    /// Tags on a photo, ordered by name.
    pub async fn tags_of<C>(conn: &C, photo_uuid: &Uuid) -> Result<Vec<photo_tag::Model>>
    where
        C: ConnectionTrait,
    {
        super::TagRepository::for_photo(conn, photo_uuid).await
    }

    /// Members shown in a photo, ordered by name.
    pub async fn members_of<C>(conn: &C, photo_uuid: &Uuid) -> Result<Vec<member::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(member::Entity::find()
            .filter(
                member::Column::Uuid.in_subquery(
                    photo_member::Entity::find()
                        .filter(photo_member::Column::PhotoUuid.eq(*photo_uuid))
                        .select_only()
                        .column(photo_member::Column::MemberUuid)
                        .into_query(),
                ),
            )
            .order_by_asc(member::Column::Name)
            .all(conn)
            .await?)
    }

    /// Mark several photos as favorites, or unmark them.
    pub async fn set_favorite<C>(conn: &C, uuids: &[Uuid], favorite: bool) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = photo::Entity::update_many()
            .col_expr(photo::Column::IsFavorite, Expr::value(favorite))
            .col_expr(photo::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(photo::Column::Uuid.is_in(uuids.iter().copied()))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }

    /// Publish or hide several photos.
    pub async fn set_public<C>(conn: &C, uuids: &[Uuid], public: bool) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = photo::Entity::update_many()
            .col_expr(photo::Column::IsPublic, Expr::value(public))
            .col_expr(photo::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(photo::Column::Uuid.is_in(uuids.iter().copied()))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }

    /// Flip the favorite flag of one photo, returning the updated row.
    pub async fn toggle_favorite<C>(conn: &C, uuid: &Uuid) -> Result<Option<photo::Model>>
    where
        C: ConnectionTrait,
    {
        let Some(existing) = Self::get_by_id(conn, uuid).await? else {
            return Ok(None);
        };
        let favorite = !existing.is_favorite;
        let mut active: photo::ActiveModel = existing.into();
        active.is_favorite = Set(favorite);
        active.updated_at = Set(chrono::Utc::now());
        Ok(Some(active.update(conn).await?))
    }

    pub async fn count_public<C>(conn: &C) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(photo::Entity::find()
            .filter(photo::Column::IsPublic.eq(true))
            .count(conn)
            .await?)
    }

    /// Public photos marked as favorite.
    pub async fn count_favorites<C>(conn: &C) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(photo::Entity::find()
            .filter(photo::Column::IsPublic.eq(true))
            .filter(photo::Column::IsFavorite.eq(true))
            .count(conn)
            .await?)
    }

    /// Delete a photo; its tag and member links go with it.
    pub async fn delete<C>(conn: &C, uuid: &Uuid) -> Result<bool>
    where
        C: ConnectionTrait,
    {
        let result = photo::Entity::delete_by_id(*uuid).exec(conn).await?;
        Ok(result.rows_affected > 0)
    }
}
