//! Family member repository for database operations.

use anyhow::Result;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Select,
};
use uuid::Uuid;

use super::{fetch_page, Page};
use crate::choices::Role;
use crate::entities::member;

/// Search criteria for the family directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberFilter {
    /// Matched against name, favorite food, hobby and introduction
    pub search: Option<String>,
    pub role: Option<Role>,
}

/// Repository for member-related database operations.
pub struct MemberRepository;

impl MemberRepository {
    /// Insert a new member.
    pub async fn create<C>(conn: &C, member: member::ActiveModel) -> Result<member::Model>
    where
        C: ConnectionTrait,
    {
        Ok(member.insert(conn).await?)
    }

    /// Update a member.
    pub async fn update<C>(conn: &C, member: member::ActiveModel) -> Result<member::Model>
    where
        C: ConnectionTrait,
    {
        Ok(member.update(conn).await?)
    }

    /// Get a single member by UUID.
    pub async fn get_by_id<C>(conn: &C, uuid: &Uuid) -> Result<Option<member::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(member::Entity::find_by_id(*uuid).one(conn).await?)
    }

    /// Get a single member by exact name.
    pub async fn get_by_name<C>(conn: &C, name: &str) -> Result<Option<member::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(member::Entity::find()
            .filter(member::Column::Name.eq(name))
            .one(conn)
            .await?)
    }

    /// Active members ordered by role and name.
    pub async fn get_active<C>(conn: &C) -> Result<Vec<member::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(Self::search_query(&MemberFilter::default()).all(conn).await?)
    }

    /// Build the directory query: active members only.
    pub fn search_query(filter: &MemberFilter) -> Select<member::Entity> {
        let mut query = member::Entity::find().filter(member::Column::IsActive.eq(true));

        if let Some(text) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(member::Column::Name.contains(text))
                    .add(member::Column::FavoriteFood.contains(text))
                    .add(member::Column::Hobby.contains(text))
                    .add(member::Column::Introduction.contains(text)),
            );
        }
        if let Some(role) = filter.role {
            query = query.filter(member::Column::Role.eq(role.as_str()));
        }

        query
            .order_by_asc(member::Column::Role)
            .order_by_asc(member::Column::Name)
    }

    /// One page of the directory.
    pub async fn search_page<C>(conn: &C, filter: &MemberFilter, per_page: u64, page: u64) -> Result<Page<member::Model>>
    where
        C: ConnectionTrait,
    {
        fetch_page(Self::search_query(filter).paginate(conn, per_page), page).await
    }

    /// Number of active members.
    pub async fn count_active<C>(conn: &C) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(member::Entity::find()
            .filter(member::Column::IsActive.eq(true))
            .count(conn)
            .await?)
    }

    /// Show or hide several members at once.
    pub async fn set_active<C>(conn: &C, uuids: &[Uuid], active: bool) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = member::Entity::update_many()
            .col_expr(member::Column::IsActive, Expr::value(active))
            .col_expr(member::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(member::Column::Uuid.is_in(uuids.iter().copied()))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }

    /// Delete a member; photo and event links to them are removed.
    pub async fn delete<C>(conn: &C, uuid: &Uuid) -> Result<bool>
    where
        C: ConnectionTrait,
    {
        let result = member::Entity::delete_by_id(*uuid).exec(conn).await?;
        Ok(result.rows_affected > 0)
    }
}
