//! Account repository for database operations.

use anyhow::Result;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entities::account;

/// Repository for account-related database operations.
pub struct AccountRepository;

impl AccountRepository {
    /// Insert a new account.
    pub async fn create<C>(conn: &C, account: account::ActiveModel) -> Result<account::Model>
    where
        C: ConnectionTrait,
    {
        Ok(account.insert(conn).await?)
    }

    /// Get a single account by UUID.
    pub async fn get_by_id<C>(conn: &C, uuid: &Uuid) -> Result<Option<account::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(account::Entity::find_by_id(*uuid).one(conn).await?)
    }

    /// Get a single account by username.
    pub async fn get_by_username<C>(conn: &C, username: &str) -> Result<Option<account::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(account::Entity::find()
            .filter(account::Column::Username.eq(username))
            .one(conn)
            .await?)
    }

    /// The earliest administrator account, if any.
    pub async fn first_admin<C>(conn: &C) -> Result<Option<account::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(account::Entity::find()
            .filter(account::Column::IsAdmin.eq(true))
            .order_by_asc(account::Column::CreatedAt)
            .one(conn)
            .await?)
    }

    /// Delete an account. Records it created keep existing with no creator.
    pub async fn delete<C>(conn: &C, uuid: &Uuid) -> Result<bool>
    where
        C: ConnectionTrait,
    {
        let result = account::Entity::delete_by_id(*uuid).exec(conn).await?;
        Ok(result.rows_affected > 0)
    }
}
