//! Household-wide counts for the home screen

use anyhow::Result;
use chrono::NaiveDate;
use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::repositories::{AlbumRepository, EventRepository, MemberRepository, PhotoRepository, TagRepository};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DashboardStats {
    pub members: u64,
    pub photos: u64,
    pub albums: u64,
    pub tags: u64,
    pub events: u64,
    pub upcoming_events: u64,
}

/// Active members, public photos and albums, all tags and events
pub async fn stats<C>(conn: &C, today: NaiveDate) -> Result<DashboardStats>
where
    C: ConnectionTrait,
{
    Ok(DashboardStats {
        members: MemberRepository::count_active(conn).await?,
        photos: PhotoRepository::count_public(conn).await?,
        albums: AlbumRepository::count_public(conn).await?,
        tags: TagRepository::count_all(conn).await?,
        events: EventRepository::count_all(conn).await?,
        upcoming_events: EventRepository::count_upcoming(conn, today).await?,
    })
}
