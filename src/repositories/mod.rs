//! Repository layer for database operations.
//!
//! This module provides repository structs that encapsulate database queries
//! and operations, following the Data Mapper pattern recommended by SeaORM.
//! Repositories keep entities as pure data models while providing reusable
//! database access methods. Every method is generic over `ConnectionTrait`
//! so it runs equally on a connection or inside a transaction.

pub mod account;
pub mod album;
pub mod category;
pub mod event;
pub mod member;
pub mod photo;
pub mod tag;

pub use account::AccountRepository;
pub use album::AlbumRepository;
pub use category::CategoryRepository;
pub use event::{EventFilter, EventRepository};
pub use member::{MemberFilter, MemberRepository};
pub use photo::{PhotoFilter, PhotoRepository};
pub use tag::TagRepository;

use anyhow::Result;
use sea_orm::{ConnectionTrait, Paginator, SelectorTrait};
use serde::Serialize;
use uuid::Uuid;

/// A record addressed by id does not exist
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} not found: {uuid}")]
pub struct NotFoundError {
    pub kind: &'static str,
    pub uuid: Uuid,
}

impl NotFoundError {
    pub fn new(kind: &'static str, uuid: Uuid) -> Self {
        Self { kind, uuid }
    }
}

/// One page of results, numbered from 1
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u64,
    pub num_pages: u64,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }
}

/// Fetch page `requested` (1-based); 0 reads as the first page and anything
/// past the end reads as the last page.
pub async fn fetch_page<'db, C, S>(paginator: Paginator<'db, C, S>, requested: u64) -> Result<Page<S::Item>>
where
    C: ConnectionTrait,
    S: SelectorTrait + 'db,
{
    let counts = paginator.num_items_and_pages().await?;
    let num_pages = counts.number_of_pages.max(1);
    let number = requested.clamp(1, num_pages);
    let items = paginator.fetch_page(number - 1).await?;

    Ok(Page {
        items,
        number,
        num_pages,
        total: counts.number_of_items,
    })
}
