//! Photo gallery: uploads, browsing, favorites and tags

use anyhow::Result;
use chrono::{Datelike, NaiveDate, Utc};
use sea_orm::{ActiveValue::Set, TransactionTrait};
use serde::Serialize;
use uuid::Uuid;

use crate::config::Config;
use crate::constants::{DEFAULT_TAG_COLOR, RELATED_ITEMS_LIMIT};
use crate::entities::{member, photo, photo_album, photo_tag};
use crate::forms::{self, Upload};
use crate::repositories::{
    AlbumRepository, NotFoundError, Page, PhotoFilter, PhotoRepository, TagRepository,
};
use crate::storage::LocalStorage;

/// A photo as submitted by a user
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub title: String,
    pub file: Upload,
    pub description: String,
    pub taken_date: NaiveDate,
    pub location: String,
    pub album: Option<Uuid>,
    pub tags: Vec<Uuid>,
    pub members: Vec<Uuid>,
    pub is_public: bool,
}

impl PhotoUpload {
    pub fn new(title: impl Into<String>, file: Upload, taken_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            file,
            description: String::new(),
            taken_date,
            location: String::new(),
            album: None,
            tags: Vec::new(),
            members: Vec::new(),
            is_public: true,
        }
    }
}

/// A photo with everything its detail view shows
#[derive(Debug, Clone)]
pub struct PhotoDetail {
    pub photo: photo::Model,
    pub album: Option<photo_album::Model>,
    pub tags: Vec<photo_tag::Model>,
    pub members: Vec<member::Model>,
    pub related: Vec<photo::Model>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GalleryStats {
    pub public_photos: u64,
    pub favorites: u64,
    pub tags: u64,
    pub public_albums: u64,
}

/// Gallery use cases
pub struct GalleryService<'a> {
    storage: &'a LocalStorage,
    config: &'a Config,
}

impl<'a> GalleryService<'a> {
    pub fn new(storage: &'a LocalStorage, config: &'a Config) -> Self {
        Self { storage, config }
    }

    /// Validate and record an uploaded photo with its tags and members
    pub async fn upload(&self, actor: Option<Uuid>, upload: &PhotoUpload) -> Result<photo::Model> {
        let title = forms::title(&upload.title)?;
        forms::image("image", &upload.file, self.config.gallery.max_photo_size_bytes())?;

        let now = Utc::now();
        let active = photo::ActiveModel {
            uuid: Set(Uuid::new_v4()),
            title: Set(title),
            image_path: Set(storage_path(upload.taken_date, &upload.file.file_name)),
            image_size_bytes: Set(i64::try_from(upload.file.size_bytes)?),
            description: Set(upload.description.trim().to_string()),
            taken_date: Set(upload.taken_date),
            location: Set(upload.location.trim().to_string()),
            album_uuid: Set(upload.album),
            is_favorite: Set(false),
            is_public: Set(upload.is_public),
            uploaded_by: Set(actor),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let txn = self.storage.conn.begin().await?;
        let saved = PhotoRepository::create(&txn, active, &upload.tags, &upload.members).await?;
        txn.commit().await?;

        log::info!("Added photo '{}' ({})", saved.title, saved.image_path);
        Ok(saved)
    }

    /// Flip the favorite flag, returning the new state
    pub async fn toggle_favorite(&self, uuid: &Uuid) -> Result<bool> {
        let photo = PhotoRepository::toggle_favorite(&self.storage.conn, uuid)
            .await?
            .ok_or(NotFoundError::new("photo", *uuid))?;
        log::info!("Photo '{}' favorite = {}", photo.title, photo.is_favorite);
        Ok(photo.is_favorite)
    }

    /// Mark or unmark several photos as favorites
    pub async fn set_favorites(&self, uuids: &[Uuid], favorite: bool) -> Result<u64> {
        let changed = PhotoRepository::set_favorite(&self.storage.conn, uuids, favorite).await?;
        log::info!("Favorite = {} on {} photo(s)", favorite, changed);
        Ok(changed)
    }

    /// Publish or hide several photos
    pub async fn set_public(&self, uuids: &[Uuid], public: bool) -> Result<u64> {
        let changed = PhotoRepository::set_public(&self.storage.conn, uuids, public).await?;
        log::info!("Public = {} on {} photo(s)", public, changed);
        Ok(changed)
    }

    pub async fn browse(&self, filter: &PhotoFilter, page: u64) -> Result<Page<photo::Model>> {
        PhotoRepository::search_page(&self.storage.conn, filter, self.config.gallery.photos_per_page, page).await
    }

    /// Public photo with album, tags, members and related photos
    pub async fn detail(&self, uuid: &Uuid) -> Result<PhotoDetail> {
        let conn = &self.storage.conn;
        let photo = PhotoRepository::get_by_id(conn, uuid)
            .await?
            .filter(|p| p.is_public)
            .ok_or(NotFoundError::new("photo", *uuid))?;

        let album = match photo.album_uuid {
            Some(album) => AlbumRepository::get_by_id(conn, &album).await?,
            None => None,
        };
        let tags = PhotoRepository::tags_of(conn, uuid).await?;
        let members = PhotoRepository::members_of(conn, uuid).await?;
        let related = PhotoRepository::related(conn, &photo, RELATED_ITEMS_LIMIT).await?;

        Ok(PhotoDetail {
            photo,
            album,
            tags,
            members,
            related,
        })
    }

    /// Create a tag; the name is trimmed and must be unused
    pub async fn create_tag(&self, name: &str, color: Option<&str>) -> Result<photo_tag::Model> {
        let name = forms::tag_name(name)?;
        let color = match color {
            Some(color) => forms::hex_color("color", color)?,
            None => DEFAULT_TAG_COLOR.to_string(),
        };
        if TagRepository::get_by_name(&self.storage.conn, &name).await?.is_some() {
            anyhow::bail!("Tag '{}' already exists", name);
        }

        let tag = TagRepository::create(
            &self.storage.conn,
            photo_tag::ActiveModel {
                uuid: Set(Uuid::new_v4()),
                name: Set(name),
                color: Set(color),
                created_at: Set(Utc::now()),
            },
        )
        .await?;
        log::info!("Created tag '{}'", tag.name);
        Ok(tag)
    }

    pub async fn create_album(
        &self,
        actor: Option<Uuid>,
        title: &str,
        description: &str,
        is_public: bool,
    ) -> Result<photo_album::Model> {
        let title = forms::title(title)?;
        let now = Utc::now();
        let album = AlbumRepository::create(
            &self.storage.conn,
            photo_album::ActiveModel {
                uuid: Set(Uuid::new_v4()),
                title: Set(title),
                description: Set(description.trim().to_string()),
                cover_photo_path: Set(None),
                is_public: Set(is_public),
                created_by: Set(actor),
                created_at: Set(now),
                updated_at: Set(now),
            },
        )
        .await?;
        log::info!("Created album '{}'", album.title);
        Ok(album)
    }

    pub async fn stats(&self) -> Result<GalleryStats> {
        let conn = &self.storage.conn;
        Ok(GalleryStats {
            public_photos: PhotoRepository::count_public(conn).await?,
            favorites: PhotoRepository::count_favorites(conn).await?,
            tags: TagRepository::count_all(conn).await?,
            public_albums: AlbumRepository::count_public(conn).await?,
        })
    }
}

/// Relative path an uploaded photo is filed under, by year and month taken
pub fn storage_path(taken_date: NaiveDate, file_name: &str) -> String {
    format!(
        "family_photos/{}/{:02}/{}",
        taken_date.year(),
        taken_date.month(),
        file_name
    )
}
