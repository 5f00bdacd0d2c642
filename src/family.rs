//! Family directory: registering members and looking them up

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use sea_orm::ActiveValue::Set;
use uuid::Uuid;

use crate::choices::Role;
use crate::config::Config;
use crate::constants::MEMBER_RECENT_PHOTOS;
use crate::entities::{member, photo};
use crate::forms::{self, Upload};
use crate::icons::IconService;
use crate::repositories::{MemberFilter, MemberRepository, NotFoundError, Page, PhotoRepository};
use crate::storage::LocalStorage;
use crate::utils::date;

/// A member as submitted by a user
#[derive(Debug, Clone)]
pub struct MemberInput {
    pub name: String,
    pub role: Role,
    pub birthday: Option<NaiveDate>,
    pub photo: Option<Upload>,
    pub favorite_food: String,
    pub hobby: String,
    pub introduction: String,
}

impl MemberInput {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            birthday: None,
            photo: None,
            favorite_food: String::new(),
            hobby: String::new(),
            introduction: String::new(),
        }
    }
}

/// A member with the extras their profile shows
#[derive(Debug, Clone)]
pub struct MemberProfile {
    pub member: member::Model,
    pub age: Option<u32>,
    pub role_glyph: &'static str,
    pub photos: Vec<photo::Model>,
}

pub struct FamilyService<'a> {
    storage: &'a LocalStorage,
    config: &'a Config,
}

impl<'a> FamilyService<'a> {
    pub fn new(storage: &'a LocalStorage, config: &'a Config) -> Self {
        Self { storage, config }
    }

    pub async fn register(&self, input: &MemberInput) -> Result<member::Model> {
        let name = forms::required("name", &input.name)?;
        if let Some(photo) = &input.photo {
            forms::image("photo", photo, self.config.gallery.max_member_photo_size_bytes())?;
        }

        let now = Utc::now();
        let member = MemberRepository::create(
            &self.storage.conn,
            member::ActiveModel {
                uuid: Set(Uuid::new_v4()),
                name: Set(name),
                role: Set(input.role.as_str().to_string()),
                birthday: Set(input.birthday),
                photo_path: Set(input.photo.as_ref().map(|p| format!("family_members/{}", p.file_name))),
                favorite_food: Set(input.favorite_food.trim().to_string()),
                hobby: Set(input.hobby.trim().to_string()),
                introduction: Set(input.introduction.trim().to_string()),
                is_active: Set(true),
                created_at: Set(now),
                updated_at: Set(now),
            },
        )
        .await?;
        log::info!("Registered {}", member.display_name());
        Ok(member)
    }

    pub async fn directory(&self, filter: &MemberFilter, page: u64) -> Result<Page<member::Model>> {
        MemberRepository::search_page(&self.storage.conn, filter, self.config.family.members_per_page, page).await
    }

    /// Show or hide several members in the directory
    pub async fn set_active(&self, uuids: &[Uuid], active: bool) -> Result<u64> {
        let changed = MemberRepository::set_active(&self.storage.conn, uuids, active).await?;
        log::info!("Active = {} on {} member(s)", active, changed);
        Ok(changed)
    }

    /// Profile of an active member as of `today`
    pub async fn profile(&self, uuid: &Uuid, today: NaiveDate) -> Result<MemberProfile> {
        let conn = &self.storage.conn;
        let member = MemberRepository::get_by_id(conn, uuid)
            .await?
            .filter(|m| m.is_active)
            .ok_or(NotFoundError::new("member", *uuid))?;

        let icons = IconService::new(self.config.display.icon_theme);
        let photos = PhotoRepository::for_member(conn, uuid, MEMBER_RECENT_PHOTOS).await?;

        Ok(MemberProfile {
            age: member.birthday.and_then(|b| date::calculate_age(b, today)),
            role_glyph: icons.role(member.role()),
            photos,
            member,
        })
    }
}
