#![allow(dead_code)]

use chrono::{NaiveDate, Utc};
use family_hub::choices::Role;
use family_hub::entities::{event_category, member};
use family_hub::repositories::{CategoryRepository, MemberRepository};
use family_hub::storage::LocalStorage;
use sea_orm::ActiveValue::Set;
use uuid::Uuid;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn storage() -> LocalStorage {
    LocalStorage::in_memory().await.expect("in-memory storage")
}

pub async fn add_member(storage: &LocalStorage, name: &str, role: Role) -> member::Model {
    MemberRepository::create(
        &storage.conn,
        member::ActiveModel {
            uuid: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            role: Set(role.as_str().to_string()),
            birthday: Set(None),
            photo_path: Set(None),
            favorite_food: Set(String::new()),
            hobby: Set(String::new()),
            introduction: Set(String::new()),
            is_active: Set(true),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        },
    )
    .await
    .unwrap()
}

pub async fn add_category(storage: &LocalStorage, name: &str) -> event_category::Model {
    CategoryRepository::create(
        &storage.conn,
        event_category::ActiveModel {
            uuid: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            emoji: Set("🎂".to_string()),
            color: Set("#e74c3c".to_string()),
            description: Set(String::new()),
            created_at: Set(Utc::now()),
        },
    )
    .await
    .unwrap()
}
