use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "photos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: Uuid,
    pub title: String,
    pub image_path: String,
    pub image_size_bytes: i64,
    pub description: String,
    #[sea_orm(indexed)]
    pub taken_date: Date,
    pub location: String,
    #[sea_orm(indexed)]
    pub album_uuid: Option<Uuid>,
    #[sea_orm(indexed)]
    pub is_favorite: bool,
    #[sea_orm(indexed)]
    pub is_public: bool,
    pub uploaded_by: Option<Uuid>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::photo_album::Entity",
        from = "Column::AlbumUuid",
        to = "super::photo_album::Column::Uuid",
        on_delete = "SetNull"
    )]
    Album,
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::UploadedBy",
        to = "super::account::Column::Uuid",
        on_delete = "SetNull"
    )]
    Uploader,
}

impl Related<super::photo_album::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Album.def()
    }
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Uploader.def()
    }
}

impl Related<super::photo_tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::photo_tag_link::Relation::Tag.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::photo_tag_link::Relation::Photo.def().rev())
    }
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        super::photo_member::Relation::Member.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::photo_member::Relation::Photo.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
