use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "photo_tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub color: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::photo::Entity> for Entity {
    fn to() -> RelationDef {
        super::photo_tag_link::Relation::Photo.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::photo_tag_link::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
