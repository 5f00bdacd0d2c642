use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "photo_tag_links")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub photo_uuid: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub tag_uuid: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::photo::Entity",
        from = "Column::PhotoUuid",
        to = "super::photo::Column::Uuid",
        on_delete = "Cascade"
    )]
    Photo,
    #[sea_orm(
        belongs_to = "super::photo_tag::Entity",
        from = "Column::TagUuid",
        to = "super::photo_tag::Column::Uuid",
        on_delete = "Cascade"
    )]
    Tag,
}

impl ActiveModelBehavior for ActiveModel {}
