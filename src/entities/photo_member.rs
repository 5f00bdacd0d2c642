use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "photo_members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub photo_uuid: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub member_uuid: Uuid,
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
        belongs_to = "super::member::Entity",
        from = "Column::MemberUuid",
        to = "super::member::Column::Uuid",
        on_delete = "Cascade"
    )]
    Member,
}

impl ActiveModelBehavior for ActiveModel {}
