use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::choices::Role;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: Uuid,
    pub name: String,
    #[sea_orm(indexed)]
    pub role: String,
    pub birthday: Option<Date>,
    pub photo_path: Option<String>,
    pub favorite_food: String,
    pub hobby: String,
    pub introduction: String,
    #[sea_orm(indexed)]
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::photo::Entity> for Entity {
    fn to() -> RelationDef {
        super::photo_member::Relation::Photo.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::photo_member::Relation::Member.def().rev())
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        super::event_participant::Relation::Event.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::event_participant::Relation::Member.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn role(&self) -> Role {
        Role::from_stored(&self.role)
    }

    /// Name with the role in parentheses, e.g. "Hana (daughter)".
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.role)
    }
}
