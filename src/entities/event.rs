use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::choices::{Priority, Repeat};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: Uuid,
    pub title: String,
    pub description: String,
    #[sea_orm(indexed)]
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub start_time: Option<Time>,
    pub end_time: Option<Time>,
    pub is_all_day: bool,
    pub repeat: String,
    pub repeat_until: Option<Date>,
    pub category_uuid: Option<Uuid>,
    pub location: String,
    pub priority: String,
    pub is_reminder_enabled: bool,
    pub reminder_minutes: i32,
    pub created_by: Option<Uuid>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event_category::Entity",
        from = "Column::CategoryUuid",
        to = "super::event_category::Column::Uuid",
        on_delete = "SetNull"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::CreatedBy",
        to = "super::account::Column::Uuid",
        on_delete = "SetNull"
    )]
    Creator,
}

impl Related<super::event_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        super::event_participant::Relation::Member.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::event_participant::Relation::Event.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn priority(&self) -> Priority {
        Priority::from_stored(&self.priority)
    }

    pub fn repeat(&self) -> Repeat {
        Repeat::from_stored(&self.repeat)
    }
}
