use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A guest in the database.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "guest")]
pub struct Model {
    /// The guest ID.
    #[sea_orm(primary_key)]
    pub id: u32,
    /// The guest name.
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_guest::Entity")]
    EventGuest,
    #[sea_orm(has_many = "super::assigned_item::Entity")]
    AssignedItem,
}

impl Related<super::event_guest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventGuest.def()
    }
}

impl Related<super::assigned_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssignedItem.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        super::event_guest::Relation::Event.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::event_guest::Relation::Guest.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
