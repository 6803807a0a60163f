use sea_orm::entity::prelude::*;
use serde::Serialize;

/// An item assigned to a guest for an event.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "assigned_item")]
pub struct Model {
    /// The ID of the assignment.
    #[sea_orm(primary_key)]
    #[serde(skip_serializing)]
    pub id: u32,
    /// The ID of the event.
    pub event_id: u32,
    /// The ID of the guest bringing the item.
    pub guest_id: u32,
    /// The ID of the item.
    pub item_id: u32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Event,
    #[sea_orm(
        belongs_to = "super::guest::Entity",
        from = "Column::GuestId",
        to = "super::guest::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Guest,
    #[sea_orm(
        belongs_to = "super::item::Entity",
        from = "Column::ItemId",
        to = "super::item::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Item,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::guest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guest.def()
    }
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
