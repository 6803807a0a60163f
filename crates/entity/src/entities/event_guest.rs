use sea_orm::entity::prelude::*;

/// The association between events and their invited guests.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "event_guest")]
pub struct Model {
    /// The ID of the event.
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: u32,
    /// The ID of the guest.
    #[sea_orm(primary_key, auto_increment = false)]
    pub guest_id: u32,
    /// Whether the guest confirmed their attendance. Guests are invited
    /// with this flag unset.
    #[sea_orm(default_value = 0)]
    pub is_going: i8,
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

impl ActiveModelBehavior for ActiveModel {}
