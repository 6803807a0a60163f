use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: u32,
    pub name: String,
    pub datetime: String,
    pub location: Option<String>,
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

impl ActiveModelBehavior for ActiveModel {}
