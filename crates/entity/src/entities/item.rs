use sea_orm::entity::prelude::*;
use serde::Serialize;

/// An item in the database.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "item")]
pub struct Model {
    /// The item ID.
    #[sea_orm(primary_key)]
    pub id: u32,
    /// The item name.
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::assigned_item::Entity")]
    AssignedItem,
}

impl Related<super::assigned_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssignedItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
