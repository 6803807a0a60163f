//! This module contains anything related to items in this library.

use entity::item;
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};

use crate::error::PlannerResult;

/// Returns the optional item from the provided ID.
pub async fn get_item_by_id<C: ConnectionTrait>(
    conn: &C,
    item_id: u32,
) -> PlannerResult<Option<item::Model>> {
    let r = item::Entity::find_by_id(item_id).one(conn).await?;
    Ok(r)
}

/// Returns the list of all items from the database.
pub async fn item_list<C: ConnectionTrait>(conn: &C) -> PlannerResult<Vec<item::Model>> {
    let r = item::Entity::find()
        .order_by_asc(item::Column::Id)
        .all(conn)
        .await?;
    Ok(r)
}
