//! This module contains anything related to guests in this library.

use entity::guest;
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};

use crate::error::PlannerResult;

/// Returns the optional guest from the provided ID.
pub async fn get_guest_by_id<C: ConnectionTrait>(
    conn: &C,
    guest_id: u32,
) -> PlannerResult<Option<guest::Model>> {
    let r = guest::Entity::find_by_id(guest_id).one(conn).await?;
    Ok(r)
}

/// Returns the list of all guests from the database.
pub async fn guest_list<C: ConnectionTrait>(conn: &C) -> PlannerResult<Vec<guest::Model>> {
    let r = guest::Entity::find()
        .order_by_asc(guest::Column::Id)
        .all(conn)
        .await?;
    Ok(r)
}
