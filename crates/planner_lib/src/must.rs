//! This module contains utility functions used to retrieve some objects from the database,
//! that must exist. This is why it is called `must`.
//!
//! This module is used when a route is called at a point where something must be already registered
//! in the database, like an event, a guest, or an item.
//!
//! Unlike the Rust conventions, when such an object doesn't exist, the returned value isn't
//! `Option::None` but the corresponding error (for example, `PlannerError::EventNotFound`).
//! This makes the code cleaner thanks to the [`Try`](std::ops::Try) trait syntax, because at some point
//! we most likely want things to be already existing, without checking it repeatedly
//! and returning the error to the client.

use entity::{event, guest, item};
use sea_orm::ConnectionTrait;

use crate::{
    error::{PlannerError, PlannerResult},
    event as event_queries, guest as guest_queries, item as item_queries,
};

/// Returns the event in the database bound to the provided ID.
pub async fn have_event<C: ConnectionTrait>(conn: &C, event_id: u32) -> PlannerResult<event::Model> {
    event_queries::get_event_by_id(conn, event_id)
        .await?
        .ok_or(PlannerError::EventNotFound(event_id))
}

/// Returns the guest in the database bound to the provided ID.
pub async fn have_guest<C: ConnectionTrait>(conn: &C, guest_id: u32) -> PlannerResult<guest::Model> {
    guest_queries::get_guest_by_id(conn, guest_id)
        .await?
        .ok_or(PlannerError::GuestNotFound(guest_id))
}

/// Returns the item in the database bound to the provided ID.
pub async fn have_item<C: ConnectionTrait>(conn: &C, item_id: u32) -> PlannerResult<item::Model> {
    item_queries::get_item_by_id(conn, item_id)
        .await?
        .ok_or(PlannerError::ItemNotFound(item_id))
}
