//! This module contains anything related to events in this library.

use entity::{assigned_item, event, event_guest, guest};
use itertools::Itertools as _;
use sea_orm::{
    ColumnTrait as _, ConnectionTrait, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::error::PlannerResult;

/// A guest attached to an event, with its attendance flag.
#[derive(serde::Serialize, Debug, FromQueryResult)]
pub struct EventGuestItem {
    /// The guest ID.
    pub id: u32,
    /// The guest name.
    pub name: String,
    /// Whether the guest confirmed their attendance.
    pub is_going: i8,
}

/// An event with its invited guests and assigned items.
///
/// In general, when we want a list of events, we return a list of this type.
#[derive(serde::Serialize, Debug)]
pub struct EventWithRelated {
    /// The concrete event model.
    #[serde(flatten)]
    pub event: event::Model,
    /// The guests invited to the event, with their attendance flag.
    pub guests: Vec<EventGuestItem>,
    /// The items assigned for the event.
    pub assigned_items: Vec<assigned_item::Model>,
}

#[derive(FromQueryResult)]
struct RawEventGuestRow {
    event_id: u32,
    id: u32,
    name: String,
    is_going: i8,
}

/// Returns the optional event from the provided ID.
pub async fn get_event_by_id<C: ConnectionTrait>(
    conn: &C,
    event_id: u32,
) -> PlannerResult<Option<event::Model>> {
    let r = event::Entity::find_by_id(event_id).one(conn).await?;
    Ok(r)
}

/// Returns the list of events from the database, each with its guests and assigned items.
pub async fn event_list<C: ConnectionTrait>(conn: &C) -> PlannerResult<Vec<EventWithRelated>> {
    let events = event::Entity::find()
        .order_by_asc(event::Column::Id)
        .all(conn)
        .await?;

    let guest_rows = event_guest::Entity::find()
        .inner_join(guest::Entity)
        .select_only()
        .column(event_guest::Column::EventId)
        .column(guest::Column::Id)
        .column(guest::Column::Name)
        .column(event_guest::Column::IsGoing)
        .order_by_asc(event_guest::Column::GuestId)
        .into_model::<RawEventGuestRow>()
        .all(conn)
        .await?;

    let item_rows = assigned_item::Entity::find()
        .order_by_asc(assigned_item::Column::Id)
        .all(conn)
        .await?;

    let mut guests_by_event = guest_rows
        .into_iter()
        .map(|row| {
            (
                row.event_id,
                EventGuestItem {
                    id: row.id,
                    name: row.name,
                    is_going: row.is_going,
                },
            )
        })
        .into_group_map();

    let mut items_by_event = item_rows
        .into_iter()
        .map(|row| (row.event_id, row))
        .into_group_map();

    let result = events
        .into_iter()
        .map(|event| EventWithRelated {
            guests: guests_by_event.remove(&event.id).unwrap_or_default(),
            assigned_items: items_by_event.remove(&event.id).unwrap_or_default(),
            event,
        })
        .collect();

    Ok(result)
}

/// Returns the provided event together with its guests and assigned items.
pub async fn get_event_with_related<C: ConnectionTrait>(
    conn: &C,
    event: event::Model,
) -> PlannerResult<EventWithRelated> {
    let guests = event_guest::Entity::find()
        .filter(event_guest::Column::EventId.eq(event.id))
        .inner_join(guest::Entity)
        .select_only()
        .column(guest::Column::Id)
        .column(guest::Column::Name)
        .column(event_guest::Column::IsGoing)
        .order_by_asc(event_guest::Column::GuestId)
        .into_model::<EventGuestItem>()
        .all(conn)
        .await?;

    let assigned_items = assigned_item::Entity::find()
        .filter(assigned_item::Column::EventId.eq(event.id))
        .order_by_asc(assigned_item::Column::Id)
        .all(conn)
        .await?;

    Ok(EventWithRelated {
        event,
        guests,
        assigned_items,
    })
}
