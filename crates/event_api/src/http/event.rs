use actix_web::{
    HttpResponse, Responder, Scope,
    web::{self, Json, Path, Query},
};
use entity::{assigned_item, event, event_guest, guest};
use planner_lib::{error::PlannerError, internal, must, validate};
use sea_orm::{
    ActiveModelTrait as _, ActiveValue::Set, ColumnTrait as _, EntityTrait, QueryFilter,
    QuerySelect, TransactionTrait as _,
};
use serde::Deserialize;
use tracing_actix_web::RequestId;

use super::MessageResponse;
use crate::{
    FitRequestId as _, PlannerErrorKind, PlannerResponse, PlannerResultExt as _,
    utils::{ExtractDbConn, json},
};

pub fn event_scope() -> Scope {
    web::scope("/event")
        .service(
            web::scope("/{event_id}")
                .route("/guest/{guest_id}", web::patch().to(rsvp))
                .route("/assign", web::post().to(assign))
                .route("", web::get().to(get))
                .route("", web::patch().to(update))
                .route("", web::delete().to(delete)),
        )
        .route("", web::get().to(list))
        .route("", web::post().to(create))
}

async fn list(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
) -> PlannerResponse<impl Responder> {
    tracing::info!("fetching all events");

    let events = planner_lib::event::event_list(&conn)
        .await
        .with_api_err()
        .fit(req_id)?;

    json(events)
}

async fn get(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
    event_id: Path<u32>,
) -> PlannerResponse<impl Responder> {
    let event_id = event_id.into_inner();

    tracing::info!("fetching event {event_id}");

    let event = must::have_event(&conn, event_id)
        .await
        .with_api_err()
        .fit(req_id)?;
    let event = planner_lib::event::get_event_with_related(&conn, event)
        .await
        .with_api_err()
        .fit(req_id)?;

    json(event)
}

#[derive(Deserialize)]
struct CreateEventBody {
    name: String,
    datetime: String,
    location: Option<String>,
}

async fn create(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
    Json(body): Json<CreateEventBody>,
) -> PlannerResponse<impl Responder> {
    tracing::info!("creating event `{}`", body.name);

    validate::check_datetime(&body.datetime)
        .with_api_err()
        .fit(req_id)?;

    // Either the event exists with every guest invited, or nothing is saved.
    let event_id = conn
        .transaction(|txn| {
            Box::pin(async move {
                let new_event = event::ActiveModel {
                    name: Set(body.name),
                    datetime: Set(body.datetime),
                    location: Set(body.location),
                    ..Default::default()
                };

                let event = event::Entity::insert(new_event)
                    .exec_with_returning(txn)
                    .await?;

                let guest_ids: Vec<u32> = guest::Entity::find()
                    .select_only()
                    .column(guest::Column::Id)
                    .into_tuple()
                    .all(txn)
                    .await?;

                if !guest_ids.is_empty() {
                    let invites = guest_ids.into_iter().map(|guest_id| event_guest::ActiveModel {
                        event_id: Set(event.id),
                        guest_id: Set(guest_id),
                        is_going: Set(0),
                    });

                    event_guest::Entity::insert_many(invites).exec(txn).await?;
                }

                Ok::<_, PlannerErrorKind>(event.id)
            })
        })
        .await
        .fit(req_id)?;

    Ok(HttpResponse::Created().json(MessageResponse {
        message: format!("event {event_id} successfully created"),
    }))
}

#[derive(Deserialize)]
struct UpdateEventQuery {
    name: Option<String>,
    datetime: Option<String>,
    location: Option<String>,
}

async fn update(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
    event_id: Path<u32>,
    Query(query): Query<UpdateEventQuery>,
) -> PlannerResponse<impl Responder> {
    let event_id = event_id.into_inner();

    tracing::info!("updating event {event_id}");

    if let Some(datetime) = query.datetime.as_deref() {
        validate::check_datetime(datetime)
            .with_api_err()
            .fit(req_id)?;
    }

    let event = must::have_event(&conn, event_id)
        .await
        .with_api_err()
        .fit(req_id)?;

    let mut updated_event = event::ActiveModel::from(event);

    if let Some(name) = query.name {
        updated_event.name = Set(name);
    }
    if let Some(datetime) = query.datetime {
        updated_event.datetime = Set(datetime);
    }
    if let Some(location) = query.location {
        updated_event.location = Set(Some(location));
    }

    if updated_event.is_changed() {
        event::Entity::update(updated_event)
            .exec(&conn)
            .await
            .with_api_err()
            .fit(req_id)?;
    }

    json(MessageResponse {
        message: format!("event {event_id} successfully updated"),
    })
}

async fn delete(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
    event_id: Path<u32>,
) -> PlannerResponse<impl Responder> {
    let event_id = event_id.into_inner();

    tracing::info!("deleting event {event_id}");

    must::have_event(&conn, event_id)
        .await
        .with_api_err()
        .fit(req_id)?;

    // The event row and its join rows go away together. The join rows must
    // go first, as they hold foreign keys on the event.
    conn.transaction(|txn| {
        Box::pin(async move {
            event_guest::Entity::delete_many()
                .filter(event_guest::Column::EventId.eq(event_id))
                .exec(txn)
                .await?;

            assigned_item::Entity::delete_many()
                .filter(assigned_item::Column::EventId.eq(event_id))
                .exec(txn)
                .await?;

            let res = event::Entity::delete_by_id(event_id).exec(txn).await?;
            if res.rows_affected == 0 {
                return Err(internal!("event {event_id} should exist in database").into());
            }

            Ok::<_, PlannerErrorKind>(())
        })
    })
    .await
    .fit(req_id)?;

    json(MessageResponse {
        message: format!("event {event_id} is deleted with its invitations and assigned items"),
    })
}

#[derive(Deserialize)]
struct RsvpBody {
    is_going: i8,
}

async fn rsvp(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
    path: Path<(u32, u32)>,
    Json(body): Json<RsvpBody>,
) -> PlannerResponse<impl Responder> {
    let (event_id, guest_id) = path.into_inner();

    tracing::info!("updating attendance of guest {guest_id} for event {event_id}");

    must::have_event(&conn, event_id)
        .await
        .with_api_err()
        .fit(req_id)?;

    let invite = event_guest::Entity::find_by_id((event_id, guest_id))
        .one(&conn)
        .await
        .with_api_err()
        .fit(req_id)?
        .ok_or(PlannerError::GuestNotInvited(event_id, guest_id))
        .with_api_err()
        .fit(req_id)?;

    let mut invite = event_guest::ActiveModel::from(invite);
    invite.is_going = Set(body.is_going);

    event_guest::Entity::update(invite)
        .exec(&conn)
        .await
        .with_api_err()
        .fit(req_id)?;

    json(MessageResponse {
        message: format!("attendance of guest {guest_id} updated for event {event_id}"),
    })
}

#[derive(Deserialize)]
struct AssignItemBody {
    guest_id: u32,
    item_id: u32,
}

async fn assign(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
    event_id: Path<u32>,
    Json(body): Json<AssignItemBody>,
) -> PlannerResponse<impl Responder> {
    let event_id = event_id.into_inner();

    tracing::info!(
        "assigning item {} to guest {} for event {event_id}",
        body.item_id,
        body.guest_id
    );

    must::have_event(&conn, event_id)
        .await
        .with_api_err()
        .fit(req_id)?;
    must::have_guest(&conn, body.guest_id)
        .await
        .with_api_err()
        .fit(req_id)?;
    must::have_item(&conn, body.item_id)
        .await
        .with_api_err()
        .fit(req_id)?;

    let new_assignment = assigned_item::ActiveModel {
        event_id: Set(event_id),
        guest_id: Set(body.guest_id),
        item_id: Set(body.item_id),
        ..Default::default()
    };

    assigned_item::Entity::insert(new_assignment)
        .exec(&conn)
        .await
        .with_api_err()
        .fit(req_id)?;

    Ok(HttpResponse::Created().json(MessageResponse {
        message: format!(
            "item {} assigned to guest {} for event {event_id}",
            body.item_id, body.guest_id
        ),
    }))
}
