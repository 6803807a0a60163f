use actix_web::{
    HttpResponse, Responder, Scope,
    web::{self, Json},
};
use entity::guest;
use planner_lib::validate;
use sea_orm::{ActiveValue::Set, EntityTrait};
use serde::Deserialize;
use tracing_actix_web::RequestId;

use super::MessageResponse;
use crate::{
    FitRequestId as _, PlannerResponse, PlannerResultExt as _,
    utils::{ExtractDbConn, json},
};

pub fn guest_scope() -> Scope {
    web::scope("/guest")
        .route("", web::get().to(list))
        .route("", web::post().to(create))
}

async fn list(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
) -> PlannerResponse<impl Responder> {
    tracing::info!("fetching all guests");

    let guests = planner_lib::guest::guest_list(&conn)
        .await
        .with_api_err()
        .fit(req_id)?;

    json(guests)
}

#[derive(Deserialize)]
struct CreateGuestBody {
    name: String,
}

async fn create(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
    Json(body): Json<CreateGuestBody>,
) -> PlannerResponse<impl Responder> {
    tracing::info!("creating guest `{}`", body.name);

    validate::check_guest_name(&body.name)
        .with_api_err()
        .fit(req_id)?;

    let new_guest = guest::ActiveModel {
        name: Set(body.name),
        ..Default::default()
    };

    let guest = guest::Entity::insert(new_guest)
        .exec_with_returning(&conn)
        .await
        .with_api_err()
        .fit(req_id)?;

    Ok(HttpResponse::Created().json(MessageResponse {
        message: format!("guest {} successfully created", guest.id),
    }))
}
