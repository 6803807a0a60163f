use actix_web::{
    HttpResponse, Responder, Scope,
    web::{self, Json},
};
use entity::item;
use sea_orm::{ActiveValue::Set, EntityTrait};
use serde::Deserialize;
use tracing_actix_web::RequestId;

use super::MessageResponse;
use crate::{
    FitRequestId as _, PlannerResponse, PlannerResultExt as _,
    utils::{ExtractDbConn, json},
};

pub fn item_scope() -> Scope {
    web::scope("/item")
        .route("", web::get().to(list))
        .route("", web::post().to(create))
}

async fn list(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
) -> PlannerResponse<impl Responder> {
    tracing::info!("fetching all items");

    let items = planner_lib::item::item_list(&conn)
        .await
        .with_api_err()
        .fit(req_id)?;

    json(items)
}

#[derive(Deserialize)]
struct CreateItemBody {
    name: String,
}

async fn create(
    req_id: RequestId,
    ExtractDbConn(conn): ExtractDbConn,
    Json(body): Json<CreateItemBody>,
) -> PlannerResponse<impl Responder> {
    tracing::info!("creating item `{}`", body.name);

    let new_item = item::ActiveModel {
        name: Set(body.name),
        ..Default::default()
    };

    let item = item::Entity::insert(new_item)
        .exec_with_returning(&conn)
        .await
        .with_api_err()
        .fit(req_id)?;

    Ok(HttpResponse::Created().json(MessageResponse {
        message: format!("item {} successfully created", item.id),
    }))
}
