//! Module used to serve the routes of the event-planner API. Each submodule is
//! specific for a route segment.

use actix_web::body::BoxBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::web::JsonConfig;
use actix_web::{Responder, Scope, web};
use serde::Serialize;

use self::event::event_scope;
use self::guest::guest_scope;
use self::item::item_scope;
use crate::{PlannerResponse, utils::json};

pub mod event;
pub mod guest;
pub mod item;

pub fn api_route() -> Scope<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<BoxBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let scope = web::scope("")
        .service(event_scope())
        .service(guest_scope())
        .service(item_scope());

    let json_config = JsonConfig::default().limit(1024 * 16);

    web::scope("")
        .app_data(json_config)
        .route("/info", web::get().to(info))
        .service(scope)
}

/// The JSON body of the responses confirming a mutation.
#[derive(Serialize)]
pub(crate) struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
struct InfoResponse {
    service_name: &'static str,
    api_version: &'static str,
}

async fn info() -> PlannerResponse<impl Responder> {
    let api_version = env!("CARGO_PKG_VERSION");

    json(InfoResponse {
        service_name: "Event Planner API",
        api_version,
    })
}
