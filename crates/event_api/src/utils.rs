use std::{
    convert::Infallible,
    future::{Ready, ready},
};

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload};
use planner_lib::Database;
use serde::Serialize;

/// Converts the provided body to a `200 OK` JSON response.
pub fn json<T: Serialize, E>(obj: T) -> Result<HttpResponse, E> {
    Ok(HttpResponse::Ok().json(obj))
}

/// Extracts the SQL connection out of the [`Database`] stored in the app data.
pub struct ExtractDbConn(pub sea_orm::DbConn);

impl FromRequest for ExtractDbConn {
    type Error = Infallible;

    type Future = Ready<Result<Self, Infallible>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let db = req
            .app_data::<Database>()
            .unwrap_or_else(|| panic!("{} should be present", std::any::type_name::<Database>()));
        ready(Ok(Self(db.clone().sql_conn)))
    }
}
