use std::fmt;

use actix_web::{HttpResponse, http::StatusCode};
use sea_orm::{DbErr, TransactionError};
use tracing_actix_web::RequestId;

#[derive(thiserror::Error, Debug)]
#[repr(i32)] // i32 to be used with clients that don't support unsigned integers
#[rustfmt::skip]
pub enum PlannerErrorKind {
    // Caution: when creating a new error, you must ensure its code isn't
    // in conflict with another one in `planner_lib::error::PlannerError`.

    // --------
    // --- Internal server errors
    // --------

    // ...Errors from planner_lib

    #[error("unknown error: {0}")]
    Unknown(String) = 103,

    // --------
    // --- Logical errors
    // --------

    #[error("not found")]
    EndpointNotFound = 301,

    // ...Errors from planner_lib

    #[error(transparent)]
    Lib(#[from] planner_lib::error::PlannerError),
}

#[derive(serde::Serialize)]
pub struct PlannerErrorKindResponse {
    pub r#type: i32,
    pub message: String,
}

impl actix_web::ResponseError for PlannerErrorKind {
    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let (r#type, status_code) = self.get_err_type_and_status_code();
        let mut res = HttpResponse::build(status_code);

        let message = self.to_string();
        res.extensions_mut().insert(Some(PlannerErrorKindResponse {
            r#type,
            message: message.clone(),
        }));

        res.json(PlannerErrorKindResponse { r#type, message })
    }
}

impl PlannerErrorKind {
    pub fn get_err_type_and_status_code(&self) -> (i32, StatusCode) {
        use PlannerErrorKind as E;
        use StatusCode as S;
        use planner_lib::error::PlannerError as LE;

        match self {
            E::Lib(LE::DbError(_)) => (101, S::INTERNAL_SERVER_ERROR),
            E::Lib(LE::Internal(_)) => (102, S::INTERNAL_SERVER_ERROR),
            E::Unknown(_) => (103, S::INTERNAL_SERVER_ERROR),

            E::EndpointNotFound => (301, S::NOT_FOUND),
            E::Lib(LE::EventNotFound(_)) => (302, S::NOT_FOUND),
            E::Lib(LE::GuestNotFound(_)) => (303, S::NOT_FOUND),
            E::Lib(LE::ItemNotFound(_)) => (304, S::NOT_FOUND),
            E::Lib(LE::GuestNotInvited(_, _)) => (305, S::NOT_FOUND),
            E::Lib(LE::InvalidDatetime(_)) => (306, S::BAD_REQUEST),
            E::Lib(LE::InvalidGuestName(_)) => (307, S::BAD_REQUEST),
        }
    }
}

impl From<DbErr> for PlannerErrorKind {
    fn from(value: DbErr) -> Self {
        Self::Lib(value.into())
    }
}

impl<E> From<TransactionError<E>> for PlannerErrorKind
where
    PlannerErrorKind: From<E>,
{
    fn from(value: TransactionError<E>) -> Self {
        match value {
            TransactionError::Connection(db_err) => From::from(db_err),
            TransactionError::Transaction(e) => From::from(e),
        }
    }
}

#[derive(Debug)]
pub struct TracedError {
    pub status_code: Option<StatusCode>,
    pub r#type: Option<i32>,
    pub request_id: RequestId,
    pub error: actix_web::Error,
}

impl fmt::Display for TracedError {
    #[inline(always)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl std::error::Error for TracedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl TracedError {
    fn to_err_res(&self, r#type: i32) -> ErrorResponse {
        ErrorResponse {
            request_id: self.request_id.to_string(),
            r#type,
            message: self.error.to_string(),
        }
    }
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub request_id: String,
    pub r#type: i32,
    pub message: String,
}

impl actix_web::ResponseError for TracedError {
    fn error_response(&self) -> HttpResponse {
        let r#type = self.r#type.unwrap_or(103);
        let status_code = self
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        HttpResponse::build(status_code).json(self.to_err_res(r#type))
    }
}

pub type PlannerResult<T> = Result<T, PlannerErrorKind>;

/// The result type of the route handlers, carrying the ID of the request on error.
pub type PlannerResponse<T> = Result<T, TracedError>;

/// Converts a `Result<T, E>` in which `E` is convertible to [`planner_lib::error::PlannerError`]
/// into a [`PlannerResult<T>`].
pub trait PlannerResultExt<T> {
    fn with_api_err(self) -> PlannerResult<T>;
}

impl<T, E> PlannerResultExt<T> for Result<T, E>
where
    planner_lib::error::PlannerError: From<E>,
{
    fn with_api_err(self) -> PlannerResult<T> {
        self.map_err(planner_lib::error::PlannerError::from)
            .map_err(Into::into)
    }
}

/// Binds the request ID to the error of a result, so the response to a failed
/// request can be traced back to it.
pub trait FitRequestId<T, E> {
    fn fit(self, request_id: RequestId) -> PlannerResponse<T>;
}

impl<T, E> FitRequestId<T, E> for Result<T, E>
where
    PlannerErrorKind: From<E>,
{
    fn fit(self, request_id: RequestId) -> PlannerResponse<T> {
        self.map_err(|e| {
            let error = PlannerErrorKind::from(e);
            let (r#type, status_code) = error.get_err_type_and_status_code();
            TracedError {
                status_code: Some(status_code),
                r#type: Some(r#type),
                request_id,
                error: error.into(),
            }
        })
    }
}
