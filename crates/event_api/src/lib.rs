//! The library of the event-planner API program.
//!
//! It contains the route handlers, the error types returned to the clients, and the
//! environment setup of the server. The binary itself lives in `main.rs` and mostly
//! glues these pieces to an HTTP server.

mod env;
mod error;
mod http;
mod utils;

pub mod configure;

pub use env::{env, init_env};
pub use error::{
    ErrorResponse, FitRequestId, PlannerErrorKind, PlannerResponse, PlannerResult,
    PlannerResultExt, TracedError,
};
pub use http::api_route;
pub use utils::ExtractDbConn;
