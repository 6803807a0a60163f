//! The event-planner API program.
//!
//! The program also includes a [library](event_api_lib). Overall, it uses the [`planner_lib`]
//! crate as a main dependency.

use actix_cors::Cors;
use actix_web::{App, HttpServer};
use anyhow::Context;
use event_api_lib::configure;
use migration::MigratorTrait;
use mkenv::prelude::*;
use planner_lib::Database;
use tracing::level_filters::LevelFilter;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// The main entry point.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Err(err) if !err.not_found() => return Err(err).context("cannot retrieve .env files"),
        _ => (),
    }
    event_api_lib::init_env()?;

    let db = Database::from_db_url(event_api_lib::env().db_env.db_url.db_url.get()).await?;

    migration::Migrator::up(&db.sql_conn, None).await?;

    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE"])
            .allowed_headers(vec!["accept", "content-type"])
            .max_age(3600);
        #[cfg(debug_assertions)]
        let cors = cors.allow_any_origin();
        #[cfg(not(debug_assertions))]
        let cors = cors.allowed_origin(&event_api_lib::env().host.host);

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::<configure::CustomRootSpanBuilder>::new())
            .configure(|cfg| configure::configure(cfg, db.clone()))
    })
    .bind(("0.0.0.0", event_api_lib::env().port))
    .context("Cannot bind 0.0.0.0 address")?
    .run()
    .await
    .context("Cannot create actix-web server")?;

    Ok(())
}
