//! HTTP server initialization and runtime setup.
//!
//! Handles database connection, migrations, service wiring and the Axum
//! server lifecycle.

use crate::application::services::{QueryService, TrackingService};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgAffiliateRepository, PgClickRepository, PgConversionRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::ServiceExt;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Schema migrations
/// - Repositories, services and shared state
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, migrations, bind or server
/// runtime fail.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let pool = Arc::new(pool);
    let affiliate_repository = Arc::new(PgAffiliateRepository::new(pool.clone()));
    let click_repository = Arc::new(PgClickRepository::new(pool.clone()));
    let conversion_repository = Arc::new(PgConversionRepository::new(pool.clone()));

    let tracking_service = Arc::new(TrackingService::new(
        click_repository.clone(),
        conversion_repository.clone(),
    ));
    let query_service = Arc::new(QueryService::new(
        affiliate_repository,
        click_repository,
        conversion_repository,
    ));

    let state = AppState::new(tracking_service, query_service);

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
