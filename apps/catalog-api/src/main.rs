//! Catalog API - REST server for the product catalog and user accounts

use axum_helpers::server::{close_postgres, create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL at {}", config.postgres.url());

    let db = database::postgres::connect_from_config_with_retry(config.postgres.clone(), None)
        .await?;

    database::postgres::run_migrations::<Migrator>(&db, "catalog_api").await?;

    // Initialize the application state
    let state = AppState {
        config: config.clone(),
        db,
    };

    // Build REST router
    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router
        .merge(health_router(state.config.app.clone()))
        .merge(api::health::ready_router(state.clone()));

    info!("Starting Catalog API on port {}", state.config.server.port);

    // Run server with graceful shutdown; close the pool on the way out
    let cleanup_db = state.db.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        close_postgres(cleanup_db),
    )
    .await?;

    info!("Catalog API shutdown complete");
    Ok(())
}
