//! Productos API - REST server for the product catalog

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
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

    info!("Connecting to PostgreSQL");

    let db =
        database::postgres::connect_from_config_with_retry(config.postgres.clone(), None).await?;

    database::postgres::run_migrations::<migration::Migrator>(&db, "productos_api").await?;

    let state = AppState {
        config: config.clone(),
        db,
    };

    // Build REST router
    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router.merge(health_router(state.config.app));

    info!(
        "Starting Productos API on port {}",
        state.config.server.port
    );

    let db_for_cleanup = state.db.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing PostgreSQL connection pool");
            if let Err(e) = db_for_cleanup.close().await {
                tracing::warn!("Error closing PostgreSQL connection: {}", e);
            }
            info!("PostgreSQL connection closed");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Productos API shutdown complete");
    Ok(())
}
