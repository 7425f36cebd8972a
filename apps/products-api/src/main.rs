//! Products API - REST server for the product catalog

use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::InMemoryProductRepository;
use migration::Migrator;
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::{AppState, Storage};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let storage = match config.database.clone() {
        Some(db_config) => {
            info!("Connecting to PostgreSQL");
            let db = database::postgres::connect_from_config_with_retry(db_config, None)
                .await
                .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

            if config.run_migrations {
                database::postgres::run_migrations::<Migrator>(&db, config.app.name).await?;
            }

            Storage::Postgres(db)
        }
        None => {
            warn!("DATABASE_URL not set or empty, products are stored in memory and lost on exit");
            Storage::InMemory(InMemoryProductRepository::new())
        }
    };

    let state = AppState { config, storage };
    let app = api::app(&state)?;

    info!(
        "Starting {} v{} on port {}",
        state.config.app.name, state.config.app.version, state.config.server.port
    );

    let storage = state.storage.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            if let Storage::Postgres(db) = storage {
                info!("Shutting down: closing PostgreSQL connections");
                if let Err(e) = db.close().await {
                    warn!("Failed to close PostgreSQL pool: {}", e);
                }
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
