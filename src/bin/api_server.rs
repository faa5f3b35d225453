// src/bin/api_server.rs

use anyhow::Context;
use product_catalog::infra::telemetry;
use product_catalog::transport;
use product_catalog::{bootstrap, default_seed_products, Config, PgProductStore};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let config = Config::from_env()?;

    // --- Storage Initialization ---
    info!(max_connections = config.db_max_connections, "connecting to database");
    let store = PgProductStore::connect(&config.database_url, config.db_max_connections)
        .await
        .context("failed to connect to DATABASE_URL")?;

    // --- Bootstrap: schema + seed data, before any request is served ---
    let seeds = if config.seed_on_empty {
        default_seed_products()
    } else {
        Vec::new()
    };
    let report = bootstrap(&store, &seeds)
        .await
        .context("failed to bootstrap products table")?;
    info!(
        existing_rows = report.existing_rows,
        seeded_rows = report.seeded_rows,
        "bootstrap complete"
    );

    // --- API Server Initialization ---
    let app_state = transport::http::AppState::new(Arc::new(store.clone()));
    let app = transport::http::build_app(app_state, &config.cors_allowed_origins)
        .context("invalid CORS_ALLOWED_ORIGINS entry")?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, origins = ?config.cors_allowed_origins, "API server listening");
    info!("Swagger UI available at http://{}/swagger-ui", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    store.close().await;
    info!("graceful shutdown complete");
    Ok(())
}
