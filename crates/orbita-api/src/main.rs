//! # orbita-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the Orbita agency platform.
//! Binds to a configurable port (default 8080).

use std::net::SocketAddr;

use orbita_api::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment.
    let config = AppConfig::from_env();
    let port = config.port;

    // Initialize database pool (optional — absent means in-memory only).
    let db_pool = orbita_api::db::init_pool().await.map_err(|e| {
        tracing::error!("Database initialization failed: {e}");
        e
    })?;

    // Geo-IP client for country enrichment on quote intake.
    let geo = orbita_api::geo::GeoClient::from_env().map_err(|e| {
        tracing::error!("Geo client initialization failed: {e}");
        e
    })?;

    // Telegram notifier, when configured.
    let notifier = orbita_api::notify::TelegramNotifier::from_env();
    if notifier.is_none() {
        tracing::warn!("Telegram not configured — lead notifications disabled");
    }

    let state = AppState::new(config, db_pool, geo, notifier);

    // Hydrate in-memory stores from database (if connected).
    state.hydrate_from_db().await.map_err(|e| {
        tracing::error!("Database hydration failed: {e}");
        e
    })?;

    let app = orbita_api::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Orbita API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
