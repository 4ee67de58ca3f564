//! Wina Bwangu kiosk backend - application entry point.
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Open the SQLite database behind a connection pool
//! 3. Run database migrations
//! 4. Build the HTTP router
//! 5. Start the server on the configured port

use tracing_subscriber::EnvFilter;
use wina_bwangu_server::{AppState, app, config, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG, defaults to "info"
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!(?config, "Configuration loaded");

    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let router = app(AppState::new(pool), &config.static_dir);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
