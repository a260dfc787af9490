use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use motivator::{api, config::Config, seed, server, AppState, Database, Views};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    let dotenv_loaded = dotenv::dotenv().is_ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    if !dotenv_loaded {
        tracing::warn!("No .env file found, falling back to environment variables.");
    }

    let config = Config::from_env().context("Failed to load config")?;

    let db = Database::connect(&config.postgres).await?;
    db.migrate().await.context("Failed to run migrations")?;

    let imported = seed::import_all(&db)
        .await
        .context("Failed to import seed data")?;
    tracing::info!("Imported {} quotes", imported);

    let views = Views::new().context("Failed to load templates")?;
    let state = Arc::new(AppState { db, views });
    let app = api::router(state, &config.server);

    let bind_address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_address))?;
    tracing::info!("Server starting on {}", listener.local_addr()?);

    server::serve(
        listener,
        app,
        config.server.shutdown_timeout,
        server::shutdown_signal(),
    )
    .await
}
