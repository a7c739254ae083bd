//! Server bootstrap: config from env, pool + migrations, then serve.

use pizzeria_api::{app_router, apply_migrations, AppConfig, AppState, SqliteStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pizzeria_api=info".parse()?))
        .init();
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env();
    let pool = pizzeria_api::store::connect(&config.database_url, config.max_connections).await?;
    apply_migrations(&pool).await?;

    let state = AppState::new(Arc::new(SqliteStore::new(pool)));
    let app = app_router(state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
