use tracing_subscriber::EnvFilter;

use thesis_api::config;
use thesis_api::database::DatabaseManager;
use thesis_api::routes::app;
use thesis_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("thesis_api=debug,tower_http=info,sqlx=warn")),
        )
        .init();

    let config = config::config();
    tracing::info!("Starting Thesis API in {:?} mode", config.environment);

    if config.security.jwt_secret.is_empty() {
        anyhow::bail!("JWT_SECRET must be set outside development");
    }
    if thesis_api::is_production!() && !config.security.cookie_secure {
        tracing::warn!("Production is running with insecure cookies");
    }

    let pool = DatabaseManager::connect(&config.database).await?;
    DatabaseManager::migrate(&pool).await?;

    let app = app(AppState::from_pool(pool));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", bind_addr, e))?;

    tracing::info!("Thesis API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
