use anyhow::{Context, Result};
use forum_server::{config::Settings, db::Database, router, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forum_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::new().context("Failed to load settings")?;

    // Schema and seed rows must be in place before the listener is bound
    let db = Database::new(&settings.database.path).context("Failed to create database")?;
    db.initialize()?;
    db.seed()?;
    tracing::info!(path = %settings.database.path, "Database initialized and seeded");

    let app = router(AppState::new(db));

    let addr = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    tracing::info!("Server is running on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
