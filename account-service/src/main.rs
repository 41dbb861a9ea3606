use std::sync::Arc;

use account_service::{build_router, config::Config, db::MySqlUserStore, AppState};
use anyhow::Context;
use sqlx::mysql::MySqlPoolOptions;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,account_service=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!(
        host = %config.mysql_host,
        port = config.mysql_port,
        database = %config.mysql_dbname,
        "Connecting to MySQL..."
    );
    let pool = MySqlPoolOptions::new()
        .connect_with(config.connect_options())
        .await
        .context("MySQL connection failed")?;
    info!("Database connection pool established.");

    if config.run_migrations {
        info!("Running migrations...");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("running migrations")?;
        info!("Migrations complete.");
    }

    let state = AppState {
        users: Arc::new(MySqlUserStore::new(pool)),
    };

    let app = build_router(state);

    let addr = config.bind_addr();
    info!("User service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
