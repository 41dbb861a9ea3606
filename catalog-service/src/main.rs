use std::sync::Arc;

use catalog_service::{build_router, config::Config, db::DynamoProductStore, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,catalog_service=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!(
        table = %config.table_name,
        index = config.table_index_name.as_deref().unwrap_or("-"),
        "Loading AWS configuration..."
    );
    let shared = aws_config::from_env().load().await;
    let client = aws_sdk_dynamodb::Client::new(&shared);

    let state = AppState {
        products: Arc::new(DynamoProductStore::new(client, config.table_name.clone())),
    };

    let app = build_router(state);

    let addr = config.bind_addr();
    info!("Product service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
