use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;

use crate::db::ProductStore;

/// Shared application state. Cloned per request, the store sits behind an Arc.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductStore>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/healthcheck", get(handlers::health))

        // ── Products ────────────────────────────────────────────────────────
        .route(
            "/v1/product",
            get(handlers::products::get_product).post(handlers::products::create_product),
        )

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
