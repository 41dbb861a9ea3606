use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;

use crate::db::UserStore;

/// Shared application state. Cloned per request, the store sits behind an Arc.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/healthcheck", get(handlers::health))

        // ── Users ───────────────────────────────────────────────────────────
        .route(
            "/v1/user",
            get(handlers::users::get_user).post(handlers::users::create_user),
        )

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
