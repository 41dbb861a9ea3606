use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod workload;

pub fn build_router() -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/healthcheck", get(handlers::health))

        // ── Stress ──────────────────────────────────────────────────────────
        .route("/v1/stress", post(handlers::stress::run_stress))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
