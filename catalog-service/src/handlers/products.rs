use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use tracing::info;

use crate::{
    error::AppResult,
    extract::{ApiJson, ApiQuery},
    models::{CreateProduct, Product, ProductLookup},
    AppState,
};

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateProduct>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    payload.check()?;

    let requestid = payload.requestid.clone();
    let uuid = payload.uuid.clone();
    let product = payload.into_product();
    state.products.put_product(&product).await?;

    info!(
        id = %product.id,
        price = product.price,
        requestid = %requestid,
        uuid = %uuid,
        "Created product"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "product created successfully" })),
    ))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    ApiQuery(lookup): ApiQuery<ProductLookup>,
) -> AppResult<(StatusCode, Json<Product>)> {
    lookup.check()?;

    let product = state.products.get_product(&lookup.id).await?;

    info!(
        id = %product.id,
        requestid = %lookup.requestid,
        uuid = %lookup.uuid,
        "Fetched product"
    );

    Ok((StatusCode::OK, Json(product)))
}
