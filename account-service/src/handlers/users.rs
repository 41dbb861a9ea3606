use axum::{extract::State, http::StatusCode, Json};
use tracing::info;
use validator::Validate;

use crate::{
    error::AppResult,
    extract::{ApiJson, ApiQuery},
    models::{CreateUser, User, UserLookup},
    AppState,
};

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUser>,
) -> AppResult<(StatusCode, &'static str)> {
    payload.validate()?;

    let uuid = payload.uuid.clone();
    let user = payload.into_user();
    state.users.insert_user(&user).await?;

    info!(
        requestid = %user.id,
        uuid = %uuid,
        username = %user.username,
        email = %user.email,
        "User created"
    );

    Ok((StatusCode::CREATED, "User created successfully"))
}

// ── Get by email ──────────────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    ApiQuery(lookup): ApiQuery<UserLookup>,
) -> AppResult<(StatusCode, Json<User>)> {
    lookup.check()?;

    let user = state.users.fetch_user_by_email(&lookup.email).await?;

    info!(
        requestid = %lookup.requestid,
        uuid = %lookup.uuid,
        id = %user.id,
        "Fetched user"
    );

    Ok((StatusCode::OK, Json(user)))
}
