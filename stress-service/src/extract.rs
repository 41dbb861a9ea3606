use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json`, but a rejection answers 400 with an `{"error": ...}` body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
