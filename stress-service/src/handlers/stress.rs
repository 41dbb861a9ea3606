use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    extract::ApiJson,
    workload,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StressRequest {
    pub requestid: String,
    pub uuid: String,
    /// Loop iterations. Zero counts as missing; negative values run no iterations.
    pub length: i64,
}

impl StressRequest {
    pub fn check(&self) -> AppResult<()> {
        let missing: Vec<&str> = [
            ("requestid", self.requestid.is_empty()),
            ("uuid", self.uuid.is_empty()),
            ("length", self.length == 0),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StressResponse {
    pub status: &'static str,
    pub duration_ms: u64,
}

// ── POST /v1/stress ──────────────────────────────────────────────────────────

pub async fn run_stress(
    ApiJson(payload): ApiJson<StressRequest>,
) -> AppResult<(StatusCode, Json<StressResponse>)> {
    payload.check()?;

    let length = payload.length;
    let iterations = u64::try_from(length).unwrap_or(0);
    let elapsed = tokio::task::spawn_blocking(move || workload::burn_cpu(iterations))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    info!(
        length,
        duration_ms,
        requestid = %payload.requestid,
        uuid = %payload.uuid,
        "stress complete"
    );

    Ok((
        StatusCode::CREATED,
        Json(StressResponse {
            status: "stressed",
            duration_ms,
        }),
    ))
}
