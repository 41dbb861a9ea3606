use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// A row of the `user` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Primary key. Taken verbatim from the create request's `requestid`.
    pub id: String,
    pub username: String,
    pub email: String,
    pub status_message: String,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of `POST /v1/user`. Absent fields deserialize as empty and are
/// reported by validation rather than by the JSON decoder.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "requestid is required"))]
    pub requestid: String,
    #[validate(length(min = 1, message = "uuid is required"))]
    pub uuid: String,
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "status_message is required"))]
    pub status_message: String,
}

impl CreateUser {
    pub fn into_user(self) -> User {
        User {
            id: self.requestid,
            username: self.username,
            email: self.email,
            status_message: self.status_message,
        }
    }
}

// ── Query parameters ──────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserLookup {
    pub requestid: String,
    pub uuid: String,
    pub email: String,
}

impl UserLookup {
    pub fn check(&self) -> AppResult<()> {
        if self.requestid.is_empty() || self.uuid.is_empty() || self.email.is_empty() {
            return Err(AppError::Validation(
                "Missing query parameters: requestid, uuid, email required".to_string(),
            ));
        }
        Ok(())
    }
}
