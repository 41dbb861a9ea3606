use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::error::{AppError, AppResult};
use crate::models::User;

#[cfg(test)]
pub mod memory;

/// Storage for user rows.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert_user(&self, user: &User) -> AppResult<()>;

    /// Fails with [`AppError::NotFound`] when no row has this email.
    async fn fetch_user_by_email(&self, email: &str) -> AppResult<User>;
}

pub struct MySqlUserStore {
    pool: MySqlPool,
}

impl MySqlUserStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for MySqlUserStore {
    async fn insert_user(&self, user: &User) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO `user` (id, username, email, status_message) VALUES (?, ?, ?, ?)",
        )
        .bind(&user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.status_message)
        .execute(&self.pool)
        .await
        .map_err(AppError::Insert)?;

        Ok(())
    }

    async fn fetch_user_by_email(&self, email: &str) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, email, status_message FROM `user` WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
