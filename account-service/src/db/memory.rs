use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::UserStore;
use crate::error::{AppError, AppResult};
use crate::models::User;

/// In-memory stand-in for the `user` table with the same key constraints:
/// `id` is the primary key and `email` is unique.
#[derive(Default)]
pub struct MemoryUserStore {
    rows: Mutex<HashMap<String, User>>,
    calls: AtomicUsize,
    broken: bool,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails like a dropped connection.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert_user(&self, user: &User) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.broken {
            return Err(AppError::Insert(sqlx::Error::PoolClosed));
        }

        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&user.id) || rows.values().any(|u| u.email == user.email) {
            return Err(AppError::Insert(sqlx::Error::Protocol(format!(
                "Duplicate entry '{}'",
                user.id
            ))));
        }
        rows.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn fetch_user_by_email(&self, email: &str) -> AppResult<User> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.broken {
            return Err(AppError::Database(sqlx::Error::PoolClosed));
        }

        self.rows
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
