use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::ProductStore;
use crate::error::{AppError, AppResult};
use crate::models::Product;

/// In-memory table with DynamoDB's last-write-wins put semantics.
#[derive(Default)]
pub struct MemoryProductStore {
    items: Mutex<HashMap<String, Product>>,
    calls: AtomicUsize,
    broken: bool,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails like an unreachable endpoint.
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
impl ProductStore for MemoryProductStore {
    async fn put_product(&self, product: &Product) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.broken {
            return Err(AppError::storage("failed to save product", "connection refused"));
        }
        self.items
            .lock()
            .unwrap()
            .insert(product.id.clone(), product.clone());
        Ok(())
    }

    async fn get_product(&self, id: &str) -> AppResult<Product> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.broken {
            return Err(AppError::storage("failed to fetch product", "connection refused"));
        }
        self.items
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("product not found".to_string()))
    }
}
