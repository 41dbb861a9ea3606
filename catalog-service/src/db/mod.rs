use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_dynamodb::{error::DisplayErrorContext, types::AttributeValue, Client};
use tokio::time::timeout;

use crate::error::{AppError, AppResult};
use crate::models::Product;

pub mod item;

#[cfg(test)]
pub mod memory;

/// Upper bound on a single DynamoDB call.
pub const OPERATION_TIMEOUT: Duration = Duration::from_secs(2);

/// Storage for catalog products.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Writes the product, replacing any existing item with the same id.
    async fn put_product(&self, product: &Product) -> AppResult<()>;

    /// Fails with [`AppError::NotFound`] when no item has this id.
    async fn get_product(&self, id: &str) -> AppResult<Product>;
}

pub struct DynamoProductStore {
    client: Client,
    table_name: String,
}

impl DynamoProductStore {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
impl ProductStore for DynamoProductStore {
    async fn put_product(&self, product: &Product) -> AppResult<()> {
        let request = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item::to_item(product)))
            .send();

        bounded("failed to save product", request).await?;
        Ok(())
    }

    async fn get_product(&self, id: &str) -> AppResult<Product> {
        let request = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send();

        let output = bounded("failed to fetch product", request).await?;
        let Some(found) = output.item else {
            return Err(AppError::NotFound("product not found".to_string()));
        };

        item::from_item(&found).map_err(|e| AppError::storage("failed to decode product", e))
    }
}

/// Runs one SDK call under [`OPERATION_TIMEOUT`]; both failure and timeout become `Storage`.
async fn bounded<T, E>(
    message: &'static str,
    op: impl Future<Output = Result<T, E>>,
) -> AppResult<T>
where
    E: std::error::Error + 'static,
{
    match timeout(OPERATION_TIMEOUT, op).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(AppError::storage(message, DisplayErrorContext(e))),
        Err(elapsed) => Err(AppError::storage(message, elapsed)),
    }
}
