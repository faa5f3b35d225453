//! Storage access for products.
//!
//! `ProductStore` is the seam between the HTTP layer and the relational engine.
//! Implementations acquire a scoped connection per operation and release it when the
//! operation finishes, whatever the outcome.

use crate::domain::Product;
use async_trait::async_trait;
use thiserror::Error;

pub mod entity;
#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgProductStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Product not found")]
    NotFound(i32),

    #[error("Product with id {0} already exists")]
    DuplicateId(i32),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Creates the products table and its indexes if absent. Idempotent.
    async fn ensure_schema(&self) -> StoreResult<()>;

    /// Number of rows currently stored.
    async fn count(&self) -> StoreResult<i64>;

    /// Inserts every record in one transaction.
    async fn seed(&self, products: &[Product]) -> StoreResult<()>;

    /// Cheap round-trip used by the health check.
    async fn ping(&self) -> StoreResult<()>;

    /// Every stored product, in storage-native order.
    async fn list_all(&self) -> StoreResult<Vec<Product>>;

    async fn get_by_id(&self, id: i32) -> StoreResult<Product>;

    /// Inserts `product` using its own id. A taken id yields `DuplicateId`.
    async fn create(&self, product: &Product) -> StoreResult<Product>;

    /// Overwrites name, description, price and quantity of row `id`.
    /// `product.id` is ignored; the stored id never changes.
    async fn update(&self, id: i32, product: &Product) -> StoreResult<Product>;

    async fn delete(&self, id: i32) -> StoreResult<()>;
}
