//! In-memory `ProductStore` used by unit tests.

use super::{ProductStore, StoreError, StoreResult};
use crate::domain::Product;
use async_trait::async_trait;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct MemoryProductStore {
    rows: Mutex<Vec<Product>>,
    schema_created: Mutex<u32>,
    unavailable: bool,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Product>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Self::default()
        }
    }

    /// A store whose every operation fails like a lost connection.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub async fn schema_created_count(&self) -> u32 {
        *self.schema_created.lock().await
    }

    fn check(&self) -> StoreResult<()> {
        if self.unavailable {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn ensure_schema(&self) -> StoreResult<()> {
        self.check()?;
        *self.schema_created.lock().await += 1;
        Ok(())
    }

    async fn count(&self) -> StoreResult<i64> {
        self.check()?;
        Ok(self.rows.lock().await.len() as i64)
    }

    async fn seed(&self, products: &[Product]) -> StoreResult<()> {
        self.check()?;
        let mut rows = self.rows.lock().await;
        for p in products {
            if rows.iter().any(|r| r.id == p.id) {
                return Err(StoreError::DuplicateId(p.id));
            }
        }
        rows.extend(products.iter().cloned());
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.check()
    }

    async fn list_all(&self) -> StoreResult<Vec<Product>> {
        self.check()?;
        Ok(self.rows.lock().await.clone())
    }

    async fn get_by_id(&self, id: i32) -> StoreResult<Product> {
        self.check()?;
        self.rows
            .lock()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, product: &Product) -> StoreResult<Product> {
        self.check()?;
        let mut rows = self.rows.lock().await;
        if rows.iter().any(|p| p.id == product.id) {
            return Err(StoreError::DuplicateId(product.id));
        }
        rows.push(product.clone());
        Ok(product.clone())
    }

    async fn update(&self, id: i32, product: &Product) -> StoreResult<Product> {
        self.check()?;
        let mut rows = self.rows.lock().await;
        let row = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))?;
        row.name = product.name.clone();
        row.description = product.description.clone();
        row.price = product.price;
        row.quantity = product.quantity;
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        self.check()?;
        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
