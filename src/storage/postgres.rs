//! PostgreSQL implementation of `ProductStore`.

use super::entity::{self, TABLE_NAME};
use super::{ProductStore, StoreError, StoreResult};
use crate::domain::Product;
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres};
use tracing::debug;

/// Products stored in PostgreSQL, one pooled connection per operation.
#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects a pool of at most `max_connections` to `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Closes every pooled connection. Called once at shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    // The returned connection goes back to the pool when dropped.
    async fn session(&self) -> StoreResult<PoolConnection<Postgres>> {
        Ok(self.pool.acquire().await?)
    }
}

fn map_insert_error(err: sqlx::Error, id: i32) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => StoreError::DuplicateId(id),
        other => StoreError::Database(other),
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn ensure_schema(&self) -> StoreResult<()> {
        let mut conn = self.session().await?;
        sqlx::query(&entity::create_table_sql())
            .execute(&mut *conn)
            .await?;
        sqlx::query(entity::CREATE_NAME_INDEX_SQL)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    async fn count(&self) -> StoreResult<i64> {
        let mut conn = self.session().await?;
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", TABLE_NAME))
            .fetch_one(&mut *conn)
            .await?;
        Ok(count)
    }

    async fn seed(&self, products: &[Product]) -> StoreResult<()> {
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ($1, $2, $3, $4, $5)",
            TABLE_NAME,
            entity::select_columns()
        );
        let mut tx = self.pool.begin().await?;
        for p in products {
            sqlx::query(&sql)
                .bind(p.id)
                .bind(&p.name)
                .bind(&p.description)
                .bind(p.price)
                .bind(p.quantity)
                .execute(&mut *tx)
                .await
                .map_err(|e| map_insert_error(e, p.id))?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.session().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<Product>> {
        let mut conn = self.session().await?;
        let sql = format!("SELECT {} FROM {}", entity::select_columns(), TABLE_NAME);
        let rows = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&mut *conn)
            .await?;
        debug!(count = rows.len(), "listed products");
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> StoreResult<Product> {
        let mut conn = self.session().await?;
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            entity::select_columns(),
            TABLE_NAME
        );
        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, product: &Product) -> StoreResult<Product> {
        let mut conn = self.session().await?;
        let columns = entity::select_columns();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            TABLE_NAME, columns, columns
        );
        let created = sqlx::query_as::<_, Product>(&sql)
            .bind(product.id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.quantity)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| map_insert_error(e, product.id))?;
        debug!(id = created.id, "inserted product");
        Ok(created)
    }

    async fn update(&self, id: i32, product: &Product) -> StoreResult<Product> {
        let mut conn = self.session().await?;
        let sql = format!(
            "UPDATE {} SET name = $2, description = $3, price = $4, quantity = $5 \
             WHERE id = $1 RETURNING {}",
            TABLE_NAME,
            entity::select_columns()
        );
        let updated = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.quantity)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or(StoreError::NotFound(id))?;
        debug!(id, "updated product");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        let mut conn = self.session().await?;
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", TABLE_NAME))
            .bind(id)
            .execute(&mut *conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        debug!(id, "deleted product");
        Ok(())
    }
}
