//! Startup bootstrap: make sure the products table exists and seed it when empty.

use crate::domain::Product;
use crate::storage::{ProductStore, StoreResult};
use tracing::info;

/// What bootstrap found and did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Rows present once the table was ensured, before any seeding.
    pub existing_rows: i64,
    /// Rows inserted by seeding (zero when the table already had data).
    pub seeded_rows: usize,
}

/// Ensures the schema and inserts `seeds` if the table has no rows.
///
/// Runs once per process before the server accepts requests. Pass an empty slice to
/// skip seeding.
pub async fn bootstrap(store: &dyn ProductStore, seeds: &[Product]) -> StoreResult<BootstrapReport> {
    store.ensure_schema().await?;

    let existing_rows = store.count().await?;
    if existing_rows != 0 || seeds.is_empty() {
        info!(existing_rows, "products table ready, seeding skipped");
        return Ok(BootstrapReport {
            existing_rows,
            seeded_rows: 0,
        });
    }

    store.seed(seeds).await?;
    info!(seeded_rows = seeds.len(), "database initialized with sample products");
    Ok(BootstrapReport {
        existing_rows,
        seeded_rows: seeds.len(),
    })
}
