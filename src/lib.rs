pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{bootstrap, BootstrapReport};
pub use domain::{default_seed_products, Product, ValidationError};
pub use infra::Config;
pub use storage::{PgProductStore, ProductStore, StoreError};
