//! Domain types for the product catalog.

pub mod product;
pub mod seed;

pub use product::{FieldError, Product, ValidationError};
pub use seed::default_seed_products;
