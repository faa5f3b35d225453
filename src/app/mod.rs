pub mod bootstrap;

pub use bootstrap::{bootstrap, BootstrapReport};
