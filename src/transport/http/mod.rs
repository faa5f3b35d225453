pub mod error;
pub mod router;
pub mod types;
pub mod handlers {
    pub mod health;
    pub mod products;
}

pub use error::HttpError;
pub use router::{build_app, build_cors, create_router, ApiDoc};
pub use types::AppState;
