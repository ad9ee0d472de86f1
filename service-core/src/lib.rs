//! service-core: Shared infrastructure for the docgate services.
pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod shutdown;

pub use axum;
pub use axum_extra;
pub use secrecy;
pub use serde_json;
pub use tokio;
pub use tower;
pub use tower_http;
pub use tracing;
