pub mod config;
pub mod handlers;
pub mod startup;

/// Name reported by `/health` and attached to exported spans.
pub const SERVICE_NAME: &str = "doc-parser-service";
