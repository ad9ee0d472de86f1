use axum::http::HeaderValue;
use axum::http::request::Parts;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::error::AppError;

/// CORS policy admitting a single origin with credentials.
///
/// Requests from any other origin get no `access-control-allow-origin`
/// header at all. Wildcards cannot be combined with credentials, so
/// methods and headers are mirrored from the preflight request instead.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, AppError> {
    let origin = allowed_origin.trim();
    if origin.is_empty() || origin == "*" {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "CORS origin must be a single explicit origin, got '{}'",
            allowed_origin
        )));
    }

    let allowed = origin.parse::<HeaderValue>().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!(
            "Invalid CORS origin '{}': {}",
            allowed_origin,
            e
        ))
    })?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| *origin == allowed,
        ))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
