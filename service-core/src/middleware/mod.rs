pub mod cors;
pub mod metrics;
pub mod security_headers;
pub mod tracing;

use axum::{Router, middleware::from_fn};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use self::cors::cors_layer;
pub use self::metrics::metrics_middleware;
pub use self::security_headers::security_headers_middleware;
pub use self::tracing::{REQUEST_ID_HEADER, request_id_middleware};

/// Wrap a service router in the layers every service shares.
///
/// Layers run outside-in: CORS, security headers, request id, trace span,
/// metrics, then the route itself.
pub fn with_common_layers(router: Router, cors: CorsLayer) -> Router {
    router
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                ::tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri().path(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(cors)
}
