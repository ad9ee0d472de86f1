use crate::config::ParserConfig;
use crate::handlers;
use axum::{middleware::from_fn_with_state, routing::get, Router};
use service_core::auth::{require_token, TokenGate};
use service_core::error::AppError;
use service_core::middleware::{cors_layer, with_common_layers};
use service_core::observability::metrics_endpoint;
use service_core::shutdown::shutdown_signal;
use service_core::tower_http::cors::CorsLayer;
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Route table: `/api/parse` behind the token gate, health and metrics open.
pub fn build_router(gate: Arc<TokenGate>, cors: CorsLayer) -> Router {
    let app = Router::new()
        .route(
            "/api/parse",
            get(handlers::parse).layer(from_fn_with_state(gate, require_token)),
        )
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(metrics_endpoint));

    with_common_layers(app, cors)
}

pub struct Application {
    port: u16,
    server: Pin<Box<dyn Future<Output = std::io::Result<()>> + Send>>,
}

impl Application {
    pub async fn build(config: ParserConfig) -> Result<Self, AppError> {
        let gate = Arc::new(TokenGate::new(&config.auth.jwt_secret));
        let cors = cors_layer(&config.common.cors.allowed_origin)?;

        let app = build_router(gate, cors);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            allowed_origin = %config.common.cors.allowed_origin,
            "Listening on {}",
            port
        );

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::pin(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
