#![allow(dead_code)]

use axum::{body::Body, http::Request, response::Response, Router};
use chrono::{Duration, Utc};
use doc_gen_service::config::GenConfig;
use doc_gen_service::startup::{build_router, Application};
use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::Secret;
use service_core::auth::{TokenGate, TOKEN_COOKIE};
use service_core::config::{AuthConfig, Config as CoreConfig, CorsConfig};
use service_core::middleware::cors_layer;
use std::sync::Arc;

pub const TEST_SECRET: &str = "s3cr3t";
pub const TEST_ORIGIN: &str = "http://localhost:5173";

/// HS256 token with `exp` set `offset` from now.
pub fn token_signed_with(secret: &str, offset: Duration) -> String {
    let exp = (Utc::now() + offset).timestamp();
    encode(
        &Header::default(),
        &serde_json::json!({ "exp": exp, "username": "tester" }),
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign test token")
}

pub fn valid_token() -> String {
    token_signed_with(TEST_SECRET, Duration::hours(1))
}

pub fn test_router() -> Router {
    let gate = Arc::new(TokenGate::new(&Secret::new(TEST_SECRET.to_string())));
    build_router(gate, cors_layer(TEST_ORIGIN).expect("Invalid test origin"))
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header("cookie", format!("{}={}", TOKEN_COOKIE, token));
    }
    builder.body(Body::empty()).expect("Failed to build request")
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Failed to parse JSON")
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let config = GenConfig {
            common: CoreConfig {
                port: 0, // Random port for testing
                log_level: "error".to_string(),
                otlp_endpoint: None,
                cors: CorsConfig {
                    allowed_origin: TEST_ORIGIN.to_string(),
                },
            },
            auth: AuthConfig {
                jwt_secret: Secret::new(TEST_SECRET.to_string()),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}
