use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use doc_parser_service::startup::build_router;
use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::Secret;
use service_core::auth::TokenGate;
use service_core::middleware::cors_layer;
use std::sync::Arc;
use tower::util::ServiceExt;

const SECRET: &str = "s3cr3t";

fn app() -> Router {
    let gate = Arc::new(TokenGate::new(&Secret::new(SECRET.to_string())));
    build_router(gate, cors_layer("http://localhost:5173").unwrap())
}

fn token(secret: &str, offset: Duration) -> String {
    let exp = (Utc::now() + offset).timestamp();
    encode(
        &Header::default(),
        &serde_json::json!({ "exp": exp }),
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

async fn call(app: Router, uri: &str, token: Option<String>) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header("cookie", format!("token={}", token));
    }

    let response = app
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn parse_route_honours_token_gate() {
    let cases = [
        (
            Some(token(SECRET, Duration::hours(1))),
            StatusCode::OK,
            "message",
            "Parsing service is alive!",
        ),
        (
            Some(token("wrong", Duration::hours(1))),
            StatusCode::UNAUTHORIZED,
            "error",
            "Invalid token",
        ),
        (
            Some(token(SECRET, -Duration::hours(1))),
            StatusCode::UNAUTHORIZED,
            "error",
            "Token expired",
        ),
        (None, StatusCode::UNAUTHORIZED, "error", "No token provided"),
    ];

    for (token, expected_status, field, expected_message) in cases {
        let (status, body) = call(app(), "/api/parse", token).await;
        assert_eq!(status, expected_status);
        assert_eq!(body[field], expected_message);
    }
}

#[tokio::test]
async fn gen_route_is_not_served_here() {
    let response = app()
        .oneshot(Request::builder().uri("/api/gen").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_check_reports_parser_service() {
    let (status, body) = call(app(), "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "doc-parser-service");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
