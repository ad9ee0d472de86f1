use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use metrics::counter;
use std::sync::Arc;

use super::gate::TokenGate;
use crate::error::AppError;

/// Cookie carrying the signed token.
pub const TOKEN_COOKIE: &str = "token";

/// Middleware that admits a request only when its `token` cookie verifies.
///
/// On success the decoded [`TokenClaims`](super::TokenClaims) are stored in
/// request extensions. Every decision is logged and counted by outcome.
pub async fn require_token(
    State(gate): State<Arc<TokenGate>>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let verification = gate.verify(jar.get(TOKEN_COOKIE).map(|cookie| cookie.value()));
    let outcome = verification.outcome();

    counter!("token_gate_decisions_total", "outcome" => outcome).increment(1);

    let claims = verification.into_result().inspect_err(|_| {
        tracing::warn!(
            outcome,
            method = %req.method(),
            path = %req.uri().path(),
            "Request rejected by token gate"
        );
    })?;

    tracing::debug!(outcome, path = %req.uri().path(), "Request admitted by token gate");

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
