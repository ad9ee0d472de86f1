//! Signed-token verification.
//!
//! The gate checks an HS256 token against the process secret and reports
//! one of four outcomes. It performs no I/O and holds no mutable state, so
//! a single instance is shared by every request.

use jsonwebtoken::{
    Algorithm, DecodingKey, Validation, decode, errors::ErrorKind, get_current_timestamp,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Claims read from a verified token. Anything beyond `exp` is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Result of checking a single credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Valid(TokenClaims),
    Missing,
    Expired,
    Invalid,
}

impl Verification {
    /// Outcome label used in logs and metrics. Never includes token contents.
    pub fn outcome(&self) -> &'static str {
        match self {
            Verification::Valid(_) => "valid",
            Verification::Missing => "missing",
            Verification::Expired => "expired",
            Verification::Invalid => "invalid",
        }
    }

    pub fn into_result(self) -> Result<TokenClaims, AppError> {
        match self {
            Verification::Valid(claims) => Ok(claims),
            Verification::Missing => Err(AppError::MissingCredential),
            Verification::Expired => Err(AppError::ExpiredCredential),
            Verification::Invalid => Err(AppError::InvalidCredential),
        }
    }
}

#[derive(Clone)]
pub struct TokenGate {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenGate {
    pub fn new(secret: &Secret<String>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
        }
    }

    /// Check a raw cookie value. An empty value counts as no credential.
    pub fn verify(&self, token: Option<&str>) -> Verification {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return Verification::Missing;
        };

        match decode::<TokenClaims>(token, &self.decoding_key, &self.validation) {
            // The decoder only rejects `exp < now`; a token is already dead at `exp`.
            Ok(data) if data.claims.exp <= get_current_timestamp() => Verification::Expired,
            Ok(data) => Verification::Valid(data.claims),
            Err(err) => match err.kind() {
                ErrorKind::ExpiredSignature => Verification::Expired,
                _ => Verification::Invalid,
            },
        }
    }
}

impl std::fmt::Debug for TokenGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenGate")
            .field("algorithms", &self.validation.algorithms)
            .finish_non_exhaustive()
    }
}
