pub mod gate;
pub mod middleware;

pub use gate::{TokenClaims, TokenGate, Verification};
pub use middleware::{TOKEN_COOKIE, require_token};
