use service_core::config::{self as core_config, AuthConfig};
use service_core::error::AppError;

/// Port used when `APP__PORT` is not set.
pub const DEFAULT_PORT: u16 = 8001;

#[derive(Debug, Clone)]
pub struct ParserConfig {
    pub common: core_config::Config,
    pub auth: AuthConfig,
}

impl ParserConfig {
    /// Load configuration. Fails when `JWT_SECRET` is missing so the
    /// process never starts without a signing secret.
    pub fn load() -> Result<Self, AppError> {
        Ok(ParserConfig {
            common: core_config::Config::load_with_port(DEFAULT_PORT)?,
            auth: AuthConfig::from_env()?,
        })
    }
}
