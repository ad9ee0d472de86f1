use crate::error::AppError;
use config::{Config as Cfg, File};
use secrecy::Secret;
use serde::Deserialize;
use std::env;

/// Environment variable holding the shared token signing secret.
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

/// Origin of the frontend dev server.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP collector endpoint. Spans are only exported when set.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: default_allowed_origin(),
        }
    }
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_allowed_origin() -> String {
    DEFAULT_ALLOWED_ORIGIN.to_string()
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        Self::load_with_port(default_port())
    }

    /// Like [`Config::load`], but with a service-specific port used when
    /// neither the configuration file nor `APP__PORT` sets one.
    pub fn load_with_port(port: u16) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .set_default("port", i64::from(port))?
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Token verification settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: Secret<String>,
}

impl AuthConfig {
    pub fn from_env() -> Result<Self, AppError> {
        match env::var(JWT_SECRET_ENV) {
            Ok(secret) if !secret.trim().is_empty() => Ok(Self {
                jwt_secret: Secret::new(secret),
            }),
            _ => Err(AppError::ConfigError(anyhow::anyhow!(
                "{} is required but not set",
                JWT_SECRET_ENV
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn auth_config_reads_secret() {
        temp_env::with_var(JWT_SECRET_ENV, Some("s3cr3t"), || {
            let auth = AuthConfig::from_env().expect("secret should load");
            assert_eq!(auth.jwt_secret.expose_secret(), "s3cr3t");
        });
    }

    #[test]
    fn auth_config_fails_without_secret() {
        temp_env::with_var_unset(JWT_SECRET_ENV, || {
            let err = AuthConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::ConfigError(_)));
            assert!(err.to_string().contains(JWT_SECRET_ENV));
        });
    }

    #[test]
    fn auth_config_rejects_blank_secret() {
        temp_env::with_var(JWT_SECRET_ENV, Some("   "), || {
            assert!(matches!(
                AuthConfig::from_env(),
                Err(AppError::ConfigError(_))
            ));
        });
    }

    #[test]
    fn auth_config_debug_redacts_secret() {
        let auth = AuthConfig {
            jwt_secret: Secret::new("s3cr3t".to_string()),
        };
        assert!(!format!("{:?}", auth).contains("s3cr3t"));
    }

    #[test]
    fn config_uses_service_port_and_defaults() {
        temp_env::with_vars(
            [
                ("APP__PORT", None::<&str>),
                ("APP__LOG_LEVEL", None),
                ("APP__CORS__ALLOWED_ORIGIN", None),
            ],
            || {
                let config = Config::load_with_port(8001).expect("config should load");
                assert_eq!(config.port, 8001);
                assert_eq!(config.log_level, "info");
                assert_eq!(config.cors.allowed_origin, DEFAULT_ALLOWED_ORIGIN);
            },
        );
    }

    #[test]
    fn config_reads_app_prefixed_environment() {
        temp_env::with_vars(
            [
                ("APP__PORT", Some("9100")),
                ("APP__CORS__ALLOWED_ORIGIN", Some("https://app.example.com")),
            ],
            || {
                let config = Config::load_with_port(8001).expect("config should load");
                assert_eq!(config.port, 9100);
                assert_eq!(config.cors.allowed_origin, "https://app.example.com");
            },
        );
    }
}
