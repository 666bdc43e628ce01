//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every field has a default, so an empty file is a valid config.

pub mod auth;
pub mod logging;
pub mod store;

use serde::{Deserialize, Serialize};

use self::auth::AuthConfig;
use self::logging::LoggingConfig;
use self::store::StoreConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Document store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Credential hashing settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// The file is optional. Environment variables prefixed with
    /// `CHANNELSYNC__` override file values (e.g. `CHANNELSYNC__STORE__PROVIDER`).
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("CHANNELSYNC")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::load("does/not/exist.toml").unwrap();
        assert_eq!(config.store.provider, "memory");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.auth.argon2_iterations, 2);
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let parsed: AppConfig = serde_json::from_str(
            r#"{"store": {"provider": "redis"}, "logging": {"format": "json"}}"#,
        )
        .unwrap();
        assert_eq!(parsed.store.provider, "redis");
        assert_eq!(parsed.store.redis.key_prefix, "channelsync:");
        assert_eq!(parsed.logging.format, "json");
        assert_eq!(parsed.logging.level, "info");
    }
}
