//! Application configuration management.

use serde::Deserialize;

use crate::jwt::JwtConfig;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// JWT configuration.
    pub jwt: JwtSettings,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Creates a database config for `url` with default pool sizes.
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
        }
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// JWT settings as read from configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Access token expiration in seconds.
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry_secs: u64,
}

fn default_access_token_expiry() -> u64 {
    3600 // 1 hour
}

impl JwtSettings {
    /// Builds the token service config. Expiry is rounded down to whole
    /// minutes, with a floor of one minute.
    #[must_use]
    pub fn to_jwt_config(&self) -> JwtConfig {
        let minutes = i64::try_from(self.access_token_expiry_secs / 60).unwrap_or(i64::MAX);
        JwtConfig {
            secret: self.secret.clone(),
            access_token_expires_minutes: minutes.max(1),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `STOCKROOM__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("STOCKROOM").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_environment_with_defaults() {
        temp_env::with_vars(
            [
                ("STOCKROOM__DATABASE__URL", Some("postgres://localhost/stockroom")),
                ("STOCKROOM__JWT__SECRET", Some("test-secret")),
                ("RUN_MODE", Some("test-nonexistent")),
            ],
            || {
                let config = AppConfig::load().unwrap();

                assert_eq!(config.database.url, "postgres://localhost/stockroom");
                assert_eq!(config.database.max_connections, 10);
                assert_eq!(config.database.min_connections, 1);
                assert_eq!(config.jwt.secret, "test-secret");
                assert_eq!(config.jwt.access_token_expiry_secs, 3600);
                assert_eq!(config.server.host, "0.0.0.0");
                assert_eq!(config.server.port, 8080);
            },
        );
    }

    #[test]
    fn test_load_overrides_port() {
        temp_env::with_vars(
            [
                ("STOCKROOM__DATABASE__URL", Some("postgres://localhost/stockroom")),
                ("STOCKROOM__JWT__SECRET", Some("test-secret")),
                ("STOCKROOM__SERVER__PORT", Some("9090")),
                ("RUN_MODE", Some("test-nonexistent")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.server.port, 9090);
            },
        );
    }

    #[test]
    fn test_load_fails_without_database_url() {
        temp_env::with_vars(
            [
                ("STOCKROOM__DATABASE__URL", None::<&str>),
                ("STOCKROOM__JWT__SECRET", Some("test-secret")),
                ("RUN_MODE", Some("test-nonexistent")),
            ],
            || {
                assert!(AppConfig::load().is_err());
            },
        );
    }

    #[test]
    fn test_jwt_settings_to_config() {
        let settings = JwtSettings {
            secret: "s".to_string(),
            access_token_expiry_secs: 1800,
        };
        assert_eq!(settings.to_jwt_config().access_token_expires_minutes, 30);

        let short = JwtSettings {
            secret: "s".to_string(),
            access_token_expiry_secs: 10,
        };
        assert_eq!(short.to_jwt_config().access_token_expires_minutes, 1);
    }
}
