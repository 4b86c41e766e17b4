use std::env;
use std::path::PathBuf;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// File name of the signing key inside `src_path`.
pub const PRIVATE_KEY_FILE: &str = "key.pem";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base directory of the signing key (`SRC_PATH`)
    pub src_path: PathBuf,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub password: PasswordConfig,
    #[serde(default)]
    pub token: TokenConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Argon2id work factor applied to new password hashes.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PasswordConfig {
    pub memory_cost_kib: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_cost_kib: 19 * 1024,
            time_cost: 2,
            parallelism: 1,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct TokenConfig {
    /// Tokens carry no `exp` claim unless this is set
    pub expiration_hours: Option<u32>,
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_secs() -> u64 {
    5
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SRC_PATH, DATABASE__URL, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Unprefixed so that SRC_PATH maps onto src_path
            .add_source(Environment::default().separator("__"))
            .build()?;

        configuration.try_deserialize()
    }

    /// Location of the PEM-encoded signing key.
    pub fn private_key_path(&self) -> PathBuf {
        self.src_path.join(PRIVATE_KEY_FILE)
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn from_toml(toml: &str) -> Result<Config, ConfigError> {
        ConfigBuilder::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_defaults_fill_optional_sections() {
        let config = from_toml(
            r#"
            src_path = "/srv/app"

            [database]
            url = "postgresql://localhost/authentication"

            [server]
            http_port = 8080
            "#,
        )
        .expect("Failed to parse configuration");

        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.database.acquire_timeout_secs, 5);
        assert_eq!(config.server.request_timeout_secs, 10);
        assert_eq!(config.password, PasswordConfig::default());
        assert_eq!(config.token.expiration_hours, None);
    }

    #[test]
    fn test_private_key_path() {
        let config = from_toml(
            r#"
            src_path = "/srv/app"

            [database]
            url = "postgresql://localhost/authentication"

            [server]
            http_port = 8080

            [token]
            expiration_hours = 12
            "#,
        )
        .expect("Failed to parse configuration");

        assert_eq!(config.private_key_path(), PathBuf::from("/srv/app/key.pem"));
        assert_eq!(config.token.expiration_hours, Some(12));
    }

    #[test]
    fn test_negative_expiration_is_an_error() {
        let result = from_toml(
            r#"
            src_path = "/srv/app"

            [database]
            url = "postgresql://localhost/authentication"

            [server]
            http_port = 8080

            [token]
            expiration_hours = -3
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_src_path_is_an_error() {
        let result = from_toml(
            r#"
            [database]
            url = "postgresql://localhost/authentication"

            [server]
            http_port = 8080
            "#,
        );

        assert!(result.is_err());
    }
}
