use std::env;

use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Overrides the database named in `url` when set.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_sign_in_ttl")]
    pub sign_in_ttl_seconds: i64,
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_seconds: i64,
    #[serde(default = "default_refresh_window")]
    pub refresh_window_seconds: i64,
}

/// Redis list cache. Caching is disabled when `url` is unset.
#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_cache_ttl")]
    pub ttl_seconds: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AuthConfig {
    /// Hash new passwords with unsalted SHA-256 instead of Argon2id.
    #[serde(default)]
    pub legacy_password_digest: bool,
}

/// Token lifetimes applied by the auth service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPolicy {
    pub sign_in_ttl: Duration,
    pub refresh_ttl: Duration,
    pub refresh_window: Duration,
}

impl Default for TokenPolicy {
    fn default() -> Self {
        Self {
            sign_in_ttl: Duration::seconds(default_sign_in_ttl()),
            refresh_ttl: Duration::seconds(default_refresh_ttl()),
            refresh_window: Duration::seconds(default_refresh_window()),
        }
    }
}

impl From<&JwtConfig> for TokenPolicy {
    fn from(config: &JwtConfig) -> Self {
        Self {
            sign_in_ttl: Duration::seconds(config.sign_in_ttl_seconds),
            refresh_ttl: Duration::seconds(config.refresh_ttl_seconds),
            refresh_window: Duration::seconds(config.refresh_window_seconds),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: None,
            ttl_seconds: default_cache_ttl(),
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_sign_in_ttl() -> i64 {
    10 * 60
}

fn default_refresh_ttl() -> i64 {
    5 * 60
}

fn default_refresh_window() -> i64 {
    30
}

fn default_cache_ttl() -> u64 {
    60
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, DATABASE__URL, CACHE__URL, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// The loaded configuration is validated before it is returned.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject configurations the service must not start with.
    ///
    /// # Errors
    /// * `Message` - empty signing secret, or a non-positive token lifetime
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "jwt.secret must be set to a non-empty value".to_string(),
            ));
        }

        for (name, value) in [
            ("jwt.sign_in_ttl_seconds", self.jwt.sign_in_ttl_seconds),
            ("jwt.refresh_ttl_seconds", self.jwt.refresh_ttl_seconds),
            ("jwt.refresh_window_seconds", self.jwt.refresh_window_seconds),
        ] {
            if value <= 0 {
                return Err(ConfigError::Message(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    pub fn token_policy(&self) -> TokenPolicy {
        TokenPolicy::from(&self.jwt)
    }
}
