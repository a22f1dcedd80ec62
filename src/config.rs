//! Configuration system for the Autholas client.
//!
//! Configuration is loaded from multiple sources with the following precedence:
//! 1. Environment variables (highest priority)
//! 2. `autholas.toml` file
//! 3. Default values (lowest priority)
//!
//! # Environment Variables
//!
//! - `AUTHOLAS_API_URL` - Login endpoint
//! - `AUTHOLAS_API_KEY` - Pre-shared API key issued by Autholas (required)
//! - `AUTHOLAS_TIMEOUT_SECS` - Request timeout in seconds
//! - `AUTHOLAS_DEVICE_NAME` - Device label sent with the login request
//! - `AUTHOLAS_LOGGING_ENABLED` - Enable diagnostic logging on stderr
//! - `AUTHOLAS_LOG_LEVEL` - Log level (trace, debug, info, warn, error)

use config::Config;
use reqwest::Url;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::{AutholasError, AutholasResult};

/// Default login endpoint of the hosted Autholas service.
pub const DEFAULT_API_URL: &str = "https://autholas.web.id/api/auth";

/// Default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default device label sent alongside the HWID.
pub const DEFAULT_DEVICE_NAME: &str = "User PC";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AutholasConfig {
    /// Remote API configuration
    pub api: ApiConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Remote API configuration, handed to [`crate::client::AuthClient::new`].
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Login endpoint URL
    pub url: String,
    /// Pre-shared API key
    pub key: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Free-text device label
    pub device_name: String,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            device_name: DEFAULT_DEVICE_NAME.to_string(),
        }
    }
}

// The API key is a credential; keep it out of debug output.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("url", &self.url)
            .field("key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("device_name", &self.device_name)
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Log level: trace, debug, info, warn, error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl AutholasConfig {
    /// Load configuration from `autholas.toml` (optional) and the environment.
    ///
    /// The result is not validated; call [`AutholasConfig::validate`] before use.
    pub fn load() -> AutholasResult<Self> {
        Self::load_from("autholas")
    }

    /// Load configuration using `file_stem` as the optional config file name.
    ///
    /// `file_stem` is resolved the way the `config` crate resolves file names,
    /// so `"autholas"` matches `autholas.toml`, `autholas.json` and so on.
    pub fn load_from(file_stem: &str) -> AutholasResult<Self> {
        let builder = Config::builder()
            // Start with defaults
            .set_default("api.url", DEFAULT_API_URL)
            .map_err(|e| AutholasError::ConfigError(e.to_string()))?
            .set_default("api.key", "")
            .map_err(|e| AutholasError::ConfigError(e.to_string()))?
            .set_default("api.timeout_secs", DEFAULT_TIMEOUT_SECS as i64)
            .map_err(|e| AutholasError::ConfigError(e.to_string()))?
            .set_default("api.device_name", DEFAULT_DEVICE_NAME)
            .map_err(|e| AutholasError::ConfigError(e.to_string()))?
            .set_default("logging.enabled", false)
            .map_err(|e| AutholasError::ConfigError(e.to_string()))?
            .set_default("logging.level", "info")
            .map_err(|e| AutholasError::ConfigError(e.to_string()))?
            .add_source(config::File::with_name(file_stem).required(false))
            // Override with environment variables
            .set_override_option("api.url", env::var("AUTHOLAS_API_URL").ok())
            .map_err(|e| AutholasError::ConfigError(e.to_string()))?
            .set_override_option("api.key", env::var("AUTHOLAS_API_KEY").ok())
            .map_err(|e| AutholasError::ConfigError(e.to_string()))?
            .set_override_option(
                "api.timeout_secs",
                env_parsed::<i64>("AUTHOLAS_TIMEOUT_SECS")?,
            )
            .map_err(|e| AutholasError::ConfigError(e.to_string()))?
            .set_override_option("api.device_name", env::var("AUTHOLAS_DEVICE_NAME").ok())
            .map_err(|e| AutholasError::ConfigError(e.to_string()))?
            .set_override_option(
                "logging.enabled",
                env_parsed::<bool>("AUTHOLAS_LOGGING_ENABLED")?,
            )
            .map_err(|e| AutholasError::ConfigError(e.to_string()))?
            .set_override_option("logging.level", env::var("AUTHOLAS_LOG_LEVEL").ok())
            .map_err(|e| AutholasError::ConfigError(e.to_string()))?;

        let settings = builder
            .build()
            .map_err(|e| AutholasError::ConfigError(format!("failed to build config: {e}")))?;

        settings
            .try_deserialize()
            .map_err(|e| AutholasError::ConfigError(format!("failed to deserialize config: {e}")))
    }

    /// Validate the configuration.
    pub fn validate(&self) -> AutholasResult<()> {
        self.api.validate()?;

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(AutholasError::ConfigError(format!(
                    "logging.level must be one of: trace, debug, info, warn, error. Got '{other}'"
                )));
            }
        }

        Ok(())
    }
}

/// Read and parse an environment variable. Unset is `Ok(None)`; a value
/// that does not parse is a [`AutholasError::ConfigError`].
fn env_parsed<T>(var: &str) -> AutholasResult<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let Ok(raw) = env::var(var) else {
        return Ok(None);
    };
    raw.trim().parse::<T>().map(Some).map_err(|e| {
        AutholasError::ConfigError(format!("{var}='{raw}' could not be parsed: {e}"))
    })
}

impl ApiConfig {
    /// Validate the API section on its own.
    pub fn validate(&self) -> AutholasResult<()> {
        let url = Url::parse(&self.url).map_err(|e| {
            AutholasError::ConfigError(format!("api.url '{}' is not a valid URL: {e}", self.url))
        })?;
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(AutholasError::ConfigError(format!(
                    "api.url must use http or https, got '{other}'"
                )));
            }
        }

        if self.key.trim().is_empty() {
            return Err(AutholasError::ConfigError(
                "api.key is required (set AUTHOLAS_API_KEY)".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(AutholasError::ConfigError(
                "api.timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
