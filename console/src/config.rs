//! # Console Configuration
//!
//! Configuration loaded from environment variables (after `.env` is read by
//! `dotenvy` in `main`). Everything is validated on startup so the console
//! fails fast when misconfigured.
//!
//! | Variable | Meaning |
//! |---|---|
//! | `ADMIN_CONSOLE_MODE` | `development` or `production`; defaults to the build profile |
//! | `TOKENIZATION_API_DEV_URL` | API base URL, required in development |
//! | `TOKENIZATION_API_PROD_URL` | API base URL, required in production |
//! | `ADMIN_SESSION_TOKEN` | Optional bearer credential |
//! | `ADMIN_API_TIMEOUT_SECS` | Request timeout, 1..=120, default 10 |
//! | `HASHSCAN_NETWORK` | Explorer network for transaction links, default `testnet` |

use crate::services::api::ApiConfig;
use lib_utils::envs;
use reqwest::header::HeaderValue;
use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

pub const ENV_MODE: &str = "ADMIN_CONSOLE_MODE";
pub const ENV_DEV_URL: &str = "TOKENIZATION_API_DEV_URL";
pub const ENV_PROD_URL: &str = "TOKENIZATION_API_PROD_URL";
pub const ENV_SESSION_TOKEN: &str = "ADMIN_SESSION_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "ADMIN_API_TIMEOUT_SECS";
pub const ENV_EXPLORER_NETWORK: &str = "HASHSCAN_NETWORK";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MAX_TIMEOUT_SECS: u64 = 120;
const DEFAULT_EXPLORER_NETWORK: &str = "testnet";

/// Which API deployment the console talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// Mode implied by the build profile: debug builds talk to development.
    pub fn from_build() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(BuildMode::Development),
            "production" | "prod" => Ok(BuildMode::Production),
            other => Err(ConfigError::InvalidMode(other.to_string())),
        }
    }

    /// Environment variable holding the base URL for this mode.
    pub fn url_variable(&self) -> &'static str {
        match self {
            BuildMode::Development => ENV_DEV_URL,
            BuildMode::Production => ENV_PROD_URL,
        }
    }
}

/// Configuration errors. All of them abort startup.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error(transparent)]
    Env(#[from] envs::Error),

    #[error("ADMIN_CONSOLE_MODE must be 'development' or 'production', got '{0}'")]
    InvalidMode(String),

    #[error("{name} must be an http(s) URL: {reason}")]
    InvalidUrl { name: &'static str, reason: String },

    #[error("ADMIN_API_TIMEOUT_SECS must be between 1 and 120, got {0}")]
    TimeoutOutOfRange(u64),

    #[error("ADMIN_SESSION_TOKEN is not a valid header value: {0}")]
    InvalidSessionToken(String),
}

/// Console configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: BuildMode,
    pub api: ApiConfig,
    /// Hashscan network used for transaction explorer links.
    pub explorer_network: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(envs::get_env_opt)
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// `lookup` returns `None` for unset or blank variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mode = match lookup(ENV_MODE) {
            Some(raw) => BuildMode::parse(&raw)?,
            None => BuildMode::from_build(),
        };

        let url_variable = mode.url_variable();
        let raw_url = lookup(url_variable).ok_or(envs::Error::MissingEnv(url_variable))?;
        let base_url = parse_base_url(url_variable, &raw_url)?;

        let timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => envs::parse_value::<u64>(ENV_TIMEOUT_SECS, &raw)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self {
            mode,
            api: ApiConfig {
                base_url,
                session_token: lookup(ENV_SESSION_TOKEN),
                timeout: Duration::from_secs(timeout_secs),
            },
            explorer_network: lookup(ENV_EXPLORER_NETWORK)
                .unwrap_or_else(|| DEFAULT_EXPLORER_NETWORK.to_string()),
        };
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values against the console's limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let secs = self.api.timeout.as_secs();
        if secs == 0 || secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::TimeoutOutOfRange(secs));
        }
        if let Some(token) = &self.api.session_token {
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ConfigError::InvalidSessionToken(e.to_string()))?;
        }
        Ok(())
    }
}

fn parse_base_url(name: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl {
        name,
        reason: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl {
            name,
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url)
}
