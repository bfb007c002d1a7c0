//! # Common Error Types
//!
//! Consolidated error handling for the admin console.
//!
//! ## Error Categories
//!
//! - [`ApiError`]: a normalized failure of an HTTP call to the tokenization API.
//!   Network failures (no response received) carry `status == 0`; server errors
//!   carry the HTTP status plus whatever message, code and detail the body held.
//! - [`AppError`]: application-wide error covering API, validation, configuration
//!   and state failures.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use admin_console::core::error::{ApiError, AppError};
//!
//! let err = ApiError::network("connection refused");
//! assert!(err.is_network());
//! assert_eq!(err.status, 0);
//!
//! let app_err: AppError = err.into();
//! assert_eq!(app_err.to_string(), "API error: connection refused");
//! ```

use shared::ErrorBody;
use thiserror::Error;

/// Message used when neither the transport nor the server said anything useful.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Normalized error for every call made through the HTTP client wrapper.
///
/// Cloneable so one failed fetch can be handed to every caller that joined it.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    /// Human readable message, shown in notifications.
    pub message: String,
    /// Optional machine code sent by the server.
    pub code: Option<String>,
    /// HTTP status, or `0` when no response was received.
    pub status: u16,
    /// Optional detail payload sent by the server.
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// A failure where no response was received (connection refused, timeout, DNS).
    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            message: if message.trim().is_empty() {
                UNKNOWN_ERROR_MESSAGE.to_string()
            } else {
                message
            },
            code: None,
            status: 0,
            details: None,
        }
    }

    /// A response with a non-success status. The body is parsed leniently.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let parsed = ErrorBody::from_slice(body);

        Self {
            message: parsed
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
            code: parsed.code,
            status,
            details: parsed.detail,
        }
    }

    /// A success status whose body could not be decoded into the expected type.
    pub fn invalid_response(status: u16, reason: impl std::fmt::Display) -> Self {
        Self {
            message: format!("Failed to parse response: {}", reason),
            code: Some("INVALID_RESPONSE".to_string()),
            status,
            details: None,
        }
    }

    /// True when no response was received.
    pub fn is_network(&self) -> bool {
        self.status == 0
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ApiError::from_response(status.as_u16(), &[]),
            None => ApiError::network(err.to_string()),
        }
    }
}

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Tokenization API communication error.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Startup configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Application state error (runtime missing, channel closed).
    #[error("State error: {0}")]
    State(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
