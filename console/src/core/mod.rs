//! # Core Abstractions
//!
//! Core traits and error types used throughout the console.
//!
//! - **[`error`]**: Error types (`ApiError`, `AppError`, `Result<T>`)
//! - **[`service`]**: The `TokenizationService` trait implemented by the HTTP
//!   client and by test doubles
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use admin_console::core::service::TokenizationService;
//! use admin_console::services::api::{ApiClient, ApiConfig};
//!
//! # fn build(config: ApiConfig) -> Result<(), admin_console::core::ApiError> {
//! let api: Arc<dyn TokenizationService> = Arc::new(ApiClient::new(&config)?);
//! # Ok(()) }
//! ```

pub mod error;
pub mod service;

pub use error::{ApiError, AppError, Result};
pub use service::TokenizationService;
