//! # Tokenization API Client Module
//!
//! HTTP client for the remote tokenization API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs           - Module exports
//! ├── client.rs        - ApiClient: base URL, credentials, error normalization
//! └── tokenization.rs  - Admin endpoints (stocks, mint, burn, transactions, stats)
//! ```

pub mod client;
pub mod tokenization;

pub use client::{ApiClient, ApiConfig};
pub use tokenization::BASE_PATH;
