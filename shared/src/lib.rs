//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the admin console and the remote
//! tokenization API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::tokenization`]**: Stocks, transactions, platform statistics and request inputs
//!   - **[`dto::error`]**: Error body returned by the API on failure
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_hash`]**: Shorten chain transaction hashes for display
//!
//! ## Wire Format
//!
//! The tokenization API speaks **camelCase** JSON:
//! - Rust fields are snake_case and renamed with `#[serde(rename_all = "camelCase")]`
//! - Optional request fields are omitted when `None`
//! - Enums serialize as SCREAMING_SNAKE_CASE strings (`ACTIVE`, `TRANSFER_TO_USER`)
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::tokenization::{MintStockInput, TransactionFilter, TransactionType};
//!
//! let input = MintStockInput {
//!     symbol: "AAPL".to_string(),
//!     amount: 100,
//!     custody_verification_url: None,
//!     notes: None,
//! };
//! let json = serde_json::to_value(&input).unwrap();
//! assert_eq!(json["symbol"], "AAPL");
//! assert!(json.get("notes").is_none());
//!
//! let filter = TransactionFilter {
//!     tx_type: Some(TransactionType::Mint),
//!     ..Default::default()
//! };
//! assert!(filter.symbol.is_none());
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
