//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the tokenization API.
//!
//! ## Module Organization
//!
//! - [`tokenization`] - Stock, transaction and statistics records plus mutation inputs
//! - [`error`] - Error body sent by the API with non-success status codes
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/v2/tokenization/admin/stocks/mint
//! Content-Type: application/json
//!
//! {
//!   "symbol": "AAPL",
//!   "amount": 100,
//!   "notes": "Q3 custody top-up"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "_id": "66f1c0...",
//!   "stockId": "66f1b9...",
//!   "symbol": "AAPL",
//!   "type": "MINT",
//!   "amount": 100,
//!   "status": "COMPLETED",
//!   "hederaTxHash": "0.0.4512@1727000000.123456789",
//!   "createdAt": "2024-09-22T10:00:00Z"
//! }
//! ```

pub mod error;
pub mod tokenization;

pub use error::*;
pub use tokenization::*;
