//! # Forms
//!
//! Text-bound form state for every admin operation. A form keeps the raw text
//! the user typed; `validate()` coerces it into the API input or returns the
//! per-field messages. Nothing reaches the network until validation passes.

pub mod burn_stock;
pub mod create_stock;
pub mod filters;
pub mod mint_stock;
pub mod schema;

pub use burn_stock::BurnStockForm;
pub use create_stock::CreateStockForm;
pub use filters::TransactionFilterForm;
pub use mint_stock::MintStockForm;
pub use schema::FieldErrors;
