//! # Utility Functions
//!
//! - **[`format`]**: Currency, number and label formatting for the UI
//! - **[`runtime`]**: The Tokio runtime network tasks run on
//!
//! Cross-crate helpers (hash truncation) live in [`shared::utils`].

pub mod format;
pub mod runtime;
