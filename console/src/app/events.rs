//! # Application Events
//!
//! Results of async tasks, sent back to the UI thread.

use crate::cache::{MutationKind, QueryKey};
use crate::core::error::ApiError;
use crate::services::mutations::MutationOutcome;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A background fetch settled. The cache already holds the outcome.
    QueryFinished {
        key: QueryKey,
        result: Result<(), ApiError>,
    },
    /// A mutation settled
    MutationFinished {
        kind: MutationKind,
        symbol: String,
        result: Result<MutationOutcome, ApiError>,
    },
}
