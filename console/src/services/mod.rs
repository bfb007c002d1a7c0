//! Services: the HTTP wrapper and endpoint facade (`api`) and the write path
//! (`mutations`).

pub mod api;
pub mod mutations;

pub use api::{ApiClient, ApiConfig};
pub use mutations::{execute, Mutation, MutationOutcome};
