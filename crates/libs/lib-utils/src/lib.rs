//! # Utilities Library
//!
//! Shared utility functions for environment variables, time formatting and input validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_opt, parse_value};
pub use time::{format_display, parse_utc};
pub use validation::{
    parse_positive_number, parse_whole_number, validate_max_length, validate_not_empty,
};
