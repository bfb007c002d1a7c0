//! # Shared Utility Functions
//!
//! Common helpers used by every consumer of the tokenization DTOs.
//!
//! ## Hash Formatting
//!
//! Functions for shortening chain transaction hashes in tables:
//! - [`format_hash`] - Keep the first N and last M characters with an ellipsis
//! - [`truncate_hash`] - `format_hash` with the default 6/6 split
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_hash;
//!
//! let hash = "0.0.4512@1727000000.123456789";
//! assert_eq!(format_hash(hash, 6, 6), "0.0.45...456789");
//! ```

/// Shorten a hash by showing the first `prefix_len` and last `suffix_len` characters.
///
/// Hashes too short to shorten meaningfully are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_hash;
///
/// assert_eq!(format_hash("abcdefghijkl", 2, 2), "ab...kl");
/// assert_eq!(format_hash("short", 4, 4), "short");
/// ```
pub fn format_hash(hash: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = hash.chars().collect();
    let len = chars.len();

    if len <= prefix_len + suffix_len {
        return hash.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[len - suffix_len..].iter().collect();

    format!("{}...{}", prefix, suffix)
}

/// Shorten a hash with the default 6-character prefix and suffix.
pub fn truncate_hash(hash: &str) -> String {
    format_hash(hash, 6, 6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hash() {
        let hash = "0.0.4512@1727000000.123456789";
        assert_eq!(format_hash(hash, 4, 4), "0.0....6789");
        assert_eq!(format_hash(hash, 2, 3), "0....789");
    }

    #[test]
    fn test_format_hash_short() {
        assert_eq!(format_hash("short", 4, 4), "short");
        assert_eq!(format_hash("", 4, 4), "");
    }

    #[test]
    fn test_truncate_hash() {
        assert_eq!(truncate_hash("0.0.4512@1727000000.123456789"), "0.0.45...456789");
    }
}
