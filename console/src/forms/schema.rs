//! # Form Schema Primitives
//!
//! Field rules shared by every form. Each rule takes the raw text of a field
//! and either yields the coerced value or records a message in [`FieldErrors`].

use lib_utils::validation::{
    parse_positive_number, parse_whole_number, validate_max_length, validate_not_empty,
};
use reqwest::Url;
use std::collections::BTreeMap;

/// Longest accepted stock symbol.
pub const SYMBOL_MAX_LEN: usize = 10;

/// Validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field`. The first message per field wins.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Collect a rule result, keeping the value when it passed.
    pub fn check<T>(&mut self, field: &'static str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.insert(field, message);
                None
            }
        }
    }
}

/// Required stock symbol: non-blank, at most [`SYMBOL_MAX_LEN`] characters,
/// trimmed and upper-cased.
pub fn symbol(raw: &str) -> Result<String, String> {
    validate_not_empty(raw, "Symbol is required")?;
    validate_max_length(raw, SYMBOL_MAX_LEN, "Symbol")?;
    Ok(normalize_symbol(raw))
}

/// Trim and upper-case a symbol.
pub fn normalize_symbol(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Required free text, trimmed.
pub fn required_text(raw: &str, message: &str) -> Result<String, String> {
    validate_not_empty(raw, message)?;
    Ok(raw.trim().to_string())
}

/// Optional free text. Blank becomes `None`.
pub fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Required number strictly greater than zero.
pub fn positive_number(raw: &str, required: &str, field_name: &str) -> Result<f64, String> {
    validate_not_empty(raw, required)?;
    parse_positive_number(raw, field_name)
}

/// Required whole number strictly greater than zero.
pub fn whole_number(raw: &str, required: &str, field_name: &str) -> Result<u64, String> {
    validate_not_empty(raw, required)?;
    parse_whole_number(raw, field_name)
}

/// Optional http(s) URL. Blank becomes `None`.
pub fn optional_url(raw: &str) -> Result<Option<String>, String> {
    let Some(trimmed) = optional_text(raw) else {
        return Ok(None);
    };

    match Url::parse(&trimmed) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(Some(trimmed)),
        _ => Err("Please enter a valid URL".to_string()),
    }
}
