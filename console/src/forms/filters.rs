//! Transaction filter bar. Every field is optional and blank means "any".

use super::schema::{self, FieldErrors};
use lib_utils::validation::parse_whole_number;
use shared::{TransactionFilter, TransactionStatus, TransactionType};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilterForm {
    pub symbol: String,
    pub tx_type: Option<TransactionType>,
    pub status: Option<TransactionStatus>,
    pub limit: String,
    pub errors: FieldErrors,
}

impl TransactionFilterForm {
    pub fn validate(&self) -> Result<TransactionFilter, FieldErrors> {
        let mut errors = FieldErrors::new();

        let limit = match schema::optional_text(&self.limit) {
            None => Some(None),
            Some(raw) => errors
                .check(
                    "limit",
                    parse_whole_number(&raw, "Limit").and_then(|limit| {
                        u32::try_from(limit).map_err(|_| "Limit is too large".to_string())
                    }),
                )
                .map(Some),
        };

        match limit {
            Some(limit) => Ok(TransactionFilter {
                symbol: schema::optional_text(&self.symbol).map(|s| schema::normalize_symbol(&s)),
                tx_type: self.tx_type,
                status: self.status,
                limit,
            }),
            None => Err(errors),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
