//! Mint form.

use super::schema::{self, FieldErrors};
use shared::MintStockInput;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MintStockForm {
    pub symbol: String,
    pub amount: String,
    pub custody_verification_url: String,
    pub notes: String,
    pub errors: FieldErrors,
}

impl MintStockForm {
    pub fn validate(&self) -> Result<MintStockInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        let symbol = errors.check("symbol", schema::symbol(&self.symbol));
        let amount = errors.check(
            "amount",
            schema::whole_number(&self.amount, "Amount is required", "Amount"),
        );
        let custody_verification_url = errors.check(
            "custody_verification_url",
            schema::optional_url(&self.custody_verification_url),
        );

        match (symbol, amount, custody_verification_url) {
            (Some(symbol), Some(amount), Some(custody_verification_url)) if errors.is_empty() => {
                Ok(MintStockInput {
                    symbol,
                    amount,
                    custody_verification_url,
                    notes: schema::optional_text(&self.notes),
                })
            }
            _ => Err(errors),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
