//! Burn form.

use super::schema::{self, FieldErrors};
use shared::BurnStockInput;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BurnStockForm {
    pub symbol: String,
    pub amount: String,
    pub reason: String,
    pub errors: FieldErrors,
}

impl BurnStockForm {
    pub fn validate(&self) -> Result<BurnStockInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        let symbol = errors.check("symbol", schema::symbol(&self.symbol));
        let amount = errors.check(
            "amount",
            schema::whole_number(&self.amount, "Amount is required", "Amount"),
        );

        match (symbol, amount) {
            (Some(symbol), Some(amount)) => Ok(BurnStockInput {
                symbol,
                amount,
                reason: schema::optional_text(&self.reason),
            }),
            _ => Err(errors),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
