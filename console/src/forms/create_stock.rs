//! Create-stock form.

use super::schema::{self, FieldErrors};
use shared::CreateStockInput;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateStockForm {
    pub symbol: String,
    pub name: String,
    pub initial_supply: String,
    pub price_per_token: String,
    pub custody_verification_url: String,
    pub errors: FieldErrors,
}

impl CreateStockForm {
    /// Validate every field and build the API input.
    pub fn validate(&self) -> Result<CreateStockInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        let symbol = errors.check("symbol", schema::symbol(&self.symbol));
        let name = errors.check("name", schema::required_text(&self.name, "Name is required"));
        let initial_supply = errors.check(
            "initial_supply",
            schema::whole_number(&self.initial_supply, "Initial supply is required", "Initial supply"),
        );
        let price_per_token = errors.check(
            "price_per_token",
            schema::positive_number(
                &self.price_per_token,
                "Price per token is required",
                "Price per token",
            ),
        );
        let custody_verification_url = errors.check(
            "custody_verification_url",
            schema::optional_url(&self.custody_verification_url),
        );

        match (symbol, name, initial_supply, price_per_token, custody_verification_url) {
            (Some(symbol), Some(name), Some(initial_supply), Some(price_per_token), Some(custody_verification_url))
                if errors.is_empty() =>
            {
                Ok(CreateStockInput {
                    symbol,
                    name,
                    initial_supply,
                    price_per_token,
                    custody_verification_url,
                })
            }
            _ => Err(errors),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form_builds_input() {
        let form = CreateStockForm {
            symbol: "aapl".to_string(),
            name: " Apple Inc. ".to_string(),
            initial_supply: "1000".to_string(),
            price_per_token: "150.50".to_string(),
            ..Default::default()
        };

        let input = form.validate().unwrap();
        assert_eq!(input.symbol, "AAPL");
        assert_eq!(input.name, "Apple Inc.");
        assert_eq!(input.initial_supply, 1000);
        assert_eq!(input.price_per_token, 150.5);
        assert!(input.custody_verification_url.is_none());
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let errors = CreateStockForm::default().validate().unwrap_err();

        assert_eq!(errors.get("symbol"), Some("Symbol is required"));
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("initial_supply"), Some("Initial supply is required"));
        assert_eq!(errors.get("price_per_token"), Some("Price per token is required"));
        assert_eq!(errors.get("custody_verification_url"), None);
    }

    #[test]
    fn test_reset_clears_fields_and_errors() {
        let mut form = CreateStockForm {
            symbol: "AAPL".to_string(),
            ..Default::default()
        };
        form.errors = form.validate().unwrap_err();
        assert!(!form.errors.is_empty());

        form.reset();
        assert_eq!(form, CreateStockForm::default());
    }
}
