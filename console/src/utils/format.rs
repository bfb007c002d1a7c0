//! # Display Formatting
//!
//! Number, currency and label formatting for dashboards and tables.

use shared::{StockSummary, TransactionType};

/// Currency every amount is quoted in.
pub const CURRENCY: &str = "KES";

/// Hashscan base URL for transaction links.
pub const EXPLORER_BASE_URL: &str = "https://hashscan.io";

/// Insert thousands separators into a run of ASCII digits.
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn format_fixed(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, group_digits(int_part), frac),
        None => format!("{}{}", sign, group_digits(int_part)),
    }
}

/// Grouped number with up to three fraction digits, trailing zeros dropped.
///
/// ```rust
/// use admin_console::utils::format::format_number;
///
/// assert_eq!(format_number(1234567.0), "1,234,567");
/// assert_eq!(format_number(1500.25), "1,500.25");
/// ```
pub fn format_number(value: f64) -> String {
    let formatted = format_fixed(value, 3);
    if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        formatted
    }
}

/// Currency amount with two decimals, e.g. `KES 1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let formatted = format_fixed(amount, 2);
    match formatted.strip_prefix('-') {
        Some(unsigned) => format!("-{} {}", CURRENCY, unsigned),
        None => format!("{} {}", CURRENCY, formatted),
    }
}

/// Price shown on stock cards: two decimals, no grouping.
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

/// Value of the circulating supply at the current price.
pub fn stock_total_value(stock: &StockSummary) -> String {
    format_currency(stock.total_value())
}

/// Wire name with underscores replaced by spaces, e.g. `TRANSFER TO USER`.
pub fn type_label(tx_type: TransactionType) -> String {
    tx_type.as_str().replace('_', " ")
}

/// Explorer link for a chain transaction.
pub fn explorer_url(network: &str, tx_hash: &str) -> String {
    format!("{}/{}/transaction/{}", EXPLORER_BASE_URL, network, tx_hash)
}

/// Footer under the transaction table.
pub fn showing_count(count: usize) -> String {
    format!(
        "Showing {} transaction{}",
        count,
        if count == 1 { "" } else { "s" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::StockStatus;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234567.891), "1,234,567.891");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-2500.0), "-2,500");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "KES 0.00");
        assert_eq!(format_currency(1234.5), "KES 1,234.50");
        assert_eq!(format_currency(-10.0), "-KES 10.00");
        assert_eq!(format_price(150.5), "150.50");
    }

    #[test]
    fn test_stock_total_value() {
        let stock = StockSummary {
            symbol: "AAPL".to_string(),
            name: "Apple Inc.".to_string(),
            total_supply: 1000.0,
            circulating_supply: 400.0,
            pool_balance: 600.0,
            price_per_token: 10.0,
            status: StockStatus::Active,
        };
        assert_eq!(stock_total_value(&stock), "KES 4,000.00");
    }

    #[test]
    fn test_labels_and_links() {
        assert_eq!(type_label(TransactionType::TransferFromUser), "TRANSFER FROM USER");
        assert_eq!(
            explorer_url("testnet", "0.0.1@1727000000.1"),
            "https://hashscan.io/testnet/transaction/0.0.1@1727000000.1"
        );
        assert_eq!(showing_count(1), "Showing 1 transaction");
        assert_eq!(showing_count(12), "Showing 12 transactions");
    }
}
