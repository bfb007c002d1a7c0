//! # Tokenization Endpoints
//!
//! One function per remote operation under `/api/v2/tokenization`. Inputs are
//! passed through unchanged: validation happens in the form layer. No retries,
//! no batching.

use super::client::ApiClient;
use crate::core::error::ApiError;
use shared::{
    BurnStockInput, CreateStockInput, MintStockInput, PlatformStats, Stock, Transaction,
    TransactionFilter, UpdateStockInput,
};

/// Base path of every tokenization endpoint.
pub const BASE_PATH: &str = "/api/v2/tokenization";

fn admin_path(suffix: &str) -> String {
    format!("{}/admin{}", BASE_PATH, suffix)
}

/// Create a new stock token.
#[tracing::instrument(skip(client, input), fields(symbol = %input.symbol))]
pub async fn create_stock(client: &ApiClient, input: &CreateStockInput) -> Result<Stock, ApiError> {
    let stock: Stock = client.post(&admin_path("/stocks"), input).await?;
    tracing::info!(token_id = %stock.token_id, "Stock created");
    Ok(stock)
}

/// Update a stock's metadata or listing status.
#[tracing::instrument(skip(client, input), fields(symbol = %symbol))]
pub async fn update_stock(
    client: &ApiClient,
    symbol: &str,
    input: &UpdateStockInput,
) -> Result<Stock, ApiError> {
    let path = admin_path(&format!("/stocks/{}", urlencoding::encode(symbol)));
    client.put(&path, input).await
}

/// Mint tokens for a stock.
#[tracing::instrument(skip(client, input), fields(symbol = %input.symbol, amount = input.amount))]
pub async fn mint_stock(client: &ApiClient, input: &MintStockInput) -> Result<Transaction, ApiError> {
    client.post(&admin_path("/stocks/mint"), input).await
}

/// Burn tokens for a stock.
#[tracing::instrument(skip(client, input), fields(symbol = %input.symbol, amount = input.amount))]
pub async fn burn_stock(client: &ApiClient, input: &BurnStockInput) -> Result<Transaction, ApiError> {
    client.post(&admin_path("/stocks/burn"), input).await
}

/// List admin transactions. Unset filters are left out of the query string.
#[tracing::instrument(skip(client), fields(filter = ?filter))]
pub async fn get_admin_transactions(
    client: &ApiClient,
    filter: &TransactionFilter,
) -> Result<Vec<Transaction>, ApiError> {
    let transactions: Vec<Transaction> = client
        .get_with_query(&admin_path("/transactions"), filter)
        .await?;
    tracing::debug!(count = transactions.len(), "Transactions fetched");
    Ok(transactions)
}

/// Fetch aggregate platform statistics.
#[tracing::instrument(skip(client))]
pub async fn get_platform_stats(client: &ApiClient) -> Result<PlatformStats, ApiError> {
    client.get(&admin_path("/stats")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_paths() {
        assert_eq!(admin_path("/stocks"), "/api/v2/tokenization/admin/stocks");
        assert_eq!(admin_path("/stocks/mint"), "/api/v2/tokenization/admin/stocks/mint");
        assert_eq!(admin_path("/stats"), "/api/v2/tokenization/admin/stats");
    }
}
