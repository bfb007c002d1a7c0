//! # Service Traits
//!
//! Traits for dependency injection, so the query cache, mutations and app can be
//! driven by a mock tokenization API in tests.

use crate::core::error::ApiError;
use async_trait::async_trait;
use shared::{
    BurnStockInput, CreateStockInput, MintStockInput, PlatformStats, Stock, Transaction,
    TransactionFilter, UpdateStockInput,
};

/// Operations exposed by the remote tokenization API.
///
/// One method per remote operation. Inputs are validated upstream by the form
/// layer; implementations pass them through unchanged.
#[async_trait]
pub trait TokenizationService: Send + Sync {
    /// Create a new stock token
    async fn create_stock(&self, input: CreateStockInput) -> Result<Stock, ApiError>;

    /// Update stock metadata or listing status
    async fn update_stock(&self, symbol: String, input: UpdateStockInput) -> Result<Stock, ApiError>;

    /// Increase circulating supply
    async fn mint_stock(&self, input: MintStockInput) -> Result<Transaction, ApiError>;

    /// Decrease circulating supply
    async fn burn_stock(&self, input: BurnStockInput) -> Result<Transaction, ApiError>;

    /// List admin transactions matching the filter
    async fn get_admin_transactions(&self, filter: TransactionFilter) -> Result<Vec<Transaction>, ApiError>;

    /// Aggregate platform statistics
    async fn get_platform_stats(&self) -> Result<PlatformStats, ApiError>;
}
