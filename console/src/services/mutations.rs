//! # Mutations
//!
//! Write operations against the tokenization API. A mutation waits for the
//! server's confirmation, then invalidates and refetches the affected queries.
//! Returned entities are never written into the cache.

use crate::cache::{MutationKind, QueryClient};
use crate::core::error::ApiError;
use shared::{
    BurnStockInput, CreateStockInput, MintStockInput, Stock, Transaction, UpdateStockInput,
};
use tracing::{info, warn};

/// A validated write request.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    CreateStock(CreateStockInput),
    UpdateStock {
        symbol: String,
        input: UpdateStockInput,
    },
    Mint(MintStockInput),
    Burn(BurnStockInput),
}

impl Mutation {
    pub fn kind(&self) -> MutationKind {
        match self {
            Mutation::CreateStock(_) => MutationKind::CreateStock,
            Mutation::UpdateStock { .. } => MutationKind::UpdateStock,
            Mutation::Mint(_) => MutationKind::Mint,
            Mutation::Burn(_) => MutationKind::Burn,
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            Mutation::CreateStock(input) => &input.symbol,
            Mutation::UpdateStock { symbol, .. } => symbol,
            Mutation::Mint(input) => &input.symbol,
            Mutation::Burn(input) => &input.symbol,
        }
    }
}

/// Server-confirmed result of a mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    StockCreated(Stock),
    StockUpdated(Stock),
    Minted(Transaction),
    Burned(Transaction),
}

impl MutationOutcome {
    pub fn kind(&self) -> MutationKind {
        match self {
            MutationOutcome::StockCreated(_) => MutationKind::CreateStock,
            MutationOutcome::StockUpdated(_) => MutationKind::UpdateStock,
            MutationOutcome::Minted(_) => MutationKind::Mint,
            MutationOutcome::Burned(_) => MutationKind::Burn,
        }
    }

    /// Notification title and description for a success toast.
    pub fn summary(&self) -> (String, String) {
        match self {
            MutationOutcome::StockCreated(stock) => (
                "Stock created successfully!".to_string(),
                format!(
                    "{} - {} has been created with token ID: {}",
                    stock.symbol, stock.name, stock.token_id
                ),
            ),
            MutationOutcome::StockUpdated(stock) => (
                "Stock updated successfully!".to_string(),
                format!("{} is now {}", stock.symbol, stock.status.title()),
            ),
            MutationOutcome::Minted(tx) => (
                "Tokens minted successfully!".to_string(),
                format!("Minted {} tokens for {}", tx.amount, tx.symbol),
            ),
            MutationOutcome::Burned(tx) => (
                "Tokens burned successfully!".to_string(),
                format!("Burned {} tokens for {}", tx.amount, tx.symbol),
            ),
        }
    }
}

/// Title of the error toast shown when a mutation of `kind` fails.
pub fn failure_title(kind: MutationKind) -> &'static str {
    match kind {
        MutationKind::CreateStock => "Failed to create stock",
        MutationKind::UpdateStock => "Failed to update stock",
        MutationKind::Mint => "Failed to mint tokens",
        MutationKind::Burn => "Failed to burn tokens",
    }
}

/// Run a mutation, then invalidate and refetch the queries it affects.
///
/// On failure nothing is invalidated and cached data is left as it was.
#[tracing::instrument(skip(queries, mutation), fields(kind = ?mutation.kind(), symbol = %mutation.symbol()))]
pub async fn execute(queries: &QueryClient, mutation: Mutation) -> Result<MutationOutcome, ApiError> {
    let kind = mutation.kind();
    let api = queries.api();

    let result = match mutation {
        Mutation::CreateStock(input) => api.create_stock(input).await.map(MutationOutcome::StockCreated),
        Mutation::UpdateStock { symbol, input } => api
            .update_stock(symbol, input)
            .await
            .map(MutationOutcome::StockUpdated),
        Mutation::Mint(input) => api.mint_stock(input).await.map(MutationOutcome::Minted),
        Mutation::Burn(input) => api.burn_stock(input).await.map(MutationOutcome::Burned),
    };

    let outcome = result.map_err(|err| {
        warn!(status = err.status, code = ?err.code, error = %err, "Mutation failed");
        err
    })?;

    info!("Mutation confirmed by server");
    queries.invalidate_after(kind).await;

    Ok(outcome)
}
