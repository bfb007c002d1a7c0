//! # Tokenization DTOs
//!
//! Records mirrored from the tokenization API and the inputs of admin mutations.
//! The console never owns these entities: it reads snapshots and issues requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ==================== ENUMS ====================

/// Listing status of a tokenized stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    Active,
    Suspended,
    Delisted,
}

impl StockStatus {
    pub fn all() -> &'static [StockStatus] {
        &[StockStatus::Active, StockStatus::Suspended, StockStatus::Delisted]
    }

    /// Wire representation (`ACTIVE`, `SUSPENDED`, `DELISTED`).
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Active => "ACTIVE",
            StockStatus::Suspended => "SUSPENDED",
            StockStatus::Delisted => "DELISTED",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            StockStatus::Active => "Active",
            StockStatus::Suspended => "Suspended",
            StockStatus::Delisted => "Delisted",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of supply movement recorded by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Mint,
    Burn,
    TransferToUser,
    TransferFromUser,
}

impl TransactionType {
    pub fn all() -> &'static [TransactionType] {
        &[
            TransactionType::Mint,
            TransactionType::Burn,
            TransactionType::TransferToUser,
            TransactionType::TransferFromUser,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Mint => "MINT",
            TransactionType::Burn => "BURN",
            TransactionType::TransferToUser => "TRANSFER_TO_USER",
            TransactionType::TransferFromUser => "TRANSFER_FROM_USER",
        }
    }

    /// Human label used in filter pickers.
    pub fn title(&self) -> &'static str {
        match self {
            TransactionType::Mint => "Mint",
            TransactionType::Burn => "Burn",
            TransactionType::TransferToUser => "Transfer to User",
            TransactionType::TransferFromUser => "Transfer from User",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settlement state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl TransactionStatus {
    pub fn all() -> &'static [TransactionStatus] {
        &[
            TransactionStatus::Completed,
            TransactionStatus::Pending,
            TransactionStatus::Failed,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Completed => "COMPLETED",
            TransactionStatus::Failed => "FAILED",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==================== RECORDS ====================

/// A tokenized stock listed on the platform.
///
/// `circulating_supply <= total_supply` is enforced by the API, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub symbol: String,
    pub name: String,
    pub token_id: String,
    pub total_supply: f64,
    pub circulating_supply: f64,
    pub pool_balance: f64,
    pub price_per_token: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custody_verification_url: Option<String>,
    pub status: StockStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A supply movement (mint, burn or transfer).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub stock_id: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_token: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    /// Settlement hash on the ledger, once the transaction reached the chain.
    #[serde(rename = "hederaTxHash", default, skip_serializing_if = "Option::is_none")]
    pub chain_tx_hash: Option<String>,
    pub status: TransactionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Per-stock summary inside [`PlatformStats`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    pub symbol: String,
    pub name: String,
    pub total_supply: f64,
    pub circulating_supply: f64,
    pub pool_balance: f64,
    pub price_per_token: f64,
    pub status: StockStatus,
}

impl StockSummary {
    /// Market value of the circulating tokens.
    pub fn total_value(&self) -> f64 {
        self.circulating_supply * self.price_per_token
    }
}

/// Aggregate platform figures plus the ordered list of stock summaries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_stocks: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_holders: u64,
    #[serde(default)]
    pub total_value_locked: f64,
    #[serde(default)]
    pub total_pool_value: f64,
    #[serde(default)]
    pub stocks: Vec<StockSummary>,
}

/// Accepts a count sent as an integer, a float (`2.0`) or `null`.
/// Negative or non-finite values read as zero.
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(match value {
        Some(v) if v.is_finite() && v > 0.0 => v.round() as u64,
        _ => 0,
    })
}

// ==================== REQUEST INPUTS ====================

/// Body of `POST /admin/stocks`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateStockInput {
    pub symbol: String,
    pub name: String,
    pub initial_supply: u64,
    pub price_per_token: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custody_verification_url: Option<String>,
}

/// Body of `PUT /admin/stocks/{symbol}`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStockInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_supply: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_token: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custody_verification_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StockStatus>,
}

/// Body of `POST /admin/stocks/mint`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MintStockInput {
    pub symbol: String,
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custody_verification_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of `POST /admin/stocks/burn`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BurnStockInput {
    pub symbol: String,
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Query string of `GET /admin/transactions`. Absent filters are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TransactionFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub tx_type: Option<TransactionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl TransactionFilter {
    /// Whether a transaction satisfies every set filter. `limit` is ignored.
    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(symbol) = &self.symbol {
            if !tx.symbol.eq_ignore_ascii_case(symbol) {
                return false;
            }
        }
        if let Some(tx_type) = self.tx_type {
            if tx.tx_type != tx_type {
                return false;
            }
        }
        if let Some(status) = self.status {
            if tx.status != status {
                return false;
            }
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.symbol.is_none() && self.tx_type.is_none() && self.status.is_none() && self.limit.is_none()
    }
}
