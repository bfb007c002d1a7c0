//! # Application State Types
//!
//! Tabs, form state, in-flight mutation flags and queued notifications.
//! Fetched data does not live here: the query cache is its only owner.

use crate::cache::QueryKey;
use crate::forms::{BurnStockForm, CreateStockForm, MintStockForm, TransactionFilterForm};
use shared::TransactionFilter;
use std::collections::HashSet;

/// Console tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    /// Platform stats and stock cards
    Dashboard,
    /// Create a new stock token
    Create,
    /// Increase circulating supply
    Mint,
    /// Decrease circulating supply
    Burn,
    /// Filterable transaction table
    Transactions,
}

impl Tab {
    /// Get all tabs in navigation order
    pub fn all() -> &'static [Tab] {
        &[Tab::Dashboard, Tab::Create, Tab::Mint, Tab::Burn, Tab::Transactions]
    }

    /// Get tab label for the navigation bar
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Create => "Create",
            Tab::Mint => "Mint",
            Tab::Burn => "Burn",
            Tab::Transactions => "Transactions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A toast waiting to be shown by the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: Option<String>,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.into(),
            description: Some(description.into()),
        }
    }
}

/// Mutations currently waiting for the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingMutations {
    pub create: bool,
    pub mint: bool,
    pub burn: bool,
    /// Symbols with a status change in flight
    pub status_updates: HashSet<String>,
}

impl PendingMutations {
    pub fn any(&self) -> bool {
        self.create || self.mint || self.burn || !self.status_updates.is_empty()
    }
}

/// Application state shared between the UI thread and async tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_tab: Tab,
    pub create_form: CreateStockForm,
    pub mint_form: MintStockForm,
    pub burn_form: BurnStockForm,
    pub filter_form: TransactionFilterForm,
    /// Last valid filter, used as the transactions query key
    pub transaction_filter: TransactionFilter,
    pub pending: PendingMutations,
    pub pending_notifications: Vec<Notification>,
    /// Queries whose last fetch failed, so a failure is announced once
    pub failing_queries: HashSet<QueryKey>,
    /// Hashscan network for explorer links
    pub explorer_network: String,
    pub needs_repaint: bool,
}

impl AppState {
    pub fn new(explorer_network: impl Into<String>) -> Self {
        Self {
            current_tab: Tab::Dashboard,
            create_form: CreateStockForm::default(),
            mint_form: MintStockForm::default(),
            burn_form: BurnStockForm::default(),
            filter_form: TransactionFilterForm::default(),
            transaction_filter: TransactionFilter::default(),
            pending: PendingMutations::default(),
            pending_notifications: Vec::new(),
            failing_queries: HashSet::new(),
            explorer_network: explorer_network.into(),
            needs_repaint: false,
        }
    }

    /// Queries rendered by the current tab.
    pub fn observed_keys(&self) -> Vec<QueryKey> {
        match self.current_tab {
            Tab::Dashboard => vec![QueryKey::PlatformStats],
            Tab::Transactions => vec![QueryKey::AdminTransactions(self.transaction_filter.clone())],
            Tab::Create | Tab::Mint | Tab::Burn => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observed_keys_follow_tab() {
        let mut state = AppState::new("testnet");
        assert_eq!(state.observed_keys(), vec![QueryKey::PlatformStats]);

        state.current_tab = Tab::Mint;
        assert!(state.observed_keys().is_empty());

        state.current_tab = Tab::Transactions;
        state.transaction_filter.symbol = Some("AAPL".to_string());
        assert_eq!(
            state.observed_keys(),
            vec![QueryKey::AdminTransactions(state.transaction_filter.clone())]
        );
    }
}
