//! Query keys, cached payloads and the mutation invalidation policy.

use shared::{PlatformStats, Transaction, TransactionFilter};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Background refetch interval for platform stats.
pub const STATS_REFETCH_INTERVAL: Duration = Duration::from_secs(30);

/// Background refetch interval for transaction lists.
pub const TRANSACTIONS_REFETCH_INTERVAL: Duration = Duration::from_secs(15);

/// How long an unobserved entry is kept after its last fetch settled.
pub const CACHE_TIME: Duration = Duration::from_secs(5 * 60);

/// Query family. Invalidation targets a whole family, so every filter variant
/// of the transactions query goes stale together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryScope {
    Stats,
    Transactions,
}

impl QueryScope {
    pub fn name(&self) -> &'static str {
        match self {
            QueryScope::Stats => "platform-stats",
            QueryScope::Transactions => "admin-transactions",
        }
    }
}

/// Cache key: operation name plus filter parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    PlatformStats,
    AdminTransactions(TransactionFilter),
}

impl QueryKey {
    pub fn scope(&self) -> QueryScope {
        match self {
            QueryKey::PlatformStats => QueryScope::Stats,
            QueryKey::AdminTransactions(_) => QueryScope::Transactions,
        }
    }

    pub fn refetch_interval(&self) -> Duration {
        match self {
            QueryKey::PlatformStats => STATS_REFETCH_INTERVAL,
            QueryKey::AdminTransactions(_) => TRANSACTIONS_REFETCH_INTERVAL,
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::PlatformStats => f.write_str(QueryScope::Stats.name()),
            QueryKey::AdminTransactions(filter) if filter.is_empty() => {
                f.write_str(QueryScope::Transactions.name())
            }
            QueryKey::AdminTransactions(filter) => {
                write!(f, "{}{:?}", QueryScope::Transactions.name(), filter)
            }
        }
    }
}

/// Value stored under a [`QueryKey`]. Payloads are shared, so snapshots are cheap.
#[derive(Debug, Clone)]
pub enum QueryData {
    Stats(Arc<PlatformStats>),
    Transactions(Arc<Vec<Transaction>>),
}

impl QueryData {
    pub fn as_stats(&self) -> Option<&Arc<PlatformStats>> {
        match self {
            QueryData::Stats(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn as_transactions(&self) -> Option<&Arc<Vec<Transaction>>> {
        match self {
            QueryData::Transactions(transactions) => Some(transactions),
            _ => None,
        }
    }
}

/// Kind of a successful mutation, used to pick which queries go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    CreateStock,
    UpdateStock,
    Mint,
    Burn,
}

impl MutationKind {
    /// Query families invalidated after this mutation succeeds.
    pub fn invalidates(&self) -> &'static [QueryScope] {
        match self {
            MutationKind::CreateStock | MutationKind::UpdateStock => &[QueryScope::Stats],
            MutationKind::Mint | MutationKind::Burn => {
                &[QueryScope::Stats, QueryScope::Transactions]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalidation_policy() {
        assert_eq!(MutationKind::CreateStock.invalidates(), &[QueryScope::Stats]);
        assert_eq!(MutationKind::UpdateStock.invalidates(), &[QueryScope::Stats]);
        assert_eq!(
            MutationKind::Mint.invalidates(),
            &[QueryScope::Stats, QueryScope::Transactions]
        );
        assert_eq!(
            MutationKind::Burn.invalidates(),
            &[QueryScope::Stats, QueryScope::Transactions]
        );
    }

    #[test]
    fn test_refetch_intervals() {
        assert_eq!(QueryKey::PlatformStats.refetch_interval(), Duration::from_secs(30));
        assert_eq!(
            QueryKey::AdminTransactions(TransactionFilter::default()).refetch_interval(),
            Duration::from_secs(15)
        );
    }

    #[test]
    fn test_filters_make_distinct_keys() {
        let all = QueryKey::AdminTransactions(TransactionFilter::default());
        let aapl = QueryKey::AdminTransactions(TransactionFilter {
            symbol: Some("AAPL".to_string()),
            ..Default::default()
        });

        assert_ne!(all, aapl);
        assert_eq!(all.scope(), aapl.scope());
        assert_eq!(all.to_string(), "admin-transactions");
        assert!(aapl.to_string().starts_with("admin-transactions"));
    }
}
