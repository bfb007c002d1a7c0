//! # Query Client
//!
//! Binds the [`QueryCache`] to the tokenization API: typed reads, the set of
//! keys currently on screen, background refetch scheduling and
//! invalidation after mutations.

use super::keys::{MutationKind, QueryData, QueryKey, QueryScope, CACHE_TIME};
use super::{QueryCache, QueryState};
use crate::core::error::ApiError;
use crate::core::service::TokenizationService;
use futures::future::join_all;
use parking_lot::RwLock;
use shared::{PlatformStats, Transaction};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

pub struct QueryClient {
    api: Arc<dyn TokenizationService>,
    cache: QueryCache<QueryKey, QueryData>,
    /// Keys rendered by the visible screen; only these refetch in the background.
    observed: RwLock<HashSet<QueryKey>>,
}

impl QueryClient {
    pub fn new(api: Arc<dyn TokenizationService>) -> Self {
        Self {
            api,
            cache: QueryCache::new(),
            observed: RwLock::new(HashSet::new()),
        }
    }

    pub fn api(&self) -> &Arc<dyn TokenizationService> {
        &self.api
    }

    /// Fetch `key` through the cache, joining any fetch already in flight.
    pub async fn fetch(&self, key: QueryKey) -> Result<QueryData, ApiError> {
        let api = Arc::clone(&self.api);
        let load_key = key.clone();
        self.cache
            .fetch(key, move || async move { load(api, load_key).await })
            .await
    }

    pub async fn platform_stats(&self) -> Result<Arc<PlatformStats>, ApiError> {
        match self.fetch(QueryKey::PlatformStats).await? {
            QueryData::Stats(stats) => Ok(stats),
            QueryData::Transactions(_) => Err(mismatched(&QueryKey::PlatformStats)),
        }
    }

    pub async fn admin_transactions(
        &self,
        filter: shared::TransactionFilter,
    ) -> Result<Arc<Vec<Transaction>>, ApiError> {
        let key = QueryKey::AdminTransactions(filter);
        match self.fetch(key.clone()).await? {
            QueryData::Transactions(transactions) => Ok(transactions),
            QueryData::Stats(_) => Err(mismatched(&key)),
        }
    }

    pub fn state(&self, key: &QueryKey) -> QueryState<QueryData> {
        self.cache.snapshot(key)
    }

    pub fn stats_state(&self) -> QueryState<Arc<PlatformStats>> {
        let state = self.cache.snapshot(&QueryKey::PlatformStats);
        QueryState {
            data: state.data.as_ref().and_then(QueryData::as_stats).cloned(),
            error: state.error,
            is_fetching: state.is_fetching,
            is_stale: state.is_stale,
            updated_at: state.updated_at,
        }
    }

    pub fn transactions_state(
        &self,
        filter: &shared::TransactionFilter,
    ) -> QueryState<Arc<Vec<Transaction>>> {
        let state = self
            .cache
            .snapshot(&QueryKey::AdminTransactions(filter.clone()));
        QueryState {
            data: state.data.as_ref().and_then(QueryData::as_transactions).cloned(),
            error: state.error,
            is_fetching: state.is_fetching,
            is_stale: state.is_stale,
            updated_at: state.updated_at,
        }
    }

    /// Replace the set of on-screen keys.
    pub fn observe_only<I>(&self, keys: I)
    where
        I: IntoIterator<Item = QueryKey>,
    {
        let keys: HashSet<QueryKey> = keys.into_iter().collect();
        let mut observed = self.observed.write();
        if *observed != keys {
            debug!(count = keys.len(), "Observed queries changed");
            *observed = keys;
        }
    }

    pub fn observed(&self) -> Vec<QueryKey> {
        self.observed.read().iter().cloned().collect()
    }

    /// Whether any on-screen query is waiting for the server.
    pub fn is_fetching_observed(&self) -> bool {
        self.observed.read().iter().any(|key| self.cache.is_fetching(key))
    }

    /// Observed keys that have no value, are stale, or passed their refetch interval.
    pub fn due_keys(&self, now: Instant) -> Vec<QueryKey> {
        self.observed
            .read()
            .iter()
            .filter(|key| self.cache.is_due(key, key.refetch_interval(), now))
            .cloned()
            .collect()
    }

    /// Drop entries that left the screen more than [`CACHE_TIME`] ago.
    pub fn evict_unobserved(&self, now: Instant) -> Vec<QueryKey> {
        let observed = self.observed.read().clone();
        let evicted = self
            .cache
            .evict_idle(now, CACHE_TIME, |key| observed.contains(key));
        for key in &evicted {
            debug!(key = %key, "Evicted unobserved query");
        }
        evicted
    }

    /// Refetch a single key, logging failures. The cache keeps the last value.
    pub async fn refetch(&self, key: QueryKey) -> Result<(), ApiError> {
        match self.fetch(key.clone()).await {
            Ok(_) => Ok(()),
            Err(err) => {
                warn!(key = %key, status = err.status, error = %err, "Refetch failed");
                Err(err)
            }
        }
    }

    /// Mark every key in `scopes` stale and refetch the observed ones.
    ///
    /// Returns the keys that were refetched. Unobserved keys stay stale until
    /// they come back on screen.
    pub async fn invalidate(&self, scopes: &[QueryScope]) -> Vec<QueryKey> {
        let invalidated = self
            .cache
            .invalidate_where(|key| scopes.contains(&key.scope()));

        let observed = self.observed.read().clone();
        let mut targets: Vec<QueryKey> = observed
            .into_iter()
            .filter(|key| scopes.contains(&key.scope()))
            .collect();
        targets.sort_by_key(|key| key.to_string());

        debug!(
            scopes = ?scopes,
            invalidated = invalidated.len(),
            refetching = targets.len(),
            "Queries invalidated"
        );

        join_all(targets.iter().cloned().map(|key| self.refetch(key))).await;
        targets
    }

    /// Apply the invalidation policy for a successful mutation.
    pub async fn invalidate_after(&self, kind: MutationKind) -> Vec<QueryKey> {
        info!(mutation = ?kind, "Invalidating queries after mutation");
        self.invalidate(kind.invalidates()).await
    }
}

async fn load(api: Arc<dyn TokenizationService>, key: QueryKey) -> Result<QueryData, ApiError> {
    match key {
        QueryKey::PlatformStats => {
            let stats = api.get_platform_stats().await?;
            Ok(QueryData::Stats(Arc::new(stats)))
        }
        QueryKey::AdminTransactions(filter) => {
            let mut transactions = api.get_admin_transactions(filter.clone()).await?;

            let received = transactions.len();
            transactions.retain(|tx| filter.matches(tx));
            if transactions.len() != received {
                warn!(
                    dropped = received - transactions.len(),
                    "Server returned transactions outside the filter"
                );
            }

            Ok(QueryData::Transactions(Arc::new(transactions)))
        }
    }
}

fn mismatched(key: &QueryKey) -> ApiError {
    ApiError::invalid_response(200, format!("cached value does not match query {}", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::mock::{sample_transaction, MockTokenizationService};
    use shared::{TransactionFilter, TransactionType};
    use std::time::Duration;

    fn aapl_filter() -> TransactionFilter {
        TransactionFilter {
            symbol: Some("AAPL".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_symbol_filter_never_leaks_other_symbols() {
        let mock = Arc::new(MockTokenizationService::with_transactions(vec![
            sample_transaction("AAPL", TransactionType::Mint, 10.0),
            sample_transaction("MSFT", TransactionType::Mint, 20.0),
            sample_transaction("AAPL", TransactionType::Burn, 5.0),
        ]));
        let client = QueryClient::new(mock);

        let transactions = client.admin_transactions(aapl_filter()).await.unwrap();
        assert_eq!(transactions.len(), 2);
        assert!(transactions.iter().all(|tx| tx.symbol == "AAPL"));
    }

    #[tokio::test]
    async fn test_due_keys_follow_observed_set() {
        let mock = Arc::new(MockTokenizationService::new());
        let client = QueryClient::new(mock.clone());

        assert!(client.due_keys(Instant::now()).is_empty());

        client.observe_only([QueryKey::PlatformStats]);
        assert_eq!(client.due_keys(Instant::now()), vec![QueryKey::PlatformStats]);

        client.refetch(QueryKey::PlatformStats).await.unwrap();
        let now = Instant::now();
        assert!(client.due_keys(now).is_empty());
        assert_eq!(
            client.due_keys(now + Duration::from_secs(31)),
            vec![QueryKey::PlatformStats]
        );
        assert_eq!(mock.calls("get_platform_stats"), 1);
    }

    #[tokio::test]
    async fn test_mint_invalidates_and_refetches_stats_and_transactions() {
        let mock = Arc::new(MockTokenizationService::new());
        let client = QueryClient::new(mock.clone());
        let transactions_key = QueryKey::AdminTransactions(TransactionFilter::default());

        client.observe_only([QueryKey::PlatformStats, transactions_key.clone()]);
        client.refetch(QueryKey::PlatformStats).await.unwrap();
        client.refetch(transactions_key.clone()).await.unwrap();

        let refetched = client.invalidate_after(MutationKind::Mint).await;
        assert_eq!(refetched.len(), 2);
        assert_eq!(mock.calls("get_platform_stats"), 2);
        assert_eq!(mock.calls("get_admin_transactions"), 2);
        assert!(!client.stats_state().is_stale);
        assert!(!client.transactions_state(&TransactionFilter::default()).is_stale);
    }

    #[tokio::test]
    async fn test_create_only_invalidates_stats() {
        let mock = Arc::new(MockTokenizationService::new());
        let client = QueryClient::new(mock.clone());
        let transactions_key = QueryKey::AdminTransactions(TransactionFilter::default());

        client.observe_only([QueryKey::PlatformStats, transactions_key.clone()]);
        client.refetch(QueryKey::PlatformStats).await.unwrap();
        client.refetch(transactions_key).await.unwrap();

        let refetched = client.invalidate_after(MutationKind::CreateStock).await;
        assert_eq!(refetched, vec![QueryKey::PlatformStats]);
        assert_eq!(mock.calls("get_platform_stats"), 2);
        assert_eq!(mock.calls("get_admin_transactions"), 1);
    }

    #[tokio::test]
    async fn test_unobserved_keys_stay_stale() {
        let mock = Arc::new(MockTokenizationService::new());
        let client = QueryClient::new(mock.clone());

        client.admin_transactions(aapl_filter()).await.unwrap();
        let refetched = client.invalidate(&[QueryScope::Transactions]).await;

        assert!(refetched.is_empty());
        assert!(client.transactions_state(&aapl_filter()).is_stale);
        assert_eq!(mock.calls("get_admin_transactions"), 1);

        client.observe_only([QueryKey::AdminTransactions(aapl_filter())]);
        assert_eq!(client.due_keys(Instant::now()).len(), 1);
    }

    #[tokio::test]
    async fn test_failed_refetch_keeps_previous_stats() {
        let mock = Arc::new(MockTokenizationService::new());
        mock.stats.lock().as_mut().unwrap().total_stocks = 3;
        let client = QueryClient::new(mock.clone());

        client.platform_stats().await.unwrap();
        *mock.stats.lock() = Err(ApiError::network("connection refused"));

        assert!(client.refetch(QueryKey::PlatformStats).await.is_err());
        let state = client.stats_state();
        assert_eq!(state.data.map(|stats| stats.total_stocks), Some(3));
        assert_eq!(state.error.map(|err| err.status), Some(0));
    }

    #[tokio::test]
    async fn test_unobserved_filters_are_evicted_after_cache_time() {
        let mock = Arc::new(MockTokenizationService::new());
        let client = QueryClient::new(mock.clone());
        let aapl_key = QueryKey::AdminTransactions(aapl_filter());

        client.observe_only([QueryKey::PlatformStats]);
        client.refetch(QueryKey::PlatformStats).await.unwrap();
        client.admin_transactions(aapl_filter()).await.unwrap();

        let now = Instant::now();
        assert!(client.evict_unobserved(now).is_empty());

        let evicted = client.evict_unobserved(now + CACHE_TIME + Duration::from_secs(1));
        assert_eq!(evicted, vec![aapl_key.clone()]);
        assert!(client.state(&aapl_key).data.is_none());
        assert!(client.stats_state().data.is_some());
    }
}
