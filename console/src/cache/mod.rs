//! # Query Cache
//!
//! Keyed client-side cache for API reads, with stale-while-revalidate semantics.
//!
//! ## Features
//! - At most one fetch in flight per key; concurrent callers join it
//! - The last good value stays readable while a refetch is pending or after it fails
//! - Explicit invalidation marks keys stale and abandons their in-flight fetch
//! - Time-based refetch through [`QueryCache::is_due`]
//! - Idle entries are dropped through [`QueryCache::evict_idle`]
//!
//! ## Example
//! ```no_run
//! # async fn demo() -> Result<(), admin_console::core::ApiError> {
//! use admin_console::cache::QueryCache;
//!
//! let cache: QueryCache<&'static str, u64> = QueryCache::new();
//! let value = cache.fetch("answer", || async { Ok(42) }).await?;
//! assert_eq!(value, 42);
//! assert_eq!(cache.snapshot(&"answer").data, Some(42));
//! # Ok(()) }
//! ```
//!
//! The typed layer on top of this cache lives in [`client`] ([`QueryClient`])
//! and the query keys and invalidation policy in [`keys`].

pub mod client;
pub mod keys;

pub use client::QueryClient;
pub use keys::{MutationKind, QueryData, QueryKey, QueryScope};

use crate::core::error::ApiError;
use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

type SharedFetch<V> = Shared<BoxFuture<'static, Result<V, ApiError>>>;

/// A cache slot for one key.
struct Entry<V> {
    /// Last good value
    data: Option<V>,
    /// When `data` was stored
    updated_at: Option<Instant>,
    /// When the last fetch settled, successfully or not
    settled_at: Option<Instant>,
    /// Error of the most recent failed fetch, cleared on success
    error: Option<ApiError>,
    /// Set by invalidation, cleared when a fresh value is stored
    stale: bool,
    /// Fetch currently running for this key, tagged with its generation
    in_flight: Option<(u64, SharedFetch<V>)>,
    /// Incremented for every fetch started
    generation: u64,
}

impl<V> Default for Entry<V> {
    fn default() -> Self {
        Self {
            data: None,
            updated_at: None,
            settled_at: None,
            error: None,
            stale: false,
            in_flight: None,
            generation: 0,
        }
    }
}

/// Read-only view of one key, used by the UI to render.
#[derive(Debug, Clone)]
pub struct QueryState<V> {
    pub data: Option<V>,
    pub error: Option<ApiError>,
    pub is_fetching: bool,
    pub is_stale: bool,
    pub updated_at: Option<Instant>,
}

impl<V> Default for QueryState<V> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            is_fetching: false,
            is_stale: false,
            updated_at: None,
        }
    }
}

impl<V> QueryState<V> {
    /// No value yet and no failure to report: show loading placeholders.
    pub fn is_loading(&self) -> bool {
        self.data.is_none() && self.error.is_none()
    }

    pub fn map<U, F: FnOnce(V) -> U>(self, f: F) -> QueryState<U> {
        QueryState {
            data: self.data.map(f),
            error: self.error,
            is_fetching: self.is_fetching,
            is_stale: self.is_stale,
            updated_at: self.updated_at,
        }
    }
}

/// Keyed cache with in-flight deduplication and explicit invalidation.
///
/// Fetches run as spawned Tokio tasks and record their result even when every
/// caller has stopped waiting, so a key never stays "fetching" forever.
pub struct QueryCache<K, V> {
    entries: Arc<RwLock<HashMap<K, Entry<V>>>>,
}

impl<K, V> Default for QueryCache<K, V> {
    fn default() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<K, V> QueryCache<K, V>
where
    K: Eq + Hash + Clone + Debug + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the value for `key`, joining the in-flight fetch if there is one.
    ///
    /// `fetcher` is only called when a new fetch starts. It must build its
    /// future without touching this cache. Must be called within a Tokio runtime.
    pub async fn fetch<F, Fut>(&self, key: K, fetcher: F) -> Result<V, ApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, ApiError>> + Send + 'static,
    {
        let fetch = {
            let mut entries = self.entries.write();
            let entry = entries.entry(key.clone()).or_default();

            match &entry.in_flight {
                Some((_, fetch)) => {
                    trace!(key = ?key, "Joining in-flight fetch");
                    fetch.clone()
                }
                None => {
                    entry.generation += 1;
                    let generation = entry.generation;
                    let fetch = self.start(key.clone(), generation, fetcher());
                    entry.in_flight = Some((generation, fetch.clone()));
                    debug!(key = ?key, generation, "Fetch started");
                    fetch
                }
            }
        }; // Lock released before awaiting

        fetch.await
    }

    fn start<Fut>(&self, key: K, generation: u64, future: Fut) -> SharedFetch<V>
    where
        Fut: Future<Output = Result<V, ApiError>> + Send + 'static,
    {
        let entries = Arc::clone(&self.entries);
        let task = tokio::spawn(async move {
            let result = future.await;
            settle(&entries, &key, generation, &result);
            result
        });

        async move {
            task.await
                .unwrap_or_else(|e| Err(ApiError::network(format!("Query task failed: {}", e))))
        }
        .boxed()
        .shared()
    }

    /// Current view of `key`. Unknown keys read as an empty, idle state.
    pub fn snapshot(&self, key: &K) -> QueryState<V> {
        let entries = self.entries.read();
        match entries.get(key) {
            Some(entry) => QueryState {
                data: entry.data.clone(),
                error: entry.error.clone(),
                is_fetching: entry.in_flight.is_some(),
                is_stale: entry.stale,
                updated_at: entry.updated_at,
            },
            None => QueryState::default(),
        }
    }

    /// Mark every key matching `pred` stale and abandon its in-flight fetch.
    ///
    /// Returns the invalidated keys. Callers still waiting on an abandoned
    /// fetch get its result, but the cache does not store it.
    pub fn invalidate_where<P>(&self, pred: P) -> Vec<K>
    where
        P: Fn(&K) -> bool,
    {
        let mut entries = self.entries.write();
        let mut invalidated = Vec::new();

        for (key, entry) in entries.iter_mut().filter(|(key, _)| pred(key)) {
            entry.stale = true;
            if let Some((generation, _)) = entry.in_flight.take() {
                debug!(key = ?key, generation, "Abandoned superseded fetch");
            }
            invalidated.push(key.clone());
        }

        invalidated
    }

    /// Whether `key` needs a fetch: never fetched, stale, or last fetched
    /// `interval` ago or more. Keys with a fetch in flight are never due.
    ///
    /// A failed fetch counts as an attempt, so failing keys retry once per
    /// interval rather than on every call.
    pub fn is_due(&self, key: &K, interval: Duration, now: Instant) -> bool {
        let entries = self.entries.read();
        match entries.get(key) {
            None => true,
            Some(entry) if entry.in_flight.is_some() => false,
            Some(entry) if entry.stale => true,
            Some(entry) => match entry.settled_at {
                Some(settled_at) => now.saturating_duration_since(settled_at) >= interval,
                None => true,
            },
        }
    }

    pub fn is_fetching(&self, key: &K) -> bool {
        self.entries
            .read()
            .get(key)
            .map(|entry| entry.in_flight.is_some())
            .unwrap_or(false)
    }

    pub fn keys(&self) -> Vec<K> {
        self.entries.read().keys().cloned().collect()
    }

    /// Drop entries that have been settled for `max_idle` or longer.
    ///
    /// Entries with a fetch in flight and keys matched by `keep` are retained.
    /// Returns the evicted keys.
    pub fn evict_idle<P>(&self, now: Instant, max_idle: Duration, keep: P) -> Vec<K>
    where
        P: Fn(&K) -> bool,
    {
        let mut entries = self.entries.write();
        let mut evicted = Vec::new();

        entries.retain(|key, entry| {
            if entry.in_flight.is_some() || keep(key) {
                return true;
            }
            let idle = entry
                .settled_at
                .map_or(true, |settled_at| now.saturating_duration_since(settled_at) >= max_idle);
            if idle {
                evicted.push(key.clone());
            }
            !idle
        });

        if !evicted.is_empty() {
            debug!(count = evicted.len(), "Evicted idle cache entries");
        }
        evicted
    }
}

/// Store the outcome of fetch `generation`, unless it was superseded.
fn settle<K, V>(
    entries: &RwLock<HashMap<K, Entry<V>>>,
    key: &K,
    generation: u64,
    result: &Result<V, ApiError>,
) where
    K: Eq + Hash + Debug,
    V: Clone,
{
    let mut entries = entries.write();
    let Some(entry) = entries.get_mut(key) else {
        return;
    };

    match &entry.in_flight {
        Some((current, _)) if *current == generation => {}
        _ => {
            trace!(key = ?key, generation, "Discarding superseded result");
            return;
        }
    }

    let now = Instant::now();
    entry.in_flight = None;
    entry.settled_at = Some(now);
    match result {
        Ok(value) => {
            entry.data = Some(value.clone());
            entry.updated_at = Some(now);
            entry.error = None;
            entry.stale = false;
        }
        Err(err) => {
            debug!(key = ?key, status = err.status, error = %err, "Fetch failed, keeping last value");
            entry.error = Some(err.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_fetch_stores_value() {
        let cache: QueryCache<&'static str, u32> = QueryCache::new();
        assert!(cache.snapshot(&"stats").is_loading());

        let value = cache.fetch("stats", || async { Ok(7) }).await.unwrap();
        assert_eq!(value, 7);

        let state = cache.snapshot(&"stats");
        assert_eq!(state.data, Some(7));
        assert!(!state.is_fetching);
        assert!(!state.is_stale);
        assert!(state.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_concurrent_fetches_are_deduplicated() {
        let cache: Arc<QueryCache<&'static str, u32>> = Arc::new(QueryCache::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let (release_tx, release_rx) = oneshot::channel::<()>();

        let first = {
            let cache = Arc::clone(&cache);
            let calls = Arc::clone(&calls);
            tokio::spawn(async move {
                cache
                    .fetch("stats", move || {
                        calls.fetch_add(1, Ordering::SeqCst);
                        async move {
                            let _ = release_rx.await;
                            Ok(1)
                        }
                    })
                    .await
            })
        };

        // Wait until the first fetch is registered
        while !cache.is_fetching(&"stats") {
            tokio::task::yield_now().await;
        }

        let second = {
            let cache = Arc::clone(&cache);
            let calls = Arc::clone(&calls);
            tokio::spawn(async move {
                cache
                    .fetch("stats", move || {
                        calls.fetch_add(1, Ordering::SeqCst);
                        async { Ok(2) }
                    })
                    .await
            })
        };

        tokio::task::yield_now().await;
        release_tx.send(()).unwrap();

        assert_eq!(first.await.unwrap().unwrap(), 1);
        assert_eq!(second.await.unwrap().unwrap(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_keeps_last_good_value() {
        let cache: QueryCache<&'static str, u32> = QueryCache::new();
        cache.fetch("stats", || async { Ok(10) }).await.unwrap();

        let err = cache
            .fetch("stats", || async { Err(ApiError::network("connection refused")) })
            .await;
        assert!(err.is_err());

        let state = cache.snapshot(&"stats");
        assert_eq!(state.data, Some(10));
        assert_eq!(state.error.as_ref().map(|e| e.status), Some(0));
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_success_clears_previous_error() {
        let cache: QueryCache<&'static str, u32> = QueryCache::new();
        let _ = cache
            .fetch("stats", || async { Err(ApiError::from_response(500, b"{}")) })
            .await;
        assert!(cache.snapshot(&"stats").error.is_some());

        cache.fetch("stats", || async { Ok(3) }).await.unwrap();
        let state = cache.snapshot(&"stats");
        assert!(state.error.is_none());
        assert_eq!(state.data, Some(3));
    }

    #[tokio::test]
    async fn test_invalidate_marks_stale_and_due() {
        let cache: QueryCache<String, u32> = QueryCache::new();
        cache.fetch("admin-transactions:AAPL".to_string(), || async { Ok(1) }).await.unwrap();
        cache.fetch("admin-transactions:MSFT".to_string(), || async { Ok(2) }).await.unwrap();
        cache.fetch("platform-stats".to_string(), || async { Ok(3) }).await.unwrap();

        let now = Instant::now();
        let hour = Duration::from_secs(3600);
        assert!(!cache.is_due(&"platform-stats".to_string(), hour, now));

        let mut invalidated = cache.invalidate_where(|key| key.starts_with("admin-transactions"));
        invalidated.sort();
        assert_eq!(invalidated, vec!["admin-transactions:AAPL", "admin-transactions:MSFT"]);

        assert!(cache.snapshot(&"admin-transactions:AAPL".to_string()).is_stale);
        assert!(cache.is_due(&"admin-transactions:AAPL".to_string(), hour, now));
        assert!(!cache.is_due(&"platform-stats".to_string(), hour, now));

        // Stale data stays visible until the refetch lands
        assert_eq!(cache.snapshot(&"admin-transactions:AAPL".to_string()).data, Some(1));
    }

    #[tokio::test]
    async fn test_superseded_fetch_is_not_stored() {
        let cache: QueryCache<&'static str, u32> = QueryCache::new();
        let (release_tx, release_rx) = oneshot::channel::<()>();

        let cache = Arc::new(cache);
        let slow = {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move {
                cache
                    .fetch("stats", || async move {
                        let _ = release_rx.await;
                        Ok(1)
                    })
                    .await
            })
        };
        while !cache.is_fetching(&"stats") {
            tokio::task::yield_now().await;
        }

        cache.invalidate_where(|_| true);
        assert!(!cache.is_fetching(&"stats"));

        let fresh = cache.fetch("stats", || async { Ok(2) }).await.unwrap();
        assert_eq!(fresh, 2);

        release_tx.send(()).unwrap();
        assert_eq!(slow.await.unwrap().unwrap(), 1);

        assert_eq!(cache.snapshot(&"stats").data, Some(2));
    }

    #[tokio::test]
    async fn test_is_due_by_age() {
        let cache: QueryCache<&'static str, u32> = QueryCache::new();
        assert!(cache.is_due(&"stats", Duration::from_secs(30), Instant::now()));

        cache.fetch("stats", || async { Ok(1) }).await.unwrap();
        let now = Instant::now();
        assert!(!cache.is_due(&"stats", Duration::from_secs(30), now));
        assert!(cache.is_due(&"stats", Duration::from_secs(30), now + Duration::from_secs(31)));
        assert!(cache.is_due(&"stats", Duration::ZERO, now));
    }

    #[tokio::test]
    async fn test_failed_key_waits_for_interval() {
        let cache: QueryCache<&'static str, u32> = QueryCache::new();
        let _ = cache
            .fetch("stats", || async { Err(ApiError::network("timeout")) })
            .await;

        let now = Instant::now();
        assert!(!cache.is_due(&"stats", Duration::from_secs(30), now));
        assert!(cache.is_due(&"stats", Duration::from_secs(30), now + Duration::from_secs(30)));
    }

    #[tokio::test]
    async fn test_evict_idle_drops_only_old_unkept_entries() {
        let cache: QueryCache<&'static str, u32> = QueryCache::new();
        cache.fetch("stats", || async { Ok(1) }).await.unwrap();
        cache.fetch("stocks", || async { Ok(2) }).await.unwrap();
        let now = Instant::now();
        let max_idle = Duration::from_secs(300);

        assert!(cache.evict_idle(now, max_idle, |_| false).is_empty());

        let later = now + Duration::from_secs(301);
        let evicted = cache.evict_idle(later, max_idle, |key| *key == "stocks");
        assert_eq!(evicted, vec!["stats"]);
        assert!(cache.snapshot(&"stats").data.is_none());
        assert_eq!(cache.snapshot(&"stocks").data, Some(2));
    }

    #[tokio::test]
    async fn test_evict_idle_keeps_in_flight_entries() {
        let cache: Arc<QueryCache<&'static str, u32>> = Arc::new(QueryCache::new());
        let (release_tx, release_rx) = oneshot::channel::<()>();

        let pending = {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move {
                cache
                    .fetch("stats", || async move {
                        let _ = release_rx.await;
                        Ok(5)
                    })
                    .await
            })
        };
        while !cache.is_fetching(&"stats") {
            tokio::task::yield_now().await;
        }

        let far = Instant::now() + Duration::from_secs(3600);
        assert!(cache.evict_idle(far, Duration::from_secs(300), |_| false).is_empty());

        release_tx.send(()).unwrap();
        assert_eq!(pending.await.unwrap().unwrap(), 5);
        assert_eq!(cache.snapshot(&"stats").data, Some(5));
    }
}
