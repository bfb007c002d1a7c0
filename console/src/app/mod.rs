//! # Application Orchestrator
//!
//! [`App`] coordinates the egui rendering layer, async tasks and shared state.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                 Main Thread (egui)                    │
//! │  App                                                  │
//! │  - on_tick()        drain events, schedule refetches  │
//! │  - submit_*()       validate forms, spawn mutations   │
//! │  - handle_event()   apply async results               │
//! │                                                       │
//! │  State: Arc<RwLock<AppState>>  (forms, tab, toasts)   │
//! │  Data:  Arc<QueryClient>       (cached API reads)     │
//! └───────────────────────────┬───────────────────────────┘
//!                             │ async_channel (unbounded)
//! ┌───────────────────────────▼───────────────────────────┐
//! │                Tokio runtime tasks                    │
//! │  - refetch(key)      background query refresh         │
//! │  - execute(mutation) write, then invalidate+refetch   │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! Locks on the state are held for the duration of one handler or one event,
//! never across an `.await`.

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::AppEvent;
pub use state::*;

use crate::cache::QueryClient;
use crate::core::service::TokenizationService;
use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::StockStatus;
use std::sync::Arc;
use std::time::Instant;
use tasks::TaskContext;
use tokio::runtime::Handle;

/// Main application orchestrator.
///
/// Created once by the binary and driven by the egui update loop: call
/// [`App::on_tick`] every frame, then render from [`App::state`] and
/// [`App::queries`].
pub struct App {
    /// Thread-safe shared application state.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    event_tx: Sender<AppEvent>,
    queries: Arc<QueryClient>,
    runtime: Handle,
}

impl App {
    /// Create the application around a tokenization service.
    ///
    /// `runtime` runs every network task; the UI thread never blocks on it.
    pub fn new(
        api: Arc<dyn TokenizationService>,
        explorer_network: impl Into<String>,
        runtime: Handle,
    ) -> Self {
        let (event_tx, event_rx) = unbounded();

        tracing::info!("App state initialized");

        Self {
            state: Arc::new(RwLock::new(AppState::new(explorer_network))),
            event_rx,
            event_tx,
            queries: Arc::new(QueryClient::new(api)),
            runtime,
        }
    }

    pub fn queries(&self) -> &Arc<QueryClient> {
        &self.queries
    }

    fn task_context(&self) -> TaskContext {
        TaskContext {
            runtime: self.runtime.clone(),
            queries: Arc::clone(&self.queries),
            event_tx: self.event_tx.clone(),
        }
    }

    /// Called every frame.
    ///
    /// 1. Applies every pending async result (non-blocking)
    /// 2. Publishes the keys rendered by the current tab to the query client
    /// 3. Drops cached entries that have been off screen for the cache time
    /// 4. Spawns refetches for observed keys that are missing, stale or old
    ///
    /// Returns the number of refetches spawned.
    pub fn on_tick(&mut self, now: Instant) -> usize {
        let mut events_processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            events_processed += 1;
            self.handle_event(event);
        }
        if events_processed > 0 {
            tracing::trace!(events_processed, "on_tick: processed events");
        }

        let observed = self.state.read().observed_keys();
        self.queries.observe_only(observed);
        self.queries.evict_unobserved(now);

        let due = self.queries.due_keys(now);
        if due.is_empty() {
            return 0;
        }

        let ctx = self.task_context();
        for key in &due {
            tasks::queries::spawn_refetch(&ctx, key.clone());
        }
        due.len()
    }

    /// Switch tabs
    pub fn handle_tab_change(&mut self, tab: Tab) {
        handlers::navigation::handle_tab_change(&self.state, tab);
    }

    /// Validate and submit the create-stock form. Returns `true` if submitted.
    pub fn submit_create(&mut self) -> bool {
        handlers::forms::submit_create(&self.state, &self.task_context())
    }

    /// Validate and submit the mint form. Returns `true` if submitted.
    pub fn submit_mint(&mut self) -> bool {
        handlers::forms::submit_mint(&self.state, &self.task_context())
    }

    /// Validate and submit the burn form. Returns `true` if submitted.
    pub fn submit_burn(&mut self) -> bool {
        handlers::forms::submit_burn(&self.state, &self.task_context())
    }

    /// Change a stock's listing status
    pub fn change_stock_status(&mut self, symbol: String, status: StockStatus) -> bool {
        handlers::stocks::change_stock_status(&self.state, &self.task_context(), symbol, status)
    }

    /// Apply the transaction filter form
    pub fn apply_filter(&mut self) {
        handlers::navigation::apply_filter(&self.state);
    }

    /// Reset the transaction filter
    pub fn clear_filter(&mut self) {
        handlers::navigation::clear_filter(&self.state);
    }

    /// Whether a mutation or an on-screen query is still running
    pub fn is_busy(&self) -> bool {
        self.state.read().pending.any() || self.queries.is_fetching_observed()
    }

    /// Drain notifications queued for display
    pub fn take_notifications(&self) -> Vec<Notification> {
        std::mem::take(&mut self.state.write().pending_notifications)
    }
}
