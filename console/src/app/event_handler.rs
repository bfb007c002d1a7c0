//! # Event Handler
//!
//! Applies async task results to the application state.

use crate::app::state::Notification;
use crate::app::{App, AppEvent};
use crate::cache::{MutationKind, QueryKey};
use crate::core::error::ApiError;
use crate::services::mutations::{failure_title, MutationOutcome};

impl App {
    /// Apply one async result. Holds the write lock only for this event.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::QueryFinished { key, result } => self.handle_query_finished(key, result),
            AppEvent::MutationFinished { kind, symbol, result } => {
                self.handle_mutation_finished(kind, symbol, result)
            }
        }
    }

    fn handle_query_finished(&mut self, key: QueryKey, result: Result<(), ApiError>) {
        let mut state = self.state.write();
        state.needs_repaint = true;

        match result {
            Ok(()) => {
                if state.failing_queries.remove(&key) {
                    tracing::info!(key = %key, "Query recovered");
                }
            }
            Err(err) => {
                if state.failing_queries.insert(key.clone()) {
                    let title = match key {
                        QueryKey::PlatformStats => "Failed to load dashboard data",
                        QueryKey::AdminTransactions(_) => "Failed to load transactions",
                    };
                    state
                        .pending_notifications
                        .push(Notification::error(title, err.message));
                }
            }
        }
    }

    fn handle_mutation_finished(
        &mut self,
        kind: MutationKind,
        symbol: String,
        result: Result<MutationOutcome, ApiError>,
    ) {
        let mut state = self.state.write();
        state.needs_repaint = true;

        match kind {
            MutationKind::CreateStock => state.pending.create = false,
            MutationKind::Mint => state.pending.mint = false,
            MutationKind::Burn => state.pending.burn = false,
            MutationKind::UpdateStock => {
                state.pending.status_updates.remove(&symbol);
            }
        }

        match result {
            Ok(outcome) => {
                let (title, description) = outcome.summary();
                tracing::info!(kind = ?kind, symbol = %symbol, "{}", title);
                state
                    .pending_notifications
                    .push(Notification::success(title, description));

                match kind {
                    MutationKind::CreateStock => state.create_form.reset(),
                    MutationKind::Mint => state.mint_form.reset(),
                    MutationKind::Burn => state.burn_form.reset(),
                    MutationKind::UpdateStock => {}
                }
            }
            Err(err) => {
                // Form input is kept so the user can resubmit
                state
                    .pending_notifications
                    .push(Notification::error(failure_title(kind), err.message));
            }
        }
    }
}
