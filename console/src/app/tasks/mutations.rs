//! # Mutation Tasks
//!
//! Runs a validated mutation off the UI thread.

use super::TaskContext;
use crate::app::events::AppEvent;
use crate::services::mutations::{self, Mutation};

/// Execute `mutation` and send [`AppEvent::MutationFinished`] once the server
/// answered and the affected queries were refetched.
pub(crate) fn spawn_mutation(ctx: &TaskContext, mutation: Mutation) {
    let kind = mutation.kind();
    let symbol = mutation.symbol().to_string();
    tracing::info!(kind = ?kind, symbol = %symbol, "Submitting mutation");

    let queries = ctx.queries.clone();
    let event_tx = ctx.event_tx.clone();
    ctx.runtime.spawn(async move {
        let result = mutations::execute(&queries, mutation).await;
        if event_tx
            .send(AppEvent::MutationFinished { kind, symbol, result })
            .await
            .is_err()
        {
            tracing::warn!(kind = ?kind, "Event channel closed before mutation result was delivered");
        }
    });
}
