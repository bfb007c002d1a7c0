//! # Query Tasks
//!
//! Background refetches of observed queries.

use super::TaskContext;
use crate::app::events::AppEvent;
use crate::cache::QueryKey;

/// Refetch `key` on the runtime and report back through the event channel.
///
/// The cache deduplicates, so spawning twice for the same key costs one request.
pub(crate) fn spawn_refetch(ctx: &TaskContext, key: QueryKey) {
    tracing::debug!(key = %key, "Spawning refetch");

    let queries = ctx.queries.clone();
    let event_tx = ctx.event_tx.clone();
    ctx.runtime.spawn(async move {
        let result = queries.refetch(key.clone()).await;
        let _ = event_tx.send(AppEvent::QueryFinished { key, result }).await;
    });
}
