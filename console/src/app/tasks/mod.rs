//! Async background tasks: query refetches and mutations.

pub(crate) mod mutations;
pub(crate) mod queries;

use crate::app::events::AppEvent;
use crate::cache::QueryClient;
use async_channel::Sender;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Everything a task needs to run off the UI thread and report back.
#[derive(Clone)]
pub(crate) struct TaskContext {
    pub runtime: Handle,
    pub queries: Arc<QueryClient>,
    pub event_tx: Sender<AppEvent>,
}
