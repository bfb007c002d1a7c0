//! Stock listing status changes from the dashboard.

use crate::app::state::AppState;
use crate::app::tasks::mutations::spawn_mutation;
use crate::app::tasks::TaskContext;
use crate::services::mutations::Mutation;
use parking_lot::RwLock;
use shared::{StockStatus, UpdateStockInput};
use std::sync::Arc;

/// Handle a status pick on a stock card
pub(crate) fn change_stock_status(
    state: &Arc<RwLock<AppState>>,
    ctx: &TaskContext,
    symbol: String,
    status: StockStatus,
) -> bool {
    {
        let mut state = state.write();
        if !state.pending.status_updates.insert(symbol.clone()) {
            tracing::debug!(symbol = %symbol, "Status change already in flight");
            return false;
        }
    }

    spawn_mutation(
        ctx,
        Mutation::UpdateStock {
            symbol,
            input: UpdateStockInput {
                status: Some(status),
                ..Default::default()
            },
        },
    );
    true
}
