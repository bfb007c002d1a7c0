//! # Navigation Handlers
//!
//! Tab switching and the transaction filter bar.

use crate::app::state::{AppState, Tab};
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle tab change
pub(crate) fn handle_tab_change(state: &Arc<RwLock<AppState>>, tab: Tab) {
    let mut state = state.write();
    if state.current_tab != tab {
        tracing::debug!(from = ?state.current_tab, to = ?tab, "Tab changed");
        state.current_tab = tab;
    }
}

/// Apply the filter form. An invalid form keeps the previous filter.
pub(crate) fn apply_filter(state: &Arc<RwLock<AppState>>) {
    let mut state = state.write();
    match state.filter_form.validate() {
        Ok(filter) => {
            state.filter_form.errors = Default::default();
            if state.transaction_filter != filter {
                tracing::debug!(filter = ?filter, "Transaction filter changed");
                state.transaction_filter = filter;
            }
        }
        Err(errors) => {
            state.filter_form.errors = errors;
        }
    }
}

/// Clear every filter
pub(crate) fn clear_filter(state: &Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.filter_form.reset();
    state.transaction_filter = Default::default();
}
