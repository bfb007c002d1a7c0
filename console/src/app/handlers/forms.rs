//! # Form Handlers
//!
//! Submit handlers for the create, mint and burn forms. Validation failures
//! stay local: the field errors are stored on the form and no task is spawned.

use crate::app::state::AppState;
use crate::app::tasks::mutations::spawn_mutation;
use crate::app::tasks::TaskContext;
use crate::services::mutations::Mutation;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle create-stock submit
///
/// Returns `true` when a mutation was spawned.
pub(crate) fn submit_create(state: &Arc<RwLock<AppState>>, ctx: &TaskContext) -> bool {
    let mutation = {
        let mut state = state.write();
        if state.pending.create {
            return false;
        }

        match state.create_form.validate() {
            Ok(input) => {
                state.create_form.errors = Default::default();
                state.pending.create = true;
                Mutation::CreateStock(input)
            }
            Err(errors) => {
                tracing::debug!(fields = errors.len(), "Create form rejected");
                state.create_form.errors = errors;
                return false;
            }
        }
    }; // Lock released before spawning

    spawn_mutation(ctx, mutation);
    true
}

/// Handle mint submit
pub(crate) fn submit_mint(state: &Arc<RwLock<AppState>>, ctx: &TaskContext) -> bool {
    let mutation = {
        let mut state = state.write();
        if state.pending.mint {
            return false;
        }

        match state.mint_form.validate() {
            Ok(input) => {
                state.mint_form.errors = Default::default();
                state.pending.mint = true;
                Mutation::Mint(input)
            }
            Err(errors) => {
                tracing::debug!(fields = errors.len(), "Mint form rejected");
                state.mint_form.errors = errors;
                return false;
            }
        }
    };

    spawn_mutation(ctx, mutation);
    true
}

/// Handle burn submit
pub(crate) fn submit_burn(state: &Arc<RwLock<AppState>>, ctx: &TaskContext) -> bool {
    let mutation = {
        let mut state = state.write();
        if state.pending.burn {
            return false;
        }

        match state.burn_form.validate() {
            Ok(input) => {
                state.burn_form.errors = Default::default();
                state.pending.burn = true;
                Mutation::Burn(input)
            }
            Err(errors) => {
                tracing::debug!(fields = errors.len(), "Burn form rejected");
                state.burn_form.errors = errors;
                return false;
            }
        }
    };

    spawn_mutation(ctx, mutation);
    true
}
