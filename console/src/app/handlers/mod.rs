//! User action handlers.

pub(crate) mod forms;
pub(crate) mod navigation;
pub(crate) mod stocks;
