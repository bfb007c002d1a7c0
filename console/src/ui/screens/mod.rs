//! # Screen Modules
//!
//! One module per console tab:
//!
//! - **[`dashboard`]**: platform stats and stock cards with status controls
//! - **[`create_stock`]**: list a new stock token
//! - **[`mint_stock`]**: increase a stock's supply
//! - **[`burn_stock`]**: decrease a stock's supply
//! - **[`transactions`]**: filterable transaction history
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
//!     // Read from the state snapshot and app.queries()
//!     // Call app.* methods for actions
//! }
//! ```
//!
//! Screens receive a cloned state snapshot so no lock is held while drawing.
//! Text edits are written back with a short write lock when a field changes.

pub mod burn_stock;
pub mod create_stock;
pub mod dashboard;
pub mod mint_stock;
pub mod transactions;
