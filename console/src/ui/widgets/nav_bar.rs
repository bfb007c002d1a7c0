//! # Navigation Bar
//!
//! Page title plus the tab strip switching between console screens.

use crate::app::{App, AppState, Tab};
use crate::ui::theme::Theme;

pub const PAGE_TITLE: &str = "Admin Panel";
pub const PAGE_DESCRIPTION: &str = "Manage stock tokens, mint, burn, and view platform statistics";

/// Render the header and tabs. Clicking a tab switches screens through the app.
pub fn render_nav_bar(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.add_space(8.0);
    ui.label(egui::RichText::new(PAGE_TITLE).size(26.0).strong());
    ui.label(egui::RichText::new(PAGE_DESCRIPTION).color(theme.dim));
    ui.add_space(10.0);

    ui.horizontal(|ui| {
        for tab in Tab::all() {
            let selected = state.current_tab == *tab;
            let mut text = egui::RichText::new(tab.title()).size(15.0);
            if selected {
                text = text.strong().color(theme.accent);
            }
            if ui.selectable_label(selected, text).clicked() && !selected {
                app.handle_tab_change(*tab);
            }

            if pending_badge(state, *tab) {
                ui.spinner();
            }
            ui.add_space(6.0);
        }
    });
}

/// Whether a tab has a submission in flight
fn pending_badge(state: &AppState, tab: Tab) -> bool {
    match tab {
        Tab::Create => state.pending.create,
        Tab::Mint => state.pending.mint,
        Tab::Burn => state.pending.burn,
        Tab::Dashboard => !state.pending.status_updates.is_empty(),
        Tab::Transactions => false,
    }
}
