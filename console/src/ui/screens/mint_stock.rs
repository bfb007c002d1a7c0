//! # Mint Screen
//!
//! Increase a stock's supply after acquiring more underlying shares.

use crate::app::{App, AppState};
use crate::forms::MintStockForm;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let mut form = state.mint_form.clone();
    let errors = &state.mint_form.errors;
    let pending = state.pending.mint;
    let mut changed = false;

    egui::Frame::group(ui.style()).fill(theme.surface).show(ui, |ui| {
        forms::render_form_heading(
            ui,
            "Mint Stock Tokens",
            "Increase the supply of tokens when purchasing additional stocks",
            theme,
        );

        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                changed |= forms::render_text_input(
                    ui,
                    "Stock Symbol *",
                    &mut form.symbol,
                    "e.g., AAPL",
                    errors.get("symbol"),
                    theme,
                );
            });
            ui.add_space(16.0);
            ui.vertical(|ui| {
                changed |= forms::render_text_input(
                    ui,
                    "Amount to Mint *",
                    &mut form.amount,
                    "e.g., 100",
                    errors.get("amount"),
                    theme,
                );
            });
        });

        changed |= forms::render_text_input(
            ui,
            "Custody Verification URL (Optional)",
            &mut form.custody_verification_url,
            "https://...",
            errors.get("custody_verification_url"),
            theme,
        );
        changed |= forms::render_text_area(
            ui,
            "Notes (Optional)",
            &mut form.notes,
            "Add any relevant notes about this mint operation...",
            errors.get("notes"),
            theme,
        );
        ui.add_space(10.0);

        forms::render_error_summary(ui, errors, theme);
        if forms::render_submit_button(ui, "Mint Tokens", "Minting Tokens...", pending, theme) {
            write_back(app, &form, changed);
            changed = false;
            app.submit_mint();
        }
    });

    write_back(app, &form, changed);
}

fn write_back(app: &App, form: &MintStockForm, changed: bool) {
    if !changed {
        return;
    }
    let mut state = app.state.write();
    let target = &mut state.mint_form;
    target.symbol = form.symbol.clone();
    target.amount = form.amount.clone();
    target.custody_verification_url = form.custody_verification_url.clone();
    target.notes = form.notes.clone();
}
