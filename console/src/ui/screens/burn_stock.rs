//! # Burn Screen
//!
//! Decrease a stock's supply after selling underlying shares.

use crate::app::{App, AppState};
use crate::forms::BurnStockForm;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let mut form = state.burn_form.clone();
    let errors = &state.burn_form.errors;
    let pending = state.pending.burn;
    let mut changed = false;

    egui::Frame::group(ui.style()).fill(theme.surface).show(ui, |ui| {
        forms::render_form_heading(
            ui,
            "Burn Stock Tokens",
            "Decrease the supply of tokens when selling underlying stocks",
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
                    "Amount to Burn *",
                    &mut form.amount,
                    "e.g., 50",
                    errors.get("amount"),
                    theme,
                );
            });
        });

        changed |= forms::render_text_area(
            ui,
            "Reason (Optional)",
            &mut form.reason,
            "Explain the reason for burning these tokens...",
            errors.get("reason"),
            theme,
        );
        ui.add_space(10.0);

        forms::render_error_summary(ui, errors, theme);
        if forms::render_submit_button(ui, "Burn Tokens", "Burning Tokens...", pending, theme) {
            write_back(app, &form, changed);
            changed = false;
            app.submit_burn();
        }
    });

    write_back(app, &form, changed);
}

fn write_back(app: &App, form: &BurnStockForm, changed: bool) {
    if !changed {
        return;
    }
    let mut state = app.state.write();
    let target = &mut state.burn_form;
    target.symbol = form.symbol.clone();
    target.amount = form.amount.clone();
    target.reason = form.reason.clone();
}
