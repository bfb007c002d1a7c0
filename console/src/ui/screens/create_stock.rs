//! # Create Stock Screen
//!
//! Form for listing a new tokenized stock.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// Render the create-stock form.
///
/// Edits are made on a copy of the form and written back when a field changes,
/// so the state lock is only taken for the write.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let mut form = state.create_form.clone();
    let errors = &state.create_form.errors;
    let pending = state.pending.create;
    let mut changed = false;

    egui::Frame::group(ui.style()).fill(theme.surface).show(ui, |ui| {
        forms::render_form_heading(
            ui,
            "Create New Stock Token",
            "Create a new tokenized stock on the Hedera network",
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
                changed |= forms::render_text_input(
                    ui,
                    "Initial Supply *",
                    &mut form.initial_supply,
                    "e.g., 1000",
                    errors.get("initial_supply"),
                    theme,
                );
            });
            ui.add_space(16.0);
            ui.vertical(|ui| {
                changed |= forms::render_text_input(
                    ui,
                    "Stock Name *",
                    &mut form.name,
                    "e.g., Apple Inc.",
                    errors.get("name"),
                    theme,
                );
                changed |= forms::render_text_input(
                    ui,
                    "Price Per Token (KES) *",
                    &mut form.price_per_token,
                    "e.g., 150.50",
                    errors.get("price_per_token"),
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
        ui.label(
            egui::RichText::new("Provide a URL to verify proof of custody for the underlying stock")
                .small()
                .color(theme.dim),
        );
        ui.add_space(10.0);

        forms::render_error_summary(ui, errors, theme);
        if forms::render_submit_button(ui, "Create Stock Token", "Creating Stock...", pending, theme) {
            write_back(app, &form, changed);
            changed = false;
            app.submit_create();
        }
    });

    write_back(app, &form, changed);
}

fn write_back(app: &App, form: &crate::forms::CreateStockForm, changed: bool) {
    if !changed {
        return;
    }
    let mut state = app.state.write();
    let target = &mut state.create_form;
    target.symbol = form.symbol.clone();
    target.name = form.name.clone();
    target.initial_supply = form.initial_supply.clone();
    target.price_per_token = form.price_per_token.clone();
    target.custody_verification_url = form.custody_verification_url.clone();
}
