//! # Transactions Screen
//!
//! Filterable table of supply movements with explorer links.

use crate::app::{App, AppState};
use crate::forms::TransactionFilterForm;
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};
use crate::utils::format::showing_count;
use shared::{TransactionStatus, TransactionType};

/// Render transactions screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    egui::Frame::group(ui.style()).fill(theme.surface).show(ui, |ui| {
        forms::render_form_heading(
            ui,
            "Admin Transactions",
            "View and filter all administrative transactions",
            theme,
        );

        render_filter_bar(ui, &state.filter_form, app, theme);
        ui.add_space(12.0);

        let query = app.queries().transactions_state(&state.transaction_filter);
        match (&query.data, &query.error) {
            (None, Some(err)) => {
                tables::render_empty_state(ui, "Failed to load transactions", Some(&err.message), theme);
            }
            (None, None) => tables::render_skeleton_table(ui, theme),
            (Some(transactions), _) if transactions.is_empty() => {
                tables::render_empty_state(ui, "No transactions found", None, theme);
            }
            (Some(transactions), error) => {
                if let Some(err) = error {
                    ui.colored_label(theme.warning, format!("Refresh failed: {}", err.message));
                }
                egui::ScrollArea::horizontal().show(ui, |ui| {
                    tables::render_transactions_table(ui, transactions, &state.explorer_network, theme);
                });
                ui.add_space(8.0);
                ui.colored_label(theme.dim, showing_count(transactions.len()));
            }
        }
    });
}

/// Filter controls. Any change is applied immediately, which swaps the query key.
fn render_filter_bar(ui: &mut egui::Ui, filter_form: &TransactionFilterForm, app: &mut App, theme: &Theme) {
    let mut form = filter_form.clone();
    let mut changed = false;
    let mut clear = false;

    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new("Stock Symbol").strong());
            changed |= ui
                .add_sized([160.0, 26.0], egui::TextEdit::singleline(&mut form.symbol).hint_text("e.g., AAPL"))
                .changed();
        });

        ui.vertical(|ui| {
            ui.label(egui::RichText::new("Transaction Type").strong());
            let before = form.tx_type;
            egui::ComboBox::from_id_salt("filter_tx_type")
                .width(170.0)
                .selected_text(form.tx_type.map(|t| t.title()).unwrap_or("All Types"))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut form.tx_type, None, "All Types");
                    for tx_type in TransactionType::all() {
                        ui.selectable_value(&mut form.tx_type, Some(*tx_type), tx_type.title());
                    }
                });
            changed |= before != form.tx_type;
        });

        ui.vertical(|ui| {
            ui.label(egui::RichText::new("Status").strong());
            let before = form.status;
            egui::ComboBox::from_id_salt("filter_status")
                .width(150.0)
                .selected_text(form.status.map(|s| s.title()).unwrap_or("All Statuses"))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut form.status, None, "All Statuses");
                    for status in TransactionStatus::all() {
                        ui.selectable_value(&mut form.status, Some(*status), status.title());
                    }
                });
            changed |= before != form.status;
        });

        ui.vertical(|ui| {
            ui.label(egui::RichText::new("Limit").strong());
            changed |= ui
                .add_sized([80.0, 26.0], egui::TextEdit::singleline(&mut form.limit).hint_text("All"))
                .changed();
            if let Some(error) = filter_form.errors.get("limit") {
                ui.label(egui::RichText::new(error).small().color(theme.error));
            }
        });

        ui.vertical(|ui| {
            ui.label(" ");
            clear = ui.button("Clear Filters").clicked();
        });
    });

    if clear {
        app.clear_filter();
    } else if changed {
        {
            let mut state = app.state.write();
            state.filter_form.symbol = form.symbol;
            state.filter_form.tx_type = form.tx_type;
            state.filter_form.status = form.status;
            state.filter_form.limit = form.limit;
        }
        app.apply_filter();
    }
}
