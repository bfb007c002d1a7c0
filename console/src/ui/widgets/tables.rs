//! # Table Components
//!
//! Transaction table plus the loading and empty placeholders shared by screens.

use crate::ui::theme::Theme;
use crate::utils::format::{explorer_url, format_number, type_label};
use egui_extras::{Column, TableBuilder};
use shared::{truncate_hash, Transaction};

const ROW_HEIGHT: f32 = 24.0;
const HEADERS: [&str; 6] = ["Symbol", "Type", "Amount", "Status", "Date", "TX Hash"];

/// Number of placeholder rows while the first page loads
pub const SKELETON_ROWS: usize = 5;

/// Render an empty state message
pub fn render_empty_state(
    ui: &mut egui::Ui,
    primary_text: &str,
    secondary_text: Option<&str>,
    theme: &Theme,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.colored_label(theme.dim, primary_text);
        if let Some(secondary) = secondary_text {
            ui.add_space(10.0);
            ui.colored_label(theme.dim, secondary);
        }
        ui.add_space(20.0);
    });
}

/// Grey bar standing in for a value that has not loaded yet
pub fn render_skeleton_bar(ui: &mut egui::Ui, width: f32, theme: &Theme) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 14.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 3.0, theme.skeleton);
}

fn table(ui: &mut egui::Ui) -> TableBuilder<'_> {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(90.0))
        .column(Column::exact(160.0))
        .column(Column::exact(110.0))
        .column(Column::exact(100.0))
        .column(Column::exact(190.0))
        .column(Column::remainder().at_least(140.0))
}

fn header_row(header: &mut egui_extras::TableRow<'_, '_>, theme: &Theme) {
    for title in HEADERS {
        header.col(|ui| {
            ui.colored_label(theme.dim, egui::RichText::new(title).strong());
        });
    }
}

/// Table of placeholder rows shown while transactions load
pub fn render_skeleton_table(ui: &mut egui::Ui, theme: &Theme) {
    table(ui)
        .header(ROW_HEIGHT, |mut header| header_row(&mut header, theme))
        .body(|mut body| {
            for _ in 0..SKELETON_ROWS {
                body.row(ROW_HEIGHT, |mut row| {
                    for width in [50.0, 90.0, 60.0, 70.0, 120.0, 80.0] {
                        row.col(|ui| render_skeleton_bar(ui, width, theme));
                    }
                });
            }
        });
}

/// Render the admin transactions table.
///
/// Rows with a chain hash link to the explorer for `network`; the rest show a dash.
pub fn render_transactions_table(
    ui: &mut egui::Ui,
    transactions: &[Transaction],
    network: &str,
    theme: &Theme,
) {
    table(ui)
        .header(ROW_HEIGHT, |mut header| header_row(&mut header, theme))
        .body(|body| {
            body.rows(ROW_HEIGHT, transactions.len(), |mut row| {
                let tx = &transactions[row.index()];

                row.col(|ui| {
                    ui.label(egui::RichText::new(&tx.symbol).strong());
                });
                row.col(|ui| {
                    ui.colored_label(theme.transaction_type_color(tx.tx_type), type_label(tx.tx_type));
                });
                row.col(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.monospace(format_number(tx.amount));
                    });
                });
                row.col(|ui| {
                    ui.colored_label(theme.transaction_status_color(tx.status), tx.status.as_str());
                });
                row.col(|ui| {
                    ui.label(lib_utils::time::format_display(tx.created_at));
                });
                row.col(|ui| match &tx.chain_tx_hash {
                    Some(hash) => {
                        ui.monospace(truncate_hash(hash));
                        ui.hyperlink_to("View", explorer_url(network, hash));
                    }
                    None => {
                        ui.colored_label(theme.dim, "\u{2014}");
                    }
                });
            });
        });
}
