//! # Stock Card Widgets
//!
//! Platform stat cards and per-stock cards for the dashboard.

use crate::ui::theme::Theme;
use crate::ui::widgets::tables::render_skeleton_bar;
use crate::utils::format::{format_number, format_price, stock_total_value, CURRENCY};
use shared::{StockStatus, StockSummary};

pub const STAT_CARD_WIDTH: f32 = 230.0;
pub const STOCK_CARD_WIDTH: f32 = 300.0;

/// One aggregate figure. `value` is `None` while loading.
pub fn render_stat_card(
    ui: &mut egui::Ui,
    title: &str,
    value: Option<String>,
    caption: &str,
    theme: &Theme,
) {
    egui::Frame::group(ui.style()).fill(theme.surface).show(ui, |ui| {
        ui.set_width(STAT_CARD_WIDTH);
        ui.colored_label(theme.dim, title);
        ui.add_space(4.0);
        match value {
            Some(value) => {
                ui.label(egui::RichText::new(value).size(22.0).strong());
            }
            None => render_skeleton_bar(ui, 120.0, theme),
        }
        ui.add_space(2.0);
        ui.label(egui::RichText::new(caption).small().color(theme.dim));
    });
}

fn render_figure(ui: &mut egui::Ui, label: &str, value: String, theme: &Theme) {
    ui.colored_label(theme.dim, label);
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        ui.monospace(value);
    });
    ui.end_row();
}

/// Render one stock summary with a status picker.
///
/// Returns the newly picked status, if the admin changed it this frame.
/// The picker is disabled while a status change for this stock is in flight.
pub fn render_stock_card(
    ui: &mut egui::Ui,
    stock: &StockSummary,
    status_pending: bool,
    theme: &Theme,
) -> Option<StockStatus> {
    let mut picked = None;

    egui::Frame::group(ui.style()).fill(theme.surface).show(ui, |ui| {
        ui.set_width(STOCK_CARD_WIDTH);

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&stock.symbol).size(18.0).strong());
                ui.colored_label(theme.dim, &stock.name);
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{} {}", CURRENCY, format_price(stock.price_per_token)))
                            .strong()
                            .color(theme.accent),
                    );
                    ui.label(egui::RichText::new("per token").small().color(theme.dim));
                });
            });
        });

        ui.add_space(6.0);
        egui::Grid::new(("stock_figures", &stock.symbol))
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                render_figure(ui, "Total Supply", format_number(stock.total_supply), theme);
                render_figure(ui, "Circulating", format_number(stock.circulating_supply), theme);
                render_figure(ui, "Pool Balance", format_number(stock.pool_balance), theme);
                render_figure(ui, "Total Value", stock_total_value(stock), theme);
            });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.colored_label(theme.stock_status_color(stock.status), "\u{25CF}");
            ui.add_enabled_ui(!status_pending, |ui| {
                let mut selected = stock.status;
                egui::ComboBox::from_id_salt(("stock_status", &stock.symbol))
                    .selected_text(selected.title())
                    .show_ui(ui, |ui| {
                        for status in StockStatus::all() {
                            ui.selectable_value(&mut selected, *status, status.title());
                        }
                    });
                if selected != stock.status {
                    picked = Some(selected);
                }
            });
            if status_pending {
                ui.spinner();
            }
        });
    });

    picked
}
