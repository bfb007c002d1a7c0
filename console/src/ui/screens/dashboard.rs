//! # Dashboard Screen
//!
//! Platform stat cards and one card per tokenized stock.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{stock_card, tables};
use crate::utils::format::{format_currency, format_number};
use shared::PlatformStats;

pub const LOAD_ERROR: &str = "Failed to load dashboard data";
pub const EMPTY_STOCKS: &str = "No stocks created yet. Create your first stock token above.";

/// Title, value and caption for each stat card, in display order.
pub fn stat_cards(stats: Option<&PlatformStats>) -> [(&'static str, Option<String>, &'static str); 4] {
    [
        (
            "Total Stocks",
            stats.map(|s| format_number(s.total_stocks as f64)),
            "Listed on platform",
        ),
        (
            "Total Holders",
            stats.map(|s| format_number(s.total_holders as f64)),
            "Unique token holders",
        ),
        (
            "Value Locked",
            stats.map(|s| format_currency(s.total_value_locked)),
            "In circulation",
        ),
        (
            "Pool Balance",
            stats.map(|s| format_currency(s.total_pool_value)),
            "Available to trade",
        ),
    ]
}

/// Render the dashboard
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let query = app.queries().stats_state();

    if let (None, Some(err)) = (&query.data, &query.error) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_height(120.0);
            ui.vertical_centered(|ui| {
                ui.add_space(30.0);
                ui.colored_label(theme.error, LOAD_ERROR);
                ui.colored_label(theme.dim, &err.message);
            });
        });
        return;
    }

    if let (Some(_), Some(err)) = (&query.data, &query.error) {
        ui.colored_label(
            theme.warning,
            format!("Showing last loaded figures. Refresh failed: {}", err.message),
        );
        ui.add_space(4.0);
    }

    let stats = query.data.as_deref();

    ui.horizontal_wrapped(|ui| {
        for (title, value, caption) in stat_cards(stats) {
            stock_card::render_stat_card(ui, title, value, caption, theme);
        }
    });

    ui.add_space(20.0);
    ui.label(egui::RichText::new("Stock Tokens").size(20.0).strong());
    ui.colored_label(theme.dim, "All tokenized stocks on the platform");
    ui.add_space(10.0);

    let Some(stats) = stats else {
        ui.horizontal_wrapped(|ui| {
            for _ in 0..3 {
                egui::Frame::group(ui.style()).fill(theme.surface).show(ui, |ui| {
                    ui.set_width(stock_card::STOCK_CARD_WIDTH);
                    tables::render_skeleton_bar(ui, 80.0, theme);
                    ui.add_space(6.0);
                    for _ in 0..4 {
                        tables::render_skeleton_bar(ui, 200.0, theme);
                    }
                });
            }
        });
        return;
    };

    if stats.stocks.is_empty() {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            tables::render_empty_state(ui, EMPTY_STOCKS, None, theme);
        });
        return;
    }

    let mut status_change = None;
    ui.horizontal_wrapped(|ui| {
        for stock in &stats.stocks {
            let pending = state.pending.status_updates.contains(&stock.symbol);
            if let Some(status) = stock_card::render_stock_card(ui, stock, pending, theme) {
                status_change = Some((stock.symbol.clone(), status));
            }
        }
    });

    if let Some((symbol, status)) = status_change {
        app.change_stock_status(symbol, status);
    }
}
