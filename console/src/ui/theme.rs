//! # Console Theme
//!
//! Dark slate palette with a teal accent for the admin console.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};
use shared::{StockStatus, TransactionStatus, TransactionType};

/// Application theme colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Normal text color
    pub normal: Color32,
    /// Accent for selected tabs, headings and primary buttons
    pub accent: Color32,
    /// Border color
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
    /// Card and panel background
    pub surface: Color32,
    /// Window background
    pub background: Color32,
    /// Loading placeholder bars
    pub skeleton: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            normal: Color32::from_rgb(226, 232, 240),
            accent: Color32::from_rgb(20, 184, 166),
            border: Color32::from_rgb(51, 65, 85),
            dim: Color32::from_rgb(148, 163, 184),
            success: Color32::from_rgb(34, 197, 94),
            error: Color32::from_rgb(239, 68, 68),
            warning: Color32::from_rgb(234, 179, 8),
            info: Color32::from_rgb(96, 165, 250),
            surface: Color32::from_rgb(30, 41, 59),
            background: Color32::from_rgb(15, 23, 42),
            skeleton: Color32::from_rgb(51, 65, 85),
        }
    }
}

impl Theme {
    /// Badge color for a stock listing status
    pub fn stock_status_color(&self, status: StockStatus) -> Color32 {
        match status {
            StockStatus::Active => self.success,
            StockStatus::Suspended => self.warning,
            StockStatus::Delisted => self.error,
        }
    }

    /// Badge color for a transaction status
    pub fn transaction_status_color(&self, status: TransactionStatus) -> Color32 {
        match status {
            TransactionStatus::Completed => self.success,
            TransactionStatus::Pending => self.warning,
            TransactionStatus::Failed => self.error,
        }
    }

    /// Badge color for a transaction type
    pub fn transaction_type_color(&self, tx_type: TransactionType) -> Color32 {
        match tx_type {
            TransactionType::Mint => self.success,
            TransactionType::Burn => self.error,
            TransactionType::TransferToUser | TransactionType::TransferFromUser => self.info,
        }
    }

    pub fn visuals(&self) -> Visuals {
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(self.normal);
        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.faint_bg_color = self.surface;
        visuals.extreme_bg_color = Color32::from_rgb(2, 6, 23);

        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.active.bg_stroke = Stroke::new(1.5, self.accent);
        visuals.widgets.open.bg_stroke = Stroke::new(1.0, self.accent);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(20, 184, 166, 90);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.hyperlink_color = self.info;

        visuals
    }

    /// Apply the theme to both egui color schemes.
    pub fn apply(&self, ctx: &Context) {
        let visuals = self.visuals();
        for scheme in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(scheme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(10.0, 5.0);
            });
        }
        tracing::debug!("Applied console theme");
    }
}
