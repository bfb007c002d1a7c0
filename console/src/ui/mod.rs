//! # GUI Rendering
//!
//! egui rendering for the admin console and the eframe entry point.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, Tab};
use std::time::{Duration, Instant};
use theme::Theme;
use widgets::notifications::NotificationManager;

/// Upper bound between frames so refetch intervals fire without input.
const IDLE_REPAINT: Duration = Duration::from_secs(1);
/// Frame interval while requests are in flight, so results show promptly.
const BUSY_REPAINT: Duration = Duration::from_millis(100);

/// Main render function, called every frame
pub fn render(ctx: &egui::Context, app: &mut App, theme: &Theme) {
    // Lock released before any widget is drawn
    let state = match app.state.try_read() {
        Some(state_guard) => state_guard.clone(),
        None => return,
    };

    egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
        widgets::nav_bar::render_nav_bar(ui, &state, app, theme);
        ui.add_space(6.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            ui.add_space(8.0);
            match state.current_tab {
                Tab::Dashboard => screens::dashboard::render(ui, &state, app, theme),
                Tab::Create => screens::create_stock::render(ui, &state, app, theme),
                Tab::Mint => screens::mint_stock::render(ui, &state, app, theme),
                Tab::Burn => screens::burn_stock::render(ui, &state, app, theme),
                Tab::Transactions => screens::transactions::render(ui, &state, app, theme),
            }
        });
    });
}

/// eframe application wrapping the orchestrator and toast layer.
pub struct ConsoleApp {
    app: App,
    notifications: NotificationManager,
    theme: Theme,
}

impl ConsoleApp {
    pub fn new(cc: &eframe::CreationContext<'_>, app: App) -> Self {
        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);

        Self {
            app,
            notifications: NotificationManager::new(),
            theme,
        }
    }
}

impl eframe::App for ConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let spawned = self.app.on_tick(Instant::now());
        if spawned > 0 {
            tracing::debug!(spawned, "Scheduled query refetches");
        }

        for notification in self.app.take_notifications() {
            self.notifications.notify(&notification);
        }

        render(ctx, &mut self.app, &self.theme);
        self.notifications.show(ctx);

        let needs_repaint = std::mem::take(&mut self.app.state.write().needs_repaint);
        if needs_repaint {
            ctx.request_repaint();
        } else if self.app.is_busy() {
            ctx.request_repaint_after(BUSY_REPAINT);
        } else {
            ctx.request_repaint_after(IDLE_REPAINT);
        }
    }
}
