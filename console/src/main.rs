//! Admin console entry point.

use admin_console::config::Config;
use admin_console::core::{AppError, Result};
use admin_console::logging::{self, LogConfig};
use admin_console::services::api::ApiClient;
use admin_console::ui::ConsoleApp;
use admin_console::utils::runtime;
use admin_console::App;
use std::sync::Arc;

const WINDOW_TITLE: &str = "Admin Panel";

fn main() {
    dotenvy::dotenv().ok();

    let _log_guard = logging::init(&LogConfig::from_env());

    if let Err(e) = run() {
        tracing::error!(error = %e, "Admin console failed to start");
        eprintln!("admin-console: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_env()?;
    tracing::info!(
        mode = ?config.mode,
        base_url = %config.api.base_url,
        explorer_network = %config.explorer_network,
        "Configuration loaded"
    );

    let client = ApiClient::new(&config.api)?;
    let rt = runtime::runtime().map_err(|e| AppError::State(format!("Tokio runtime: {}", e)))?;
    let app = App::new(Arc::new(client), config.explorer_network, rt.handle().clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(ConsoleApp::new(cc, app)))),
    )
    .map_err(|e| AppError::State(format!("Window: {}", e)))?;

    tracing::info!("Admin console closed");
    Ok(())
}
