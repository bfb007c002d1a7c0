//! File-based logging initialization

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const ENV_LOG_DIR: &str = "ADMIN_CONSOLE_LOG_DIR";
pub const LOG_FILE_NAME: &str = "admin-console.log";
pub const DEFAULT_FILTER: &str = "admin_console=info,warn";

/// Logging settings.
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub log_dir: PathBuf,
    /// Filter used when `RUST_LOG` is unset or invalid
    pub default_filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            default_filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = lib_utils::envs::get_env_opt(ENV_LOG_DIR) {
            config.log_dir = PathBuf::from(dir);
        }
        config
    }
}

/// Initialize the logging system
///
/// Sets up:
/// - Daily rotated file log `admin-console.log` in the configured directory
/// - Compact stderr output
/// - `RUST_LOG` filtering, falling back to the configured default
/// - Panic hook that logs the panic before the default handler runs
///
/// Returns the appender guard; keep it alive until exit so buffered lines are flushed.
/// When the log directory cannot be created, logging goes to stderr only.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false).compact();

    let guard = match fs::create_dir_all(&config.log_dir) {
        Ok(()) => {
            let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer)
                .with(file_layer)
                .init();
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer)
                .init();
            tracing::warn!(
                log_dir = %config.log_dir.display(),
                error = %e,
                "Failed to create log directory, logging to stderr only"
            );
            None
        }
    };

    setup_panic_hook();

    tracing::info!(
        log_dir = %config.log_dir.display(),
        file = LOG_FILE_NAME,
        "Logging initialized"
    );

    guard
}

/// Log panics with their location before handing over to the default hook.
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(location = %location, message = %message, "Application panic");

        default_panic(panic_info);
    }));
}
