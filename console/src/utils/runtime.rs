//! Process-wide Tokio runtime for network tasks.
//!
//! egui owns the main thread, so HTTP calls run on this multi-threaded
//! runtime and report back through the app's event channel.

use once_cell::sync::OnceCell;
use tokio::runtime::{Builder, Runtime};

static TOKIO_RT: OnceCell<Runtime> = OnceCell::new();

/// Get the runtime, building it on first use.
pub fn runtime() -> std::io::Result<&'static Runtime> {
    TOKIO_RT.get_or_try_init(|| {
        Builder::new_multi_thread()
            .enable_all()
            .thread_name("admin-console-io")
            .build()
    })
}
