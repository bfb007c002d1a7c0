//! # Stock Tokenization Admin Console - Library Root
//!
//! A **native desktop GUI** for platform administrators of the stock
//! tokenization service. Admins list new stock tokens, mint and burn supply,
//! change listing status, watch platform figures, and audit transactions.
//! Every durable record lives behind the tokenization HTTP API; this crate
//! only reads snapshots and issues admin requests.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              admin-console (this crate)                │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI, native window     │
//! │  egui_extras   - Transaction table                     │
//! │  egui-notify   - Toasts                                │
//! │  Tokio         - Async runtime for requests            │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (JSON)
//!          ▼
//! ┌─────────────────────────┐
//! │  Tokenization API       │
//! │  /tokenization/admin/*  │
//! └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: orchestrator, state, event handling and async tasks
//! - **cache**: keyed query cache with invalidation and periodic refetch
//! - **config**: environment-driven startup configuration
//! - **core**: error types and the `TokenizationService` trait
//! - **forms**: form state and validation
//! - **logging**: tracing setup (stderr plus daily log file)
//! - **services**: HTTP client, admin endpoints and mutations
//! - **ui**: screens, widgets and theme
//! - **utils**: number formatting and the Tokio runtime
//!
//! ## Data Flow
//!
//! ```text
//! form submit ─► validate ─► spawn mutation ─► API write
//!                                                 │ ok
//!                                                 ▼
//!                          invalidate scopes ─► refetch observed queries
//!                                                 │
//!                     AppEvent ◄──────────────────┘
//!                        │
//!                        ▼
//!              toast + form reset (next frame)
//! ```

pub mod app;
pub mod cache;
pub mod config;
pub mod core;
pub mod forms;
pub mod logging;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::App;
pub use config::Config;
