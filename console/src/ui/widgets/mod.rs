//! # Reusable UI Widgets
//!
//! Common widgets used across screens.

pub mod forms;
pub mod nav_bar;
pub mod notifications;
pub mod stock_card;
pub mod tables;
