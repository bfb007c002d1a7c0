//! # Notifications Widget
//!
//! Toast notifications using egui-notify for mutation results and load failures.

use crate::app::{Notification, NotificationLevel};
use egui_notify::Toasts;
use std::time::Duration;

const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        let toasts = Toasts::default().with_anchor(egui_notify::Anchor::BottomRight);

        Self { toasts }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notification produced by the app layer
    pub fn notify(&mut self, notification: &Notification) {
        let text = toast_text(notification);
        let toast = match notification.level {
            NotificationLevel::Success => self.toasts.success(text),
            NotificationLevel::Error => self.toasts.error(text),
        };
        toast.duration(Some(TOAST_DURATION));
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}

/// Title on the first line, description below it.
pub fn toast_text(notification: &Notification) -> String {
    match &notification.description {
        Some(description) if !description.is_empty() => {
            format!("{}\n{}", notification.title, description)
        }
        _ => notification.title.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_text_joins_title_and_description() {
        let notification = Notification::success("Tokens minted successfully!", "Minted 100 tokens for AAPL");
        assert_eq!(
            toast_text(&notification),
            "Tokens minted successfully!\nMinted 100 tokens for AAPL"
        );

        let bare = Notification {
            level: NotificationLevel::Error,
            title: "Failed to mint tokens".to_string(),
            description: None,
        };
        assert_eq!(toast_text(&bare), "Failed to mint tokens");
    }
}
