//! # Form Components
//!
//! Labeled inputs with inline validation messages, shared by the mutation screens.

use crate::forms::FieldErrors;
use crate::ui::theme::Theme;

const INPUT_WIDTH: f32 = 360.0;

/// Render a labeled single-line input and its validation message.
///
/// Returns `true` when the text changed this frame.
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    error: Option<&str>,
    theme: &Theme,
) -> bool {
    ui.label(egui::RichText::new(label).strong());
    let response = ui.add_sized(
        [INPUT_WIDTH, 28.0],
        egui::TextEdit::singleline(value).hint_text(hint),
    );
    render_field_error(ui, error, theme);
    ui.add_space(6.0);
    response.changed()
}

/// Render a labeled multi-line input and its validation message.
pub fn render_text_area(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    error: Option<&str>,
    theme: &Theme,
) -> bool {
    ui.label(egui::RichText::new(label).strong());
    let response = ui.add_sized(
        [INPUT_WIDTH, 72.0],
        egui::TextEdit::multiline(value).hint_text(hint).desired_rows(3),
    );
    render_field_error(ui, error, theme);
    ui.add_space(6.0);
    response.changed()
}

fn render_field_error(ui: &mut egui::Ui, error: Option<&str>, theme: &Theme) {
    if let Some(error) = error {
        ui.label(egui::RichText::new(error).small().color(theme.error));
    }
}

/// Card heading with a dimmed description line
pub fn render_form_heading(ui: &mut egui::Ui, title: &str, description: &str, theme: &Theme) {
    ui.label(egui::RichText::new(title).size(20.0).strong().color(theme.normal));
    ui.label(egui::RichText::new(description).color(theme.dim));
    ui.add_space(12.0);
}

/// Full-width submit button, disabled and relabeled while the request runs.
pub fn render_submit_button(
    ui: &mut egui::Ui,
    label: &str,
    pending_label: &str,
    pending: bool,
    theme: &Theme,
) -> bool {
    let text = if pending { pending_label } else { label };
    let button = egui::Button::new(egui::RichText::new(text).strong()).fill(theme.accent);
    ui.add_enabled(!pending, button.min_size(egui::vec2(INPUT_WIDTH, 32.0)))
        .clicked()
}

/// Summary line shown under a form when some fields failed validation
pub fn render_error_summary(ui: &mut egui::Ui, errors: &FieldErrors, theme: &Theme) {
    if errors.is_empty() {
        return;
    }
    let count = errors.len();
    ui.label(
        egui::RichText::new(format!(
            "Please fix {} field{} above",
            count,
            if count == 1 { "" } else { "s" }
        ))
        .color(theme.error),
    );
}
