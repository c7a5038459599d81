//! # Form Components
//!
//! Reusable form elements for consistent UI across screens

use egui::{self, Color32, CornerRadius, FontId, Margin, RichText, Stroke};
use crate::ui::theme::Theme;

/// Width of every form control on the sign-in screen
pub const FIELD_WIDTH: f32 = 320.0;

/// Height of text inputs and buttons
pub const FIELD_HEIGHT: f32 = 44.0;

/// Side margin that shake offsets are taken out of
const SHAKE_MARGIN: f32 = 12.0;

/// Wrap `content` in a horizontally displaced frame (shake animation).
pub fn shaken<R>(ui: &mut egui::Ui, offset: f32, content: impl FnOnce(&mut egui::Ui) -> R) -> R {
    let offset = offset.clamp(-SHAKE_MARGIN, SHAKE_MARGIN);
    let margin = Margin {
        left: (SHAKE_MARGIN + offset).round() as i8,
        right: (SHAKE_MARGIN - offset).round() as i8,
        top: 0,
        bottom: 0,
    };
    egui::Frame::new().outer_margin(margin).show(ui, content).inner
}

/// Render a labelled text input with inline error styling.
///
/// The field is drawn on the surface color, or on the error surface with an
/// error border while `error` is non-empty.
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    password: bool,
    error: &str,
    theme: &Theme,
) -> egui::Response {
    ui.label(RichText::new(label).font(FontId::proportional(14.0)).color(theme.text).strong());
    ui.add_space(6.0);

    let response = render_input_box(ui, value, hint, password, !error.is_empty(), theme);

    if !error.is_empty() {
        ui.add_space(4.0);
        render_error(ui, error, theme);
    }
    response
}

/// Render the framed input box without label or error line
pub fn render_input_box(
    ui: &mut egui::Ui,
    value: &mut String,
    hint: &str,
    password: bool,
    has_error: bool,
    theme: &Theme,
) -> egui::Response {
    let (fill, stroke) = if has_error {
        (theme.error_surface, Stroke::new(1.0, theme.error))
    } else {
        (theme.surface, Stroke::NONE)
    };

    egui::Frame::new()
        .fill(fill)
        .stroke(stroke)
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.add_sized(
                [FIELD_WIDTH - 24.0, FIELD_HEIGHT - 20.0],
                egui::TextEdit::singleline(value)
                    .password(password)
                    .hint_text(RichText::new(hint).color(theme.placeholder))
                    .font(FontId::proportional(16.0))
                    .text_color(theme.text)
                    .frame(false),
            )
        })
        .inner
}

/// Render a filled call-to-action button
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    theme: &Theme,
    fill_color: Option<Color32>,
    enabled: bool,
) -> egui::Response {
    let fill = fill_color.unwrap_or(theme.primary);
    let text_color = if fill == theme.background { theme.primary } else { theme.on_primary };

    let button = egui::Button::new(RichText::new(text).font(FontId::proportional(17.0)).strong().color(text_color))
        .fill(if enabled { fill } else { fill.gamma_multiply(0.6) })
        .stroke(Stroke::new(2.0, theme.primary))
        .corner_radius(CornerRadius::same(25))
        .min_size(egui::vec2(FIELD_WIDTH, FIELD_HEIGHT + 6.0));

    ui.add_enabled(enabled, button)
}

/// Render a form heading
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    let heading = RichText::new(text)
        .font(FontId::proportional(32.0))
        .strong()
        .color(theme.text);
    ui.label(heading);
    ui.add_space(24.0);
}

/// Render an error message
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(RichText::new(error).font(FontId::proportional(13.0)).color(theme.error));
}

/// Render an inline text link in the primary color
pub fn render_link(ui: &mut egui::Ui, text: &str, theme: &Theme) -> egui::Response {
    ui.add(
        egui::Label::new(RichText::new(text).font(FontId::proportional(15.0)).strong().color(theme.primary))
            .sense(egui::Sense::click()),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(RichText::new(hint).font(FontId::proportional(15.0)).color(theme.dim));
}
