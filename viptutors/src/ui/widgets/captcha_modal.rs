//! # Captcha Modal
//!
//! Security verification dialog shown after the credentials pass validation.
//! Escape and clicks on the backdrop dismiss it like the Cancel button.

use egui::{self, FontId, Margin, RichText};

use crate::app::{AppLike, CaptchaState, ShakeTarget};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// Actions collected while drawing, applied once the modal closure returns
#[derive(Default)]
struct ModalActions {
    input: Option<String>,
    toggle_acknowledgment: bool,
    refresh: bool,
    verify: bool,
    cancel: bool,
}

/// Render the captcha modal for an open gate
pub fn render(ctx: &egui::Context, captcha: &CaptchaState, app: &mut impl AppLike, theme: &Theme) {
    let shake = app.effects().shake_offset(ShakeTarget::Captcha, std::time::Instant::now());
    let mut actions = ModalActions::default();

    let response = egui::Modal::new(egui::Id::new("captcha_modal"))
        .backdrop_color(theme.overlay)
        .frame(
            egui::Frame::new()
                .fill(theme.background)
                .corner_radius(egui::CornerRadius::same(20))
                .inner_margin(Margin::same(24)),
        )
        .show(ctx, |ui| {
            ui.set_width(forms::FIELD_WIDTH + 2.0 * 12.0);

            // Header with close button
            ui.horizontal(|ui| {
                ui.label(RichText::new("Security Verification").font(FontId::proportional(20.0)).strong().color(theme.text));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(egui::Button::new(RichText::new("✖").color(theme.dim)).frame(false)).clicked() {
                        actions.cancel = true;
                    }
                });
            });
            ui.add_space(6.0);
            forms::render_hint(ui, "Please complete the captcha to continue", theme);
            ui.add_space(16.0);

            // Code pill and refresh
            ui.horizontal(|ui| {
                egui::Frame::new()
                    .fill(theme.surface)
                    .corner_radius(egui::CornerRadius::same(14))
                    .inner_margin(Margin::symmetric(18, 10))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(captcha.code.spaced())
                                .font(FontId::monospace(24.0))
                                .strong()
                                .color(theme.primary),
                        );
                    });
                let refresh = ui
                    .add(egui::Button::new(RichText::new("⟳").size(22.0).color(theme.primary)).frame(false))
                    .on_hover_text("Refresh captcha");
                if refresh.clicked() {
                    actions.refresh = true;
                }
            });
            ui.add_space(14.0);

            // Input
            let mut input = captcha.input.clone();
            let field = forms::shaken(ui, shake, |ui| {
                forms::render_input_box(ui, &mut input, "Enter captcha code", false, !captcha.error.is_empty(), theme)
            });
            if field.changed() {
                actions.input = Some(input);
            }
            if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                actions.verify = true;
            }
            ui.add_space(12.0);

            let mut acknowledged = captcha.acknowledged;
            if ui
                .checkbox(&mut acknowledged, RichText::new("I'm not a robot").color(theme.text))
                .changed()
            {
                actions.toggle_acknowledgment = true;
            }

            if !captcha.error.is_empty() {
                ui.add_space(8.0);
                forms::render_error(ui, &captcha.error, theme);
            }
            ui.add_space(18.0);

            ui.columns(2, |columns| {
                if columns[0]
                    .add_sized([columns[0].available_width(), 40.0], egui::Button::new(RichText::new("Cancel").color(theme.dim)).fill(theme.surface))
                    .clicked()
                {
                    actions.cancel = true;
                }
                if columns[1]
                    .add_sized(
                        [columns[1].available_width(), 40.0],
                        egui::Button::new(RichText::new("Verify").strong().color(theme.on_primary)).fill(theme.primary),
                    )
                    .clicked()
                {
                    actions.verify = true;
                }
            });
        });

    if response.should_close() {
        actions.cancel = true;
    }

    if let Some(input) = actions.input {
        app.handle_captcha_input(input);
    }
    if actions.toggle_acknowledgment {
        app.handle_captcha_acknowledge_toggle();
    }
    if actions.refresh {
        app.handle_captcha_refresh();
    }
    if actions.cancel {
        app.handle_captcha_cancel();
    } else if actions.verify {
        app.handle_captcha_verify();
    }
}
