//! # Sign-In Screen
//!
//! Email and password form. A valid submit opens the captcha modal; a passed
//! captcha keeps the form busy until the simulated sign-in completes.

use egui::{self, FontId, RichText};
use std::time::Instant;

use crate::app::{AppLike, AppState, ShakeTarget, SignInState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{branding, captcha_modal, forms};

/// Render sign-in screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = state.theme.to_theme();

    // Snapshot taken between navigation and mount; nothing to draw yet
    let Some(sign_in) = state.sign_in.as_ref() else {
        return;
    };

    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        branding::render_wordmark(ui, 28.0, &theme);
        ui.add_space(24.0);
        forms::render_form_heading(ui, "Sign In", &theme);

        render_form(ui, sign_in, app, &theme);
        ui.add_space(24.0);
        render_footer_links(ui, app, &theme);
    });

    if sign_in.captcha.is_open() {
        captcha_modal::render(ui.ctx(), &sign_in.captcha, app, &theme);
    }
}

/// What the form saw this frame that could trigger a submit
#[derive(Debug, Default, Clone, Copy)]
struct SubmitTriggers {
    button_clicked: bool,
    enter_pressed: bool,
    email_committed: bool,
    password_committed: bool,
    captcha_open: bool,
}

impl SubmitTriggers {
    /// The button, or Enter while leaving either field; never behind the modal
    fn submit_requested(&self) -> bool {
        if self.captcha_open {
            return false;
        }
        let enter_in_field = self.enter_pressed && (self.email_committed || self.password_committed);
        self.button_clicked || enter_in_field
    }
}

fn render_form(ui: &mut egui::Ui, sign_in: &SignInState, app: &mut impl AppLike, theme: &Theme) {
    let now = Instant::now();
    let mut triggers = SubmitTriggers {
        captcha_open: sign_in.captcha.is_open(),
        enter_pressed: ui.input(|i| i.key_pressed(egui::Key::Enter)),
        ..SubmitTriggers::default()
    };

    ui.allocate_ui_with_layout(
        egui::vec2(forms::FIELD_WIDTH + 24.0, 0.0),
        egui::Layout::top_down(egui::Align::LEFT),
        |ui| {
            // Email
            let mut email = sign_in.credentials.email.clone();
            let email_response = forms::shaken(ui, app.effects().shake_offset(ShakeTarget::Email, now), |ui| {
                forms::render_text_input(
                    ui,
                    "Email Address",
                    &mut email,
                    "Enter your email...",
                    false,
                    &sign_in.errors.email,
                    theme,
                )
            });
            if email_response.changed() {
                app.handle_email_change(email);
            }
            triggers.email_committed = email_response.lost_focus();
            ui.add_space(16.0);

            // Password with visibility toggle
            let mut password = sign_in.credentials.password.clone();
            let password_response = forms::shaken(ui, app.effects().shake_offset(ShakeTarget::Password, now), |ui| {
                forms::render_text_input(
                    ui,
                    "Password",
                    &mut password,
                    "Enter your password...",
                    !sign_in.show_password,
                    &sign_in.errors.password,
                    theme,
                )
            });
            if password_response.changed() {
                app.handle_password_change(password);
            }
            triggers.password_committed = password_response.lost_focus();

            ui.horizontal(|ui| {
                ui.add_space(12.0);
                let toggle_label = if sign_in.show_password { "🙈 Hide password" } else { "👁 Show password" };
                if ui
                    .add(egui::Button::new(RichText::new(toggle_label).font(FontId::proportional(13.0)).color(theme.dim)).frame(false))
                    .clicked()
                {
                    app.handle_toggle_password_visibility();
                }
            });
            ui.add_space(20.0);

            let button = forms::shaken(ui, 0.0, |ui| {
                forms::render_button(ui, sign_in.submit_label(), theme, None, !sign_in.busy)
            });
            triggers.button_clicked = button.clicked();
        },
    );

    if triggers.submit_requested() {
        app.handle_sign_in_click();
    }
}

fn render_footer_links(ui: &mut egui::Ui, app: &mut impl AppLike, theme: &Theme) {
    ui.horizontal(|ui| {
        let line_width = 240.0;
        ui.add_space(((ui.available_width() - line_width) / 2.0).max(0.0));
        ui.label(RichText::new("Don't have an account? ").font(FontId::proportional(15.0)).color(theme.dim));
        if forms::render_link(ui, "Sign Up", theme).clicked() {
            app.handle_sign_up_click();
        }
    });
    ui.add_space(10.0);
    if forms::render_link(ui, "Forgot your password?", theme).clicked() {
        app.handle_forgot_password_click();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_in_either_field_submits() {
        let email = SubmitTriggers {
            enter_pressed: true,
            email_committed: true,
            ..SubmitTriggers::default()
        };
        assert!(email.submit_requested());

        let password = SubmitTriggers {
            enter_pressed: true,
            password_committed: true,
            ..SubmitTriggers::default()
        };
        assert!(password.submit_requested());
    }

    #[test]
    fn test_focus_loss_without_enter_does_not_submit() {
        let tabbed_away = SubmitTriggers {
            email_committed: true,
            ..SubmitTriggers::default()
        };
        assert!(!tabbed_away.submit_requested());

        let stray_enter = SubmitTriggers {
            enter_pressed: true,
            ..SubmitTriggers::default()
        };
        assert!(!stray_enter.submit_requested());
    }

    #[test]
    fn test_button_submits() {
        let clicked = SubmitTriggers {
            button_clicked: true,
            ..SubmitTriggers::default()
        };
        assert!(clicked.submit_requested());
    }

    #[test]
    fn test_nothing_submits_behind_captcha_modal() {
        let all = SubmitTriggers {
            button_clicked: true,
            enter_pressed: true,
            email_committed: true,
            password_committed: true,
            captcha_open: true,
        };
        assert!(!all.submit_requested());
    }
}
