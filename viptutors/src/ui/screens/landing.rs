//! # Landing Screen
//!
//! Welcome screen with branding and calls to action. The content fades in,
//! slides up and the header scales up on mount.

use egui::{self, FontId, RichText};
use std::time::Instant;

use crate::app::{AppLike, AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::{branding, forms};

/// Render landing screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = state.theme.to_theme();
    let frame = app.effects().entrance_frame(Instant::now());

    branding::paint_decorative_circles(ui, &theme);

    ui.set_opacity(frame.opacity);
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.2 + frame.translate_y);

        branding::render_branding_section(ui, frame.scale, &theme);
        ui.add_space(48.0);

        render_actions(ui, app, &theme);
    });

    branding::render_footer(ui, &theme);
}

fn render_actions(ui: &mut egui::Ui, app: &mut impl AppLike, theme: &Theme) {
    if forms::render_button(ui, "Get Started", theme, None, true).clicked() {
        app.handle_navigate(Screen::SignIn.path());
    }
    ui.add_space(14.0);

    if forms::render_button(ui, "Create Account", theme, Some(theme.background), true).clicked() {
        app.handle_sign_up_click();
    }
    ui.add_space(24.0);

    ui.horizontal(|ui| {
        // Center the prompt line under the buttons
        let prompt_width = 260.0;
        ui.add_space(((ui.available_width() - prompt_width) / 2.0).max(0.0));
        ui.label(RichText::new("Already have an account? ").font(FontId::proportional(15.0)).color(theme.dim));
        if forms::render_link(ui, "Sign In", theme).clicked() {
            app.handle_navigate(Screen::SignIn.path());
        }
    });
}
