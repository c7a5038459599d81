//! # Branding Components
//!
//! Reusable branding elements used across screens (landing, sign-in)

use egui::{self, FontId, RichText};
use crate::ui::theme::Theme;

/// Render the VIPTUTORS wordmark
pub fn render_wordmark(ui: &mut egui::Ui, size: f32, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label(RichText::new("VIP").font(FontId::proportional(size)).color(theme.primary).strong());
        ui.label(RichText::new("TUTORS").font(FontId::proportional(size)).color(theme.text).strong());
    });
}

/// Render the tagline under the wordmark
pub fn render_tagline(ui: &mut egui::Ui, size: f32, theme: &Theme) {
    ui.label(RichText::new("Learn with Expert Tutors").font(FontId::proportional(size)).color(theme.dim));
}

/// Render the complete branding section (wordmark, tagline)
///
/// `scale` shrinks the wordmark during the landing entrance.
pub fn render_branding_section(ui: &mut egui::Ui, scale: f32, theme: &Theme) {
    ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
        render_wordmark(ui, 48.0 * scale, theme);
        ui.add_space(8.0);
        render_tagline(ui, 18.0, theme);
    });
}

/// Render the copyright footer
pub fn render_footer(ui: &mut egui::Ui, theme: &Theme) {
    ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
        ui.add_space(16.0);
        ui.label(RichText::new("© 2025 VIPTUTORS.").font(FontId::proportional(12.0)).color(theme.dim));
    });
}

/// Paint the faint background circles behind the landing content
pub fn paint_decorative_circles(ui: &egui::Ui, theme: &Theme) {
    let rect = ui.max_rect();
    let painter = ui.painter();
    let big = rect.width().min(rect.height()) * 0.45;

    painter.circle_filled(
        egui::pos2(rect.right() - big * 0.3, rect.top() + big * 0.2),
        big,
        theme.primary_faded(0.10),
    );
    painter.circle_filled(
        egui::pos2(rect.left() + big * 0.1, rect.bottom() - big * 0.25),
        big * 0.7,
        theme.primary_faded(0.08),
    );
    painter.circle_filled(
        egui::pos2(rect.left() + big * 0.5, rect.top() + big * 0.6),
        big * 0.2,
        theme.primary_faded(0.12),
    );
}
