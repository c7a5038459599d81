//! # GUI Theme
//!
//! Light theme with the VIPTUTORS orange accent for egui.
//! The palette can be overridden with a JSON file (see [`ThemeConfig`]).

use egui::{Color32, Context, CornerRadius, Stroke, Visuals};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{AppError, Result};

/// Serializable theme configuration for persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Brand orange (buttons, links, captcha code)
    pub primary: [u8; 3],
    /// Page background
    pub background: [u8; 3],
    /// Input field background
    pub surface: [u8; 3],
    /// Headings and input text
    pub text_dark: [u8; 3],
    /// Secondary text
    pub text_gray: [u8; 3],
    /// Error text and border
    pub error: [u8; 3],
    /// Input background while in error
    pub error_surface: [u8; 3],
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            primary: [0xFF, 0x99, 0x00],
            background: [0xFF, 0xFF, 0xFF],
            surface: [0xF3, 0xF4, 0xF6],
            text_dark: [0x22, 0x22, 0x22],
            text_gray: [0x66, 0x66, 0x66],
            error: [0xFF, 0x33, 0x33],
            error_surface: [0xFF, 0xF6, 0xF6],
        }
    }
}

impl ThemeConfig {
    /// Load theme configuration from a JSON file; a missing file yields the default
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Theme(format!("{}: {e}", path.display())))?;
        let config: ThemeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load, falling back to the default palette on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to load theme, using default palette");
                Self::default()
            }
        }
    }

    fn rgb(c: [u8; 3]) -> Color32 {
        Color32::from_rgb(c[0], c[1], c[2])
    }

    /// Resolve into egui colors
    pub fn to_theme(&self) -> Theme {
        Theme {
            primary: Self::rgb(self.primary),
            background: Self::rgb(self.background),
            surface: Self::rgb(self.surface),
            text: Self::rgb(self.text_dark),
            dim: Self::rgb(self.text_gray),
            error: Self::rgb(self.error),
            error_surface: Self::rgb(self.error_surface),
            on_primary: Color32::WHITE,
            placeholder: Color32::from_rgb(0x99, 0x99, 0x99),
            overlay: Color32::from_rgba_unmultiplied(0, 0, 0, 128),
        }
    }
}

/// Resolved color palette
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub primary: Color32,
    pub background: Color32,
    pub surface: Color32,
    pub text: Color32,
    pub dim: Color32,
    pub error: Color32,
    pub error_surface: Color32,
    /// Text drawn on top of the primary color
    pub on_primary: Color32,
    pub placeholder: Color32,
    /// Modal backdrop
    pub overlay: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        ThemeConfig::default().to_theme()
    }
}

impl Theme {
    /// Primary color at reduced opacity (decorative circles)
    pub fn primary_faded(&self, alpha: f32) -> Color32 {
        self.primary.gamma_multiply(alpha)
    }

    /// Apply the palette to egui's visuals
    pub fn apply(&self, ctx: &Context) {
        let mut visuals = Visuals::light();
        visuals.panel_fill = self.background;
        visuals.window_fill = self.background;
        visuals.extreme_bg_color = self.surface;
        visuals.override_text_color = Some(self.text);
        visuals.hyperlink_color = self.primary;
        visuals.selection.bg_fill = self.primary.gamma_multiply(0.35);
        visuals.selection.stroke = Stroke::new(1.0, self.primary);
        visuals.window_corner_radius = CornerRadius::same(20);
        visuals.widgets.inactive.corner_radius = CornerRadius::same(12);
        visuals.widgets.hovered.corner_radius = CornerRadius::same(12);
        visuals.widgets.active.corner_radius = CornerRadius::same(12);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.primary);
        ctx.set_visuals(visuals);
    }
}
