//! # GUI Rendering Framework
//!
//! This module orchestrates the UI rendering pipeline using **egui widgets**:
//! a cloned state snapshot is dispatched to the current screen, with the
//! palette from [`theme`] and animations from [`effects`].

pub mod effects;
pub mod screens;
pub mod theme;
pub mod widgets;

use egui;
use crate::app::{App, Screen};

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App) {
    // Read state for rendering
    let state = {
        match app.state.try_read() {
            Some(state_guard) => state_guard.clone(),
            None => {
                // Lock is held elsewhere, skip this frame
                ctx.request_repaint();
                return;
            }
        }
    }; // Lock released here - rendering happens without holding lock

    state.theme.to_theme().apply(ctx);

    egui::CentralPanel::default().show(ctx, |ui| match state.current_screen {
        Screen::Landing => screens::landing::render(ui, &state, app),
        Screen::SignIn => screens::signin::render(ui, &state, app),
    });
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.on_tick();
        render(ctx, self);

        match self.repaint_after(std::time::Instant::now()) {
            Some(delay) if delay.is_zero() => ctx.request_repaint(),
            Some(delay) => ctx.request_repaint_after(delay),
            None => {}
        }
    }
}
