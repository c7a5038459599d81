//! # App Trait
//!
//! The surface screen renderers use to read state and report user actions.
//! [`crate::app::App`] is the production implementation.

use std::sync::Arc;
use parking_lot::RwLock;
use crate::app::AppState;
use crate::core::service::Navigator;
use crate::ui::effects::EffectManager;

/// Trait for application-like types that screen renderers can use.
///
/// Navigation goes through the [`Navigator`] supertrait; screens only name
/// paths.
pub trait AppLike: Navigator {
    /// Get access to the application state.
    fn state(&self) -> &Arc<RwLock<AppState>>;

    /// Get access to running visual effects.
    fn effects(&self) -> &EffectManager;

    // Navigation methods
    fn handle_navigate(&mut self, path: &str) {
        if let Err(e) = self.navigate_to(path) {
            tracing::error!(path, error = %e, "Navigation failed");
        }
    }
    fn handle_sign_up_click(&mut self);
    fn handle_forgot_password_click(&mut self);

    // Sign-in form methods
    fn handle_email_change(&mut self, email: String);
    fn handle_password_change(&mut self, password: String);
    fn handle_toggle_password_visibility(&mut self);
    fn handle_sign_in_click(&mut self);

    // Captcha modal methods
    fn handle_captcha_input(&mut self, input: String);
    fn handle_captcha_acknowledge_toggle(&mut self);
    fn handle_captcha_refresh(&mut self);
    fn handle_captcha_verify(&mut self);
    fn handle_captcha_cancel(&mut self);
}
