//! # Navigation Handlers
//!
//! Path-based screen changes. Mounting a screen creates its state, leaving a
//! screen discards it.

use crate::app::captcha::CaptchaCode;
use crate::app::signin::SignInState;
use crate::app::state::{AppState, Screen};
use crate::core::error::{AppError, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// A screen change that actually happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenChange {
    pub from: Screen,
    pub to: Screen,
}

/// Navigate to `path`
///
/// Internal handler function - use [`crate::app::App::navigate_to`] instead.
/// Returns `Ok(None)` when the screen is already showing.
pub(crate) fn handle_navigate(
    state: Arc<RwLock<AppState>>,
    path: &str,
    mount_code: impl FnOnce() -> CaptchaCode,
) -> Result<Option<ScreenChange>> {
    let to = Screen::from_path(path).ok_or_else(|| AppError::Navigation(path.to_string()))?;

    let mut state = state.write();
    let from = state.current_screen;
    if from == to {
        tracing::debug!(path, "Already on requested screen");
        return Ok(None);
    }

    // Unmount; tickets keep counting so a late completion never matches a new mount
    if let Some(previous) = state.sign_in.take() {
        state.last_ticket = previous.ticket;
    }

    // Mount
    if to == Screen::SignIn {
        let mut sign_in = SignInState::new(mount_code());
        sign_in.ticket = state.last_ticket;
        state.sign_in = Some(sign_in);
    }

    state.current_screen = to;
    tracing::info!(from = from.path(), to = to.path(), "Navigated");

    Ok(Some(ScreenChange { from, to }))
}

/// "Create Account" / "Sign Up": no screen exists yet
pub(crate) fn handle_sign_up_placeholder() {
    tracing::info!("Navigate to Sign Up");
}

/// "Forgot your password?": no screen exists yet
pub(crate) fn handle_forgot_password_placeholder() {
    tracing::info!("Navigate to Forgot Password");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeConfig;

    fn state() -> Arc<RwLock<AppState>> {
        Arc::new(RwLock::new(AppState::new(ThemeConfig::default())))
    }

    fn code() -> CaptchaCode {
        CaptchaCode::parse("MOUNT1").expect("test code should be well formed")
    }

    #[test]
    fn test_paths_round_trip() {
        for screen in Screen::all() {
            assert_eq!(Screen::from_path(screen.path()), Some(*screen));
        }
        assert_eq!(Screen::from_path("/signup"), None);
    }

    #[test]
    fn test_navigate_mounts_sign_in() {
        let state = state();
        let change = handle_navigate(state.clone(), "/signin", code).expect("route exists");
        assert_eq!(
            change,
            Some(ScreenChange {
                from: Screen::Landing,
                to: Screen::SignIn
            })
        );

        let guard = state.read();
        assert_eq!(guard.current_screen, Screen::SignIn);
        let sign_in = guard.sign_in.as_ref().expect("sign-in state mounted");
        assert_eq!(sign_in.captcha.code, code());
    }

    #[test]
    fn test_navigate_away_discards_sign_in() {
        let state = state();
        handle_navigate(state.clone(), "/signin", code).expect("route exists");
        state
            .write()
            .sign_in
            .as_mut()
            .expect("mounted")
            .credentials
            .email = "a@b.com".to_string();

        handle_navigate(state.clone(), "/", code).expect("route exists");
        let guard = state.read();
        assert_eq!(guard.current_screen, Screen::Landing);
        assert!(guard.sign_in.is_none());
    }

    #[test]
    fn test_remount_continues_ticket_sequence() {
        let state = state();
        handle_navigate(state.clone(), "/signin", code).expect("route exists");
        state.write().sign_in.as_mut().expect("mounted").ticket = crate::app::SignInTicket(3);

        handle_navigate(state.clone(), "/", code).expect("route exists");
        handle_navigate(state.clone(), "/signin", code).expect("route exists");
        let guard = state.read();
        let sign_in = guard.sign_in.as_ref().expect("mounted");
        assert_eq!(sign_in.ticket, crate::app::SignInTicket(3));
        assert!(!sign_in.busy);
    }

    #[test]
    fn test_same_screen_keeps_state() {
        let state = state();
        handle_navigate(state.clone(), "/signin", code).expect("route exists");
        state.write().sign_in.as_mut().expect("mounted").credentials.email = "kept".to_string();

        let change = handle_navigate(state.clone(), "/signin", || unreachable!("must not remount"))
            .expect("route exists");
        assert_eq!(change, None);
        assert_eq!(state.read().sign_in.as_ref().expect("mounted").credentials.email, "kept");
    }

    #[test]
    fn test_unknown_path_is_an_error() {
        let state = state();
        let err = handle_navigate(state.clone(), "/signup", code).unwrap_err();
        assert!(matches!(err, AppError::Navigation(ref p) if p == "/signup"));
        assert_eq!(state.read().current_screen, Screen::Landing);
    }
}
