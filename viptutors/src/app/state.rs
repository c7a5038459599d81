//! # Application State Types
//!
//! Screens and the per-screen state owned by the navigation host.

use crate::app::signin::{SignInState, SignInTicket};

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Hero screen with entrance animation
    Landing,
    /// Sign-in form with captcha modal
    SignIn,
}

impl Screen {
    /// Every mounted screen
    pub fn all() -> &'static [Screen] {
        &[Screen::Landing, Screen::SignIn]
    }

    /// Route path of the screen
    pub fn path(&self) -> &'static str {
        match self {
            Screen::Landing => "/",
            Screen::SignIn => "/signin",
        }
    }

    /// Screen mounted at `path`, if any
    pub fn from_path(path: &str) -> Option<Screen> {
        Screen::all().iter().copied().find(|s| s.path() == path)
    }
}

/// Global application state
///
/// Each screen's state exists only while that screen is mounted.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current active screen
    pub current_screen: Screen,
    /// Sign-in screen state, `Some` only while [`Screen::SignIn`] is mounted
    pub sign_in: Option<SignInState>,
    /// Theme palette in effect
    pub theme: crate::ui::theme::ThemeConfig,
    /// Ticket of the last sign-in screen that was torn down
    pub last_ticket: SignInTicket,
}

impl AppState {
    pub fn new(theme: crate::ui::theme::ThemeConfig) -> Self {
        Self {
            current_screen: Screen::Landing,
            sign_in: None,
            theme,
            last_ticket: SignInTicket::default(),
        }
    }

    /// True while a simulated sign-in is in flight
    pub fn is_busy(&self) -> bool {
        self.sign_in.as_ref().is_some_and(|s| s.busy)
    }
}
