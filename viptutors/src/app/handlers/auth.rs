//! # Sign-In Handlers
//!
//! Feed user actions into the sign-in reducer under a short write lock.

use crate::app::signin::{SignInAction, SignInEffect};
use crate::app::state::AppState;
use parking_lot::RwLock;
use std::sync::Arc;

/// Apply `action` to the mounted sign-in screen
///
/// Internal handler function - use [`crate::app::App::dispatch_sign_in`] instead.
/// Returns the effects for the caller to run. Actions arriving while the
/// sign-in screen is not mounted are dropped.
pub(crate) fn handle_sign_in_action(
    state: Arc<RwLock<AppState>>,
    action: SignInAction,
) -> Vec<SignInEffect> {
    let mut state = state.write();
    let Some(current) = state.sign_in.take() else {
        tracing::debug!(action = action.name(), "Sign-in screen not mounted, dropping action");
        return Vec::new();
    };

    let transition = current.reduce(action);
    state.sign_in = Some(transition.state);
    transition.effects
}
