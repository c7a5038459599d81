//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.

use crate::app::signin::SignInTicket;

/// Async task results sent to main thread
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Simulated sign-in finished. The result is logged, never branched on.
    SignInFinished {
        ticket: SignInTicket,
        result: Result<(), String>,
    },
}
