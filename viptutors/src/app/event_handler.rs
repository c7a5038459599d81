//! # Event Handler
//!
//! Handles async event results from background tasks, updating application state accordingly.
//!
//! Completions can arrive after the screen that started them was torn down
//! (the task may have sent its event just before being aborted). Only the
//! completion matching the pending handle is applied; anything else is dropped.

use crate::app::signin::{SignInAction, SignInTicket};
use crate::app::{handlers, App, AppEvent};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::SignInFinished { ticket, result } => {
                self.handle_sign_in_finished(ticket, result);
            }
        }
    }
}

impl App {
    fn handle_sign_in_finished(&mut self, ticket: SignInTicket, result: Result<(), String>) {
        let is_current = self
            .pending_sign_in
            .as_ref()
            .is_some_and(|pending| pending.ticket == ticket);
        if !is_current {
            tracing::debug!(ticket = ticket.0, "Dropping sign-in completion for a torn-down screen");
            return;
        }
        self.pending_sign_in = None;

        // The simulated call is always treated as a success; an error is only reported.
        match &result {
            Ok(()) => tracing::info!(ticket = ticket.0, "Sign-in finished"),
            Err(e) => tracing::warn!(ticket = ticket.0, error = %e, "Sign-in call reported an error"),
        }

        let effects = handlers::auth::handle_sign_in_action(
            self.state.clone(),
            SignInAction::SignInFinished { ticket },
        );
        self.apply_sign_in_effects(effects);
    }
}
