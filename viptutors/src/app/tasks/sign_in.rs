//! # Sign-In Task
//!
//! Runs the [`AuthService`] call off the UI thread and reports back through
//! the event channel.

use std::sync::Arc;

use async_channel::Sender;
use tokio::task::JoinHandle;

use crate::app::events::AppEvent;
use crate::app::signin::{Credentials, SignInTicket};
use crate::core::service::AuthService;

/// Handle to a running sign-in.
///
/// Dropping or cancelling it aborts the task, so nothing is delivered for a
/// screen that has been torn down.
#[derive(Debug)]
pub struct PendingSignIn {
    pub ticket: SignInTicket,
    handle: JoinHandle<()>,
}

impl PendingSignIn {
    /// Abort the task
    pub fn cancel(self) {
        tracing::debug!(ticket = self.ticket.0, "Cancelling pending sign-in");
        self.handle.abort();
    }
}

impl Drop for PendingSignIn {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawn the sign-in call
///
/// Must be called from within a Tokio runtime context.
pub(crate) fn spawn_sign_in(
    auth: Arc<dyn AuthService>,
    event_tx: Sender<AppEvent>,
    ticket: SignInTicket,
    credentials: Credentials,
) -> PendingSignIn {
    tracing::info!(ticket = ticket.0, "Sign-in started");

    let handle = tokio::spawn(async move {
        let result = auth.sign_in(credentials).await.map_err(|e| e.to_string());
        if let Err(e) = event_tx.send(AppEvent::SignInFinished { ticket, result }).await {
            tracing::debug!(ticket = ticket.0, error = %e, "Sign-in finished after the UI went away");
        }
    });

    PendingSignIn { ticket, handle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::SimulatedAuthService;
    use async_channel::unbounded;
    use std::time::Duration;

    fn credentials() -> Credentials {
        Credentials {
            email: "a@b.com".to_string(),
            password: "abcdef".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reports_completion_with_ticket() {
        let (tx, rx) = unbounded();
        let auth = Arc::new(SimulatedAuthService::new(Duration::from_millis(1200)));
        let _pending = spawn_sign_in(auth, tx, SignInTicket(7), credentials());

        let event = rx.recv().await.expect("task reports back");
        assert_eq!(
            event,
            AppEvent::SignInFinished {
                ticket: SignInTicket(7),
                result: Ok(()),
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_suppresses_completion() {
        let (tx, rx) = unbounded();
        let auth = Arc::new(SimulatedAuthService::new(Duration::from_millis(1200)));
        let pending = spawn_sign_in(auth, tx, SignInTicket(1), credentials());

        pending.cancel();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_task() {
        let (tx, rx) = unbounded();
        let auth = Arc::new(SimulatedAuthService::new(Duration::from_millis(1200)));
        drop(spawn_sign_in(auth, tx, SignInTicket(1), credentials()));

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }
}
