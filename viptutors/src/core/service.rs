//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use std::time::Duration;

use async_trait::async_trait;

use crate::app::Credentials;
use crate::core::error::Result;

/// Authentication backend used by the sign-in flow.
///
/// The client ships with [`SimulatedAuthService`]; a real identity provider
/// would implement the same trait.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Sign in with the given credentials.
    async fn sign_in(&self, credentials: Credentials) -> Result<()>;
}

/// Placeholder authentication that waits a fixed delay and always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedAuthService {
    delay: Duration,
}

impl SimulatedAuthService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl AuthService for SimulatedAuthService {
    async fn sign_in(&self, credentials: Credentials) -> Result<()> {
        tracing::debug!(
            email_len = credentials.email.chars().count(),
            delay_ms = self.delay.as_millis() as u64,
            "Simulated sign-in started"
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Navigation collaborator: "navigate to path".
///
/// The host decides what a path means; callers never touch the back-stack.
pub trait Navigator {
    fn navigate_to(&mut self, path: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_sign_in_waits_for_delay() {
        let service = SimulatedAuthService::new(Duration::from_millis(1200));

        let started = tokio::time::Instant::now();
        service
            .sign_in(Credentials::default())
            .await
            .expect("simulated sign-in always succeeds");
        assert!(started.elapsed() >= Duration::from_millis(1200));
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let credentials = Credentials {
            email: "a@b.com".to_string(),
            password: "hunter22".to_string(),
        };
        let printed = format!("{credentials:?}");
        assert!(printed.contains("a@b.com"));
        assert!(!printed.contains("hunter22"));
    }
}
