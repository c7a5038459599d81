//! # Application Orchestrator
//!
//! The main [`App`] struct is the navigation host: it mounts screens, owns
//! their state, runs the effects their reducers ask for and drains results
//! from background tasks.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (navigation host)                               │   │
//! │  │  - on_tick() - drain events, prune effects           │   │
//! │  │  - navigate_to() - mount / unmount screens           │   │
//! │  │  - handle_*() - user actions -> reducer              │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - Landing (stateless) / SignIn (SignInState)        │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Tokio runtime                                  │
//! │  - tasks::sign_in - AuthService::sign_in (1200 ms delay)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Event-Driven Communication
//!
//! ```rust,ignore
//! // Background task sends its result
//! event_tx.send(AppEvent::SignInFinished { ticket, result }).await?;
//!
//! // Main thread receives it in on_tick()
//! while let Ok(event) = app.event_rx.try_recv() {
//!     app.handle_event(event);
//! }
//! ```
//!
//! ## Related Modules
//!
//! - [`signin`]: Sign-in reducer, actions and effects
//! - [`captcha`]: Captcha codes and the modal gate
//! - [`state`]: Screens and application state
//! - [`handlers`]: Navigation and sign-in handlers
//! - [`tasks`]: Async background tasks

pub mod captcha;
pub mod signin;
mod state;
mod events;
mod handlers;
mod tasks;
mod event_handler;
mod app_trait;

pub use state::*;
pub use events::AppEvent;
pub use app_trait::AppLike;
pub use captcha::{CaptchaCode, CaptchaSource, CaptchaState, RandomCaptchaSource};
pub use handlers::navigation::ScreenChange;
pub use signin::{Credentials, FieldErrors, ShakeTarget, SignInAction, SignInEffect, SignInState, SignInTicket};
pub use tasks::PendingSignIn;

use std::sync::Arc;
use std::time::{Duration, Instant};
use parking_lot::RwLock;
use async_channel::{Sender, Receiver, unbounded};

use crate::core::config::AppConfig;
use crate::core::error::Result;
use crate::core::service::{AuthService, Navigator, SimulatedAuthService};
use crate::ui::effects::EffectManager;
use crate::ui::theme::ThemeConfig;

/// Poll interval for the event channel while a sign-in is outstanding
const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

/// Navigation host and state owner for the client.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Hold locks for minimal duration; renderers work on a cloned snapshot.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender cloned into background tasks.
    event_tx: Sender<AppEvent>,

    /// Running shake / entrance animations
    pub effects: EffectManager,

    /// Handle of the in-flight sign-in, if any
    pending_sign_in: Option<PendingSignIn>,

    auth: Arc<dyn AuthService>,
    captcha_source: Box<dyn CaptchaSource>,
}

impl App {
    /// Create the application from configuration.
    ///
    /// Loads the theme palette (falling back to the default), uses the
    /// simulated auth service and random captcha codes, and starts on the
    /// landing screen with its entrance animation running.
    pub fn new(config: &AppConfig) -> Self {
        let theme = ThemeConfig::load_or_default(&config.theme_file);
        let auth = Arc::new(SimulatedAuthService::new(config.sign_in_delay));
        Self::with_services(theme, auth, Box::new(RandomCaptchaSource))
    }

    /// Create the application with explicit collaborators.
    pub fn with_services(
        theme: ThemeConfig,
        auth: Arc<dyn AuthService>,
        captcha_source: Box<dyn CaptchaSource>,
    ) -> Self {
        let (event_tx, event_rx) = unbounded();

        let mut effects = EffectManager::new();
        effects.start_entrance(Instant::now());

        tracing::info!("App state initialized - landing screen mounted");

        App {
            state: Arc::new(RwLock::new(AppState::new(theme))),
            event_rx,
            event_tx,
            effects,
            pending_sign_in: None,
            auth,
            captcha_source,
        }
    }

    /// Called every frame to process async events and prune finished effects.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
        self.effects.tick(Instant::now());
    }

    /// Handle async event results
    ///
    /// Delegates to the event_handler module for processing.
    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// How soon the next frame is needed without user input
    ///
    /// Animations need every frame; a pending sign-in only needs the event
    /// channel polled. `None` means the UI can wait for input.
    pub fn repaint_after(&self, now: Instant) -> Option<Duration> {
        if self.effects.is_animating(now) {
            Some(Duration::ZERO)
        } else if self.has_pending_sign_in() {
            Some(PENDING_REPAINT_INTERVAL)
        } else {
            None
        }
    }

    /// True while a sign-in task is outstanding
    pub fn has_pending_sign_in(&self) -> bool {
        self.pending_sign_in.is_some()
    }

    /// Navigate to `path`, mounting and unmounting screens.
    ///
    /// Leaving the sign-in screen cancels any running sign-in so no update
    /// lands on discarded state.
    pub fn navigate_to(&mut self, path: &str) -> Result<()> {
        let captcha_source = &mut self.captcha_source;
        let change = handlers::navigation::handle_navigate(self.state.clone(), path, || {
            captcha_source.next_code()
        })?;

        let Some(change) = change else {
            return Ok(());
        };

        if change.from == Screen::SignIn {
            if let Some(pending) = self.pending_sign_in.take() {
                pending.cancel();
            }
            self.effects.clear_all();
        }
        if change.to == Screen::Landing {
            self.effects.start_entrance(Instant::now());
        }
        Ok(())
    }

    /// Feed an action into the sign-in reducer and run its effects
    pub fn dispatch_sign_in(&mut self, action: SignInAction) {
        let effects = handlers::auth::handle_sign_in_action(self.state.clone(), action);
        self.apply_sign_in_effects(effects);
    }

    fn apply_sign_in_effects(&mut self, effects: Vec<SignInEffect>) {
        for effect in effects {
            match effect {
                SignInEffect::Shake(target) => {
                    self.effects.trigger_shake(target, Instant::now());
                }
                SignInEffect::BeginSignIn { ticket, credentials } => {
                    if let Some(previous) = self.pending_sign_in.take() {
                        previous.cancel();
                    }
                    self.pending_sign_in = Some(tasks::sign_in::spawn_sign_in(
                        self.auth.clone(),
                        self.event_tx.clone(),
                        ticket,
                        credentials,
                    ));
                }
            }
        }
    }
}

impl Navigator for App {
    fn navigate_to(&mut self, path: &str) -> Result<()> {
        App::navigate_to(self, path)
    }
}

impl AppLike for App {
    fn state(&self) -> &Arc<RwLock<AppState>> {
        &self.state
    }

    fn effects(&self) -> &EffectManager {
        &self.effects
    }

    fn handle_sign_up_click(&mut self) {
        handlers::navigation::handle_sign_up_placeholder();
    }

    fn handle_forgot_password_click(&mut self) {
        handlers::navigation::handle_forgot_password_placeholder();
    }

    fn handle_email_change(&mut self, email: String) {
        self.dispatch_sign_in(SignInAction::EditEmail(email));
    }

    fn handle_password_change(&mut self, password: String) {
        self.dispatch_sign_in(SignInAction::EditPassword(password));
    }

    fn handle_toggle_password_visibility(&mut self) {
        self.dispatch_sign_in(SignInAction::TogglePasswordVisibility);
    }

    fn handle_sign_in_click(&mut self) {
        let challenge = self.captcha_source.next_code();
        self.dispatch_sign_in(SignInAction::Submit { challenge });
    }

    fn handle_captcha_input(&mut self, input: String) {
        self.dispatch_sign_in(SignInAction::EditCaptcha(input));
    }

    fn handle_captcha_acknowledge_toggle(&mut self) {
        self.dispatch_sign_in(SignInAction::ToggleAcknowledgment);
    }

    fn handle_captcha_refresh(&mut self) {
        let challenge = self.captcha_source.next_code();
        self.dispatch_sign_in(SignInAction::RefreshCaptcha { challenge });
    }

    fn handle_captcha_verify(&mut self) {
        self.dispatch_sign_in(SignInAction::VerifyCaptcha);
    }

    fn handle_captcha_cancel(&mut self) {
        self.dispatch_sign_in(SignInAction::CancelCaptcha);
    }
}
