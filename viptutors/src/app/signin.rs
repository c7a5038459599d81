//! # Sign-In State Machine
//!
//! The sign-in screen's state as one record, advanced by [`SignInState::reduce`].
//!
//! The reducer never touches the clock, the RNG or the runtime. Anything with
//! a side effect (a shake animation, starting the simulated sign-in) comes
//! back as a [`SignInEffect`] for the host to carry out, and fresh captcha
//! codes arrive inside the action that needs them.
//!
//! ## Flow
//!
//! ```text
//! Submit ──▶ validate both fields ──▶ errors? ──yes──▶ Shake(field) per error
//!                                       │
//!                                       no
//!                                       ▼
//!                              captcha gate opens
//!                                       │ VerifyCaptcha (accepted)
//!                                       ▼
//!                      busy = true, BeginSignIn { ticket }
//!                                       │ SignInFinished { ticket }
//!                                       ▼
//!                                 busy = false
//! ```

use crate::app::captcha::{CaptchaCode, CaptchaRejection, CaptchaState, VerifyOutcome};
use crate::utils::validation::validate_credentials;

/// Email and password as typed. Never trimmed, never persisted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Inline error line under each credential field, empty when none
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: String,
    pub password: String,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.password.is_empty()
    }
}

/// Identifies one simulated sign-in; late completions with an older ticket are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SignInTicket(pub u64);

impl SignInTicket {
    pub fn next(self) -> Self {
        SignInTicket(self.0.wrapping_add(1))
    }
}

/// Field container that can be shaken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShakeTarget {
    Email,
    Password,
    Captcha,
}

/// User and timer inputs to the sign-in screen
#[derive(Debug, Clone, PartialEq)]
pub enum SignInAction {
    EditEmail(String),
    EditPassword(String),
    TogglePasswordVisibility,
    /// Sign-in button; `challenge` is used if the gate opens
    Submit { challenge: CaptchaCode },
    EditCaptcha(String),
    ToggleAcknowledgment,
    RefreshCaptcha { challenge: CaptchaCode },
    VerifyCaptcha,
    /// Cancel button, close icon, Escape or click outside the modal
    CancelCaptcha,
    /// The simulated sign-in for `ticket` finished
    SignInFinished { ticket: SignInTicket },
}

impl SignInAction {
    /// Variant name for logs; payloads may hold credentials
    pub fn name(&self) -> &'static str {
        match self {
            SignInAction::EditEmail(_) => "edit_email",
            SignInAction::EditPassword(_) => "edit_password",
            SignInAction::TogglePasswordVisibility => "toggle_password_visibility",
            SignInAction::Submit { .. } => "submit",
            SignInAction::EditCaptcha(_) => "edit_captcha",
            SignInAction::ToggleAcknowledgment => "toggle_acknowledgment",
            SignInAction::RefreshCaptcha { .. } => "refresh_captcha",
            SignInAction::VerifyCaptcha => "verify_captcha",
            SignInAction::CancelCaptcha => "cancel_captcha",
            SignInAction::SignInFinished { .. } => "sign_in_finished",
        }
    }
}

/// Side effects requested by a transition
#[derive(Debug, Clone, PartialEq)]
pub enum SignInEffect {
    Shake(ShakeTarget),
    BeginSignIn {
        ticket: SignInTicket,
        credentials: Credentials,
    },
}

/// Next state plus the effects to run
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: SignInState,
    pub effects: Vec<SignInEffect>,
}

impl Transition {
    fn quiet(state: SignInState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}

/// Everything the sign-in screen knows
#[derive(Debug, Clone, PartialEq)]
pub struct SignInState {
    pub credentials: Credentials,
    pub errors: FieldErrors,
    pub show_password: bool,
    pub captcha: CaptchaState,
    /// A simulated sign-in is running
    pub busy: bool,
    /// Ticket of the most recently started sign-in
    pub ticket: SignInTicket,
}

impl SignInState {
    /// Fresh state for a newly mounted screen
    pub fn new(initial_code: CaptchaCode) -> Self {
        Self {
            credentials: Credentials::default(),
            errors: FieldErrors::default(),
            show_password: false,
            captcha: CaptchaState::new(initial_code),
            busy: false,
            ticket: SignInTicket::default(),
        }
    }

    /// Label of the submit button
    pub fn submit_label(&self) -> &'static str {
        if self.busy {
            "Signing in..."
        } else {
            "Sign in"
        }
    }

    /// Apply one action
    pub fn reduce(self, action: SignInAction) -> Transition {
        match action {
            SignInAction::EditEmail(email) => Transition::quiet(self.edit_email(email)),
            SignInAction::EditPassword(password) => Transition::quiet(self.edit_password(password)),
            SignInAction::TogglePasswordVisibility => Transition::quiet(Self {
                show_password: !self.show_password,
                ..self
            }),
            SignInAction::Submit { challenge } => self.submit(challenge),
            SignInAction::EditCaptcha(input) => Transition::quiet(self.map_captcha(|c| c.with_input(input))),
            SignInAction::ToggleAcknowledgment => {
                Transition::quiet(self.map_captcha(CaptchaState::toggled_acknowledgment))
            }
            SignInAction::RefreshCaptcha { challenge } => self.refresh_captcha(challenge),
            SignInAction::VerifyCaptcha => self.verify_captcha(),
            SignInAction::CancelCaptcha => self.cancel_captcha(),
            SignInAction::SignInFinished { ticket } => Transition::quiet(self.finish_sign_in(ticket)),
        }
    }

    fn map_captcha(self, f: impl FnOnce(CaptchaState) -> CaptchaState) -> Self {
        let Self { captcha, .. } = self;
        Self {
            captcha: f(captcha),
            ..self
        }
    }

    fn edit_email(self, email: String) -> Self {
        Self {
            credentials: Credentials {
                email,
                ..self.credentials
            },
            errors: FieldErrors {
                email: String::new(),
                ..self.errors
            },
            ..self
        }
    }

    fn edit_password(self, password: String) -> Self {
        Self {
            credentials: Credentials {
                password,
                ..self.credentials
            },
            errors: FieldErrors {
                password: String::new(),
                ..self.errors
            },
            ..self
        }
    }

    fn submit(self, challenge: CaptchaCode) -> Transition {
        if self.busy || self.captcha.is_open() {
            return Transition::quiet(self);
        }

        let check = validate_credentials(&self.credentials.email, &self.credentials.password);
        let mut effects = Vec::new();
        if !check.email.is_valid {
            effects.push(SignInEffect::Shake(ShakeTarget::Email));
        }
        if !check.password.is_valid {
            effects.push(SignInEffect::Shake(ShakeTarget::Password));
        }

        let errors = FieldErrors {
            email: check.email.message(),
            password: check.password.message(),
        };

        if !check.is_valid() {
            return Transition {
                state: Self { errors, ..self },
                effects,
            };
        }

        tracing::debug!("Credentials valid, opening captcha gate");
        let state = Self { errors, ..self }.map_captcha(|c| c.opened(challenge));
        Transition::quiet(state)
    }

    fn refresh_captcha(self, challenge: CaptchaCode) -> Transition {
        if !self.captcha.is_open() {
            return Transition::quiet(self);
        }
        Transition::quiet(self.map_captcha(|c| c.refreshed(challenge)))
    }

    fn verify_captcha(self) -> Transition {
        let Self { captcha, .. } = self;
        let (captcha, outcome) = captcha.verified();
        let state = Self { captcha, ..self };

        match outcome {
            VerifyOutcome::Accepted => {
                let ticket = state.ticket.next();
                tracing::debug!(ticket = ticket.0, "Captcha accepted");
                let credentials = state.credentials.clone();
                Transition {
                    state: Self {
                        busy: true,
                        ticket,
                        ..state
                    },
                    effects: vec![SignInEffect::BeginSignIn { ticket, credentials }],
                }
            }
            VerifyOutcome::Rejected(CaptchaRejection::EmptyInput) => Transition {
                state,
                effects: vec![SignInEffect::Shake(ShakeTarget::Captcha)],
            },
            VerifyOutcome::Rejected(CaptchaRejection::NotAcknowledged) | VerifyOutcome::Ignored => {
                Transition::quiet(state)
            }
        }
    }

    fn cancel_captcha(self) -> Transition {
        if self.captcha.is_open() {
            tracing::debug!("Captcha gate cancelled");
        }
        Transition::quiet(self.map_captcha(CaptchaState::cancelled))
    }

    fn finish_sign_in(self, ticket: SignInTicket) -> Self {
        if !self.busy || ticket != self.ticket {
            tracing::debug!(ticket = ticket.0, current = self.ticket.0, "Ignoring stale sign-in completion");
            return self;
        }
        Self { busy: false, ..self }
    }
}
