//! # Captcha Challenge Gate
//!
//! Locally generated captcha codes and the modal state that sits between
//! validated credentials and the simulated sign-in.
//!
//! ```text
//!            open(code)               verify: input + ack
//!  Closed ──────────────▶ Open ───────────────────────────▶ Closed (+ sign-in)
//!    ▲                    │ ▲ │
//!    │     cancel         │ │ │ refresh(code) / verify rejected
//!    └────────────────────┘ └─┘
//! ```
//!
//! Every transition is a method that consumes the state and returns the next
//! one. Verification only checks that *something* was typed and that the
//! acknowledgment box is ticked; the typed text is never compared with the
//! displayed code.

use rand::Rng;

/// Characters a captcha code is drawn from.
pub const CAPTCHA_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of characters in a captcha code.
pub const CAPTCHA_LEN: usize = 6;

pub const EMPTY_INPUT_ERROR: &str = "Please enter the captcha code.";
pub const NOT_ACKNOWLEDGED_ERROR: &str = "Please check 'I'm not a robot'.";

/// A 6-character code drawn from `[A-Z0-9]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptchaCode(String);

impl CaptchaCode {
    /// Draw a fresh code from `rng`.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let code = (0..CAPTCHA_LEN)
            .map(|_| CAPTCHA_ALPHABET[rng.random_range(0..CAPTCHA_ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    /// Build a code from a known string, rejecting anything outside `[A-Z0-9]{6}`.
    pub fn parse(code: &str) -> Option<Self> {
        let well_formed = code.len() == CAPTCHA_LEN
            && code.bytes().all(|b| CAPTCHA_ALPHABET.contains(&b));
        well_formed.then(|| Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Code with a space between characters, as shown in the modal
    pub fn spaced(&self) -> String {
        self.0
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Where fresh captcha codes come from
pub trait CaptchaSource: Send {
    fn next_code(&mut self) -> CaptchaCode;
}

/// Captcha source backed by the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCaptchaSource;

impl CaptchaSource for RandomCaptchaSource {
    fn next_code(&mut self) -> CaptchaCode {
        CaptchaCode::generate(&mut rand::rng())
    }
}

/// Whether the captcha modal is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptchaPhase {
    Closed,
    Open,
}

/// Why a verify attempt was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptchaRejection {
    /// Nothing typed into the captcha field
    EmptyInput,
    /// "I'm not a robot" not ticked
    NotAcknowledged,
}

impl CaptchaRejection {
    pub fn message(self) -> &'static str {
        match self {
            CaptchaRejection::EmptyInput => EMPTY_INPUT_ERROR,
            CaptchaRejection::NotAcknowledged => NOT_ACKNOWLEDGED_ERROR,
        }
    }
}

/// Result of a verify attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Modal closed, sign-in may start
    Accepted,
    /// Modal stays open with an error
    Rejected(CaptchaRejection),
    /// Verify pressed while the modal is closed
    Ignored,
}

/// Captcha modal state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptchaState {
    pub phase: CaptchaPhase,
    /// Displayed code
    pub code: CaptchaCode,
    /// What the user typed
    pub input: String,
    /// "I'm not a robot" checkbox
    pub acknowledged: bool,
    /// Error line under the checkbox, empty when none
    pub error: String,
}

impl CaptchaState {
    /// Closed gate holding an initial code
    pub fn new(code: CaptchaCode) -> Self {
        Self {
            phase: CaptchaPhase::Closed,
            code,
            input: String::new(),
            acknowledged: false,
            error: String::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase == CaptchaPhase::Open
    }

    fn cleared(self) -> Self {
        Self {
            input: String::new(),
            acknowledged: false,
            error: String::new(),
            ..self
        }
    }

    /// Closed -> Open with a fresh code
    pub fn opened(self, code: CaptchaCode) -> Self {
        Self {
            phase: CaptchaPhase::Open,
            code,
            ..self.cleared()
        }
    }

    /// New code while open; the modal stays up
    pub fn refreshed(self, code: CaptchaCode) -> Self {
        Self { code, ..self.cleared() }
    }

    /// Close without signing in
    pub fn cancelled(self) -> Self {
        Self {
            phase: CaptchaPhase::Closed,
            ..self.cleared()
        }
    }

    /// Typing replaces the input (capitalized, like the code) and clears the error
    pub fn with_input(self, input: String) -> Self {
        Self {
            input: input.to_uppercase(),
            error: String::new(),
            ..self
        }
    }

    /// Flip the acknowledgment checkbox; the error line is left alone
    pub fn toggled_acknowledgment(self) -> Self {
        Self {
            acknowledged: !self.acknowledged,
            ..self
        }
    }

    /// Attempt verification.
    ///
    /// Accepts any non-empty input once acknowledged; the input is not
    /// compared with [`CaptchaState::code`].
    pub fn verified(self) -> (Self, VerifyOutcome) {
        if !self.is_open() {
            return (self, VerifyOutcome::Ignored);
        }

        let rejection = if self.input.is_empty() {
            Some(CaptchaRejection::EmptyInput)
        } else if !self.acknowledged {
            Some(CaptchaRejection::NotAcknowledged)
        } else {
            None
        };

        match rejection {
            Some(reason) => {
                let next = Self {
                    error: reason.message().to_string(),
                    ..self
                };
                (next, VerifyOutcome::Rejected(reason))
            }
            None => {
                let next = Self {
                    phase: CaptchaPhase::Closed,
                    ..self.cleared()
                };
                (next, VerifyOutcome::Accepted)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn code(s: &str) -> CaptchaCode {
        CaptchaCode::parse(s).expect("test code should be well formed")
    }

    fn open_gate() -> CaptchaState {
        CaptchaState::new(code("AAAAAA")).opened(code("K7Q2ZP"))
    }

    #[test]
    fn test_generated_codes_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let generated = CaptchaCode::generate(&mut rng);
            assert_eq!(generated.as_str().len(), CAPTCHA_LEN);
            assert!(generated
                .as_str()
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
            assert!(CaptchaCode::parse(generated.as_str()).is_some());
        }
    }

    #[test]
    fn test_random_source_produces_well_formed_codes() {
        let mut source = RandomCaptchaSource;
        for _ in 0..100 {
            assert!(CaptchaCode::parse(source.next_code().as_str()).is_some());
        }
    }

    #[test]
    fn test_parse_rejects_malformed_codes() {
        assert!(CaptchaCode::parse("abcdef").is_none());
        assert!(CaptchaCode::parse("ABCDE").is_none());
        assert!(CaptchaCode::parse("ABCDEFG").is_none());
        assert!(CaptchaCode::parse("ABC-EF").is_none());
    }

    #[test]
    fn test_spaced_display() {
        assert_eq!(code("K7Q2ZP").spaced(), "K 7 Q 2 Z P");
    }

    #[test]
    fn test_open_resets_fields_and_replaces_code() {
        let dirty = CaptchaState {
            phase: CaptchaPhase::Closed,
            code: code("AAAAAA"),
            input: "stale".to_string(),
            acknowledged: true,
            error: EMPTY_INPUT_ERROR.to_string(),
        };
        let opened = dirty.opened(code("BBBBBB"));
        assert!(opened.is_open());
        assert_eq!(opened.code, code("BBBBBB"));
        assert_eq!(opened.input, "");
        assert!(!opened.acknowledged);
        assert_eq!(opened.error, "");
    }

    #[test]
    fn test_refresh_keeps_modal_open() {
        let gate = open_gate()
            .with_input("XYZ".to_string())
            .toggled_acknowledgment();
        let (gate, _) = gate.with_input(String::new()).verified();
        assert_eq!(gate.error, EMPTY_INPUT_ERROR);

        let refreshed = gate.refreshed(code("999999"));
        assert!(refreshed.is_open());
        assert_eq!(refreshed.code, code("999999"));
        assert_eq!(refreshed.input, "");
        assert!(!refreshed.acknowledged);
        assert_eq!(refreshed.error, "");
    }

    #[test]
    fn test_verify_empty_input_rejected() {
        let (gate, outcome) = open_gate().toggled_acknowledgment().verified();
        assert_eq!(outcome, VerifyOutcome::Rejected(CaptchaRejection::EmptyInput));
        assert!(gate.is_open());
        assert_eq!(gate.error, "Please enter the captcha code.");
    }

    #[test]
    fn test_verify_unacknowledged_rejected() {
        let (gate, outcome) = open_gate().with_input("K7Q2ZP".to_string()).verified();
        assert_eq!(outcome, VerifyOutcome::Rejected(CaptchaRejection::NotAcknowledged));
        assert!(gate.is_open());
        assert_eq!(gate.error, "Please check 'I'm not a robot'.");
    }

    #[test]
    fn test_verify_accepts_input_that_does_not_match_code() {
        // The typed text is never compared with the displayed code.
        let gate = open_gate();
        assert_ne!(gate.code.as_str(), "nope");

        let (gate, outcome) = gate
            .with_input("nope".to_string())
            .toggled_acknowledgment()
            .verified();
        assert_eq!(outcome, VerifyOutcome::Accepted);
        assert!(!gate.is_open());
        assert_eq!(gate.input, "");
        assert!(!gate.acknowledged);
        assert_eq!(gate.error, "");
    }

    #[test]
    fn test_verify_while_closed_is_ignored() {
        let closed = CaptchaState::new(code("AAAAAA"))
            .with_input("x".to_string())
            .toggled_acknowledgment();
        let (after, outcome) = closed.clone().verified();
        assert_eq!(outcome, VerifyOutcome::Ignored);
        assert_eq!(after, closed);
    }

    #[test]
    fn test_typing_clears_error_but_ack_toggle_does_not() {
        let (gate, _) = open_gate().verified();
        assert_eq!(gate.error, EMPTY_INPUT_ERROR);

        let toggled = gate.clone().toggled_acknowledgment();
        assert_eq!(toggled.error, EMPTY_INPUT_ERROR);
        assert!(toggled.acknowledged);

        let typed = gate.with_input("A".to_string());
        assert_eq!(typed.error, "");
        assert_eq!(typed.input, "A");
    }

    #[test]
    fn test_cancel_resets_and_closes() {
        let gate = open_gate()
            .with_input("abc".to_string())
            .toggled_acknowledgment();
        let (gate, _) = gate.with_input(String::new()).verified();

        let cancelled = gate.cancelled();
        assert_eq!(cancelled.phase, CaptchaPhase::Closed);
        assert_eq!(cancelled.input, "");
        assert!(!cancelled.acknowledged);
        assert_eq!(cancelled.error, "");
    }

    #[test]
    fn test_typed_input_is_capitalized() {
        let gate = open_gate().with_input("k7q2zp".to_string());
        assert_eq!(gate.input, "K7Q2ZP");

        let mixed = gate.with_input("Ab1".to_string());
        assert_eq!(mixed.input, "AB1");
    }
}
