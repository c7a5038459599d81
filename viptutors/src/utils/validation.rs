/// Validation utilities for the sign-in credentials
///
/// Rules are deliberately minimal: no trimming, no case folding, no lockout.

/// Message shown under the email field when it is rejected.
pub const EMAIL_ERROR: &str = "Please enter a valid email address.";

/// Message shown under the password field when it is rejected.
pub const PASSWORD_ERROR: &str = "Password must be at least 6 characters.";

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Error message, or an empty string when valid
    pub fn message(&self) -> String {
        self.error.clone().unwrap_or_default()
    }
}

/// Validate email: non-empty and contains '@'
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() || !email.contains('@') {
        return ValidationResult::err(EMAIL_ERROR);
    }

    ValidationResult::ok()
}

/// Validate password: non-empty and at least [`MIN_PASSWORD_LEN`] characters
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() || password.chars().count() < MIN_PASSWORD_LEN {
        return ValidationResult::err(PASSWORD_ERROR);
    }

    ValidationResult::ok()
}

/// Outcome of validating both credential fields
///
/// Both rules are always evaluated, so both errors can be present at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialCheck {
    pub email: ValidationResult,
    pub password: ValidationResult,
}

impl CredentialCheck {
    pub fn is_valid(&self) -> bool {
        self.email.is_valid && self.password.is_valid
    }
}

/// Validate email and password independently
pub fn validate_credentials(email: &str, password: &str) -> CredentialCheck {
    CredentialCheck {
        email: validate_email(email),
        password: validate_password(password),
    }
}
