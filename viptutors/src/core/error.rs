//! # Common Error Types
//!
//! Consolidated error handling for the VIPTUTORS client.
//!
//! User input problems (a bad email, a missing captcha) are **not** errors in
//! this sense: they are plain strings stored on the screen state and rendered
//! inline. [`AppError`] covers the failures that happen at the system level.
//!
//! ## Error Categories
//!
//! - **Navigation**: a path the navigation host does not know
//! - **Config**: unreadable or invalid configuration
//! - **Theme**: theme palette file could not be read or parsed
//! - **Task**: background task failures (runtime start-up, aborted tasks)
//! - **Ui**: the native window could not be created
//!
//! ## Usage Pattern
//!
//! ```rust
//! use viptutors::core::error::{AppError, Result};
//!
//! fn route(path: &str) -> Result<()> {
//!     if path.is_empty() {
//!         return Err(AppError::Navigation("empty path".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Application-wide error type.
///
/// # Example
///
/// ```rust
/// use viptutors::core::error::AppError;
///
/// let err = AppError::Navigation("/signup".to_string());
/// assert_eq!(err.to_string(), "Navigation error: no route for /signup");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// The navigation host has no screen mounted at this path.
    #[error("Navigation error: no route for {0}")]
    Navigation(String),

    /// Configuration could not be read or is invalid.
    #[error("Config error: {0}")]
    Config(String),

    /// Theme palette file could not be loaded or saved.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Background task failure (runtime creation, auth call).
    #[error("Task error: {0}")]
    Task(String),

    /// Native window / renderer failure.
    #[error("UI error: {0}")]
    Ui(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Theme(err.to_string())
    }
}

impl From<eframe::Error> for AppError {
    fn from(err: eframe::Error) -> Self {
        AppError::Ui(err.to_string())
    }
}
