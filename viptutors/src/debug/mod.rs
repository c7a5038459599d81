//! # Logging Infrastructure
//!
//! File-based structured logging for the VIPTUTORS client.
//!
//! ## Features
//!
//! - **File-based logging**: `logs/viptutors.log` with daily rotation
//! - **stderr mirror**: on by default, `VIPTUTORS_LOG_STDERR=0` turns it off
//! - **Panic logging**: panics are recorded through `tracing`
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Initialize at app startup; keep the guard alive
//! let _log_guard = debug::init();
//!
//! // Log with structured fields
//! tracing::info!(ticket = 1, "Sign-in started");
//! ```
//!
//! Credentials and captcha codes are never logged.
//!
//! ## Configuration
//!
//! See [`DebugConfig::from_env`].

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use tracing_appender::non_blocking::WorkerGuard;

/// Initialize the logging system from the environment
///
/// Call this at application startup, before any other operations.
pub fn init() -> Option<WorkerGuard> {
    let config = DebugConfig::from_env();
    logger::init(&config)
}

/// Check if debug mode is enabled via feature flag
pub fn is_debug_mode() -> bool {
    cfg!(feature = "debug-mode")
}
