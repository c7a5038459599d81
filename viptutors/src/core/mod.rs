//! # Core Abstractions
//!
//! Core traits, configuration and error types shared by the whole client.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`config`]**: Environment-driven runtime configuration (`AppConfig`)
//! - **[`service`]**: Service traits for dependency injection (`AuthService`, `Navigator`)
//!
//! ## Dependency Injection
//!
//! The sign-in flow talks to its backend through [`AuthService`], so tests can
//! swap the simulated delay for a fake:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use viptutors::core::service::{AuthService, SimulatedAuthService};
//!
//! let auth: Arc<dyn AuthService> = Arc::new(SimulatedAuthService::new(Duration::from_millis(1200)));
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use service::{AuthService, Navigator, SimulatedAuthService};
