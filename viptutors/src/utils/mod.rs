//! # Utility Functions
//!
//! Shared utility functions used across the client.
//!
//! ## Modules
//!
//! - **[`validation`]**: Credential validation rules and their messages
//! - **[`runtime`]**: Tokio runtime bootstrap for background tasks

pub mod runtime;
pub mod validation;
