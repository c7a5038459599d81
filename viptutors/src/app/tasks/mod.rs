//! # Async Tasks
//!
//! Async task spawning for background work. The client has one: the
//! simulated sign-in call.

pub mod sign_in;

pub use sign_in::PendingSignIn;
