//! # Reusable UI Widgets
//!
//! Common widgets used across screens.

pub mod branding;
pub mod captcha_modal;
pub mod forms;
