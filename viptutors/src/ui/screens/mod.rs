//! # Screen Modules
//!
//! Each screen module contains the rendering logic for one route.
//!
//! - **[`landing`]** (`/`): Welcome screen with entrance animation
//! - **[`signin`]** (`/signin`): Credentials form with captcha modal
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(
//!     ui: &mut egui::Ui,
//!     state: &AppState,
//!     app: &mut impl AppLike,
//! ) {
//!     // - Read from the state snapshot
//!     // - Call app.handle_* methods for user actions
//! }
//! ```
//!
//! Screens receive a **cloned state snapshot**; no lock is held while
//! drawing. User actions call `app.handle_*` methods, which take the write
//! lock internally.

pub mod landing;
pub mod signin;
