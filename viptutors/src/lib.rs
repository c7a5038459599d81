//! # VIPTUTORS Client - Library Root
//!
//! A **native desktop GUI** front door for the VIPTUTORS tutoring platform:
//! a landing screen and a sign-in screen guarded by a captcha gate.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Landing Screen**: Branding, calls to action and a staggered entrance animation
//! - **Sign-In Form**: Inline email/password validation with shake feedback
//! - **Captcha Gate**: Modal verification before a (simulated) sign-in starts
//! - **Native GUI Window**: egui/eframe rendering with a light orange theme
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              viptutors (this crate)                    │
//! ├────────────────────────────────────────────────────────┤
//! │  egui          - Immediate-mode GUI framework          │
//! │  eframe        - Native window framework               │
//! │  Tokio         - Async runtime (sign-in delay)         │
//! │  tracing       - Structured logging                    │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Navigation host, screen state and async task plumbing
//!   - `signin`: Sign-in reducer (actions in, state + effects out)
//!   - `captcha`: Captcha codes and the modal gate state
//! - **core**: Errors, configuration and service traits
//! - **debug**: Logging setup
//! - **ui**: Rendering framework
//!   - `screens`: Landing and sign-in screens
//!   - `widgets`: Form, branding and captcha modal components
//!   - `theme`: Color palette and styling
//!   - `effects`: Shake and entrance animations
//! - **utils**: Validation rules and runtime bootstrap
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, input handling)
//!   │   ├── app::signin / app::captcha (pure state machines)
//!   │   └── core::service (AuthService)
//!   │
//!   └── ui (rendering)
//!       ├── screens::* (landing, signin)
//!       ├── widgets::* (forms, branding, captcha modal)
//!       ├── theme (colors, styles)
//!       └── effects (animations)
//! ```
//!
//! ## Core Concepts
//!
//! ### Event-Driven Architecture
//!
//! The application uses **async channels** for communication:
//!
//! ```text
//! User Input ──▶ App::handle_*() ──▶ SignInState::reduce()
//!                                        │
//!                                        ▼ SignInEffect::BeginSignIn
//!                                   tokio::spawn(sign_in)
//!                                        │
//!                                        ▼ AppEvent::SignInFinished
//!                                   App::on_tick() ──▶ busy = false
//! ```
//!
//! ### State Management
//!
//! Application state is stored in `Arc<RwLock<AppState>>`:
//!
//! - **Arc**: Shared ownership across async tasks
//! - **RwLock**: Multiple readers, single writer (parking_lot)
//! - The renderer clones a snapshot; handlers take short write locks
//!
//! ## Usage
//!
//! ```rust,no_run
//! use viptutors::{App, core::AppConfig};
//!
//! let runtime = viptutors::utils::runtime::build_runtime()?;
//! let _enter = runtime.enter();
//! let app = App::new(&AppConfig::from_env());
//! # Ok::<(), viptutors::AppError>(())
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppState, AppEvent, Screen};
pub use core::{AppError, Result};
