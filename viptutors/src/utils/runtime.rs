//! Tokio runtime for background tasks
//!
//! egui owns the main thread and never awaits anything, so the runtime is
//! built up-front and entered for the lifetime of the window. Handlers then
//! use `tokio::spawn` directly from the UI thread:
//!
//! ```rust,no_run
//! let runtime = viptutors::utils::runtime::build_runtime()?;
//! let _guard = runtime.enter();
//! // tokio::spawn(...) now works from egui callbacks
//! # Ok::<(), viptutors::core::AppError>(())
//! ```

use tokio::runtime::{Builder, Runtime};

use crate::core::error::{AppError, Result};

/// Worker threads for the background runtime. The only task is a timer.
const WORKER_THREADS: usize = 1;

/// Build the background runtime
pub fn build_runtime() -> Result<Runtime> {
    Builder::new_multi_thread()
        .worker_threads(WORKER_THREADS)
        .thread_name("viptutors-worker")
        .enable_time()
        .build()
        .map_err(|e| AppError::Task(format!("Failed to create Tokio runtime: {e}")))
}
