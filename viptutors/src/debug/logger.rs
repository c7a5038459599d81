//! File-based logging initialization

use super::config::{DebugConfig, DEFAULT_LOG_LEVEL};
use crate::core::error::Result;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use std::fs;

/// Name of the rolling log file inside the log directory
pub const LOG_FILE_NAME: &str = "viptutors.log";

/// Initialize the logging system
///
/// Sets up:
/// - Daily log rotation under the configured log directory
/// - Non-blocking writes to prevent UI lag
/// - An optional stderr mirror
/// - Panic hook integration for crash logging
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// lifetime of the program. `None` means file logging could not be set up
/// and only stderr is used.
pub fn init(config: &DebugConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let stderr_layer = config.log_to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact()
    });

    let (file_layer, guard) = match file_writer(config) {
        Ok((non_blocking, guard)) => {
            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false); // No ANSI codes in log files
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("Warning: File logging disabled: {e}");
            (None, None)
        }
    };

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();
    if let Err(e) = installed {
        eprintln!("Warning: Logging already initialized: {e}");
    }

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        stderr = config.log_to_stderr,
        "Logging initialized"
    );

    setup_panic_hook();
    guard
}

/// Create the log directory and a non-blocking daily-rotated writer inside it
pub fn file_writer(config: &DebugConfig) -> Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(&config.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
    Ok(tracing_appender::non_blocking(file_appender))
}

/// Set up panic hook to log panics with location and message
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(
            location = %location,
            message = %message,
            "Application panic"
        );

        default_panic(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("viptutors-log-test-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_file_writer_creates_log_dir() {
        let dir = scratch_dir("ok").join("nested");
        let config = DebugConfig {
            log_dir: dir.clone(),
            ..DebugConfig::default()
        };
        let (_writer, _guard) = file_writer(&config).expect("log dir is creatable");
        assert!(dir.is_dir());
        let _ = fs::remove_dir_all(scratch_dir("ok"));
    }

    #[test]
    fn test_unusable_log_dir_is_config_error() {
        // A regular file where the directory should go
        let blocker = scratch_dir("blocked");
        fs::write(&blocker, "not a directory").expect("write blocker");
        let config = DebugConfig {
            log_dir: blocker.join("logs"),
            ..DebugConfig::default()
        };
        let err = file_writer(&config).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        let _ = fs::remove_file(&blocker);
    }
}
