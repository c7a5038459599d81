//! Debug configuration from environment variables

use std::path::PathBuf;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "viptutors=info,warn";

/// Debug system configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Log level filter (e.g., "viptutors=debug,info")
    pub log_level: String,
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Mirror logs to stderr
    pub log_to_stderr: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: PathBuf::from("logs"),
            log_to_stderr: true,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    ///
    /// - `RUST_LOG`: filter directives
    /// - `VIPTUTORS_LOG_DIR`: directory of the rolling log file (default `logs`)
    /// - `VIPTUTORS_LOG_STDERR`: `0` disables the stderr layer
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup("RUST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_level),
            log_dir: lookup("VIPTUTORS_LOG_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_to_stderr: lookup("VIPTUTORS_LOG_STDERR")
                .map(|v| v.trim() != "0")
                .unwrap_or(defaults.log_to_stderr),
        }
    }

    /// Path of the active log file (before the date suffix is applied)
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(super::logger::LOG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DebugConfig::from_lookup(lookup(&[]));
        assert_eq!(config, DebugConfig::default());
        assert_eq!(config.log_file(), PathBuf::from("logs").join("viptutors.log"));
    }

    #[test]
    fn test_overrides() {
        let config = DebugConfig::from_lookup(lookup(&[
            ("RUST_LOG", "viptutors=debug"),
            ("VIPTUTORS_LOG_DIR", "/tmp/vt"),
            ("VIPTUTORS_LOG_STDERR", "0"),
        ]));
        assert_eq!(config.log_level, "viptutors=debug");
        assert_eq!(config.log_dir, PathBuf::from("/tmp/vt"));
        assert!(!config.log_to_stderr);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = DebugConfig::from_lookup(lookup(&[("RUST_LOG", "  "), ("VIPTUTORS_LOG_DIR", "")]));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert!(config.log_to_stderr);
    }
}
