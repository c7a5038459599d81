//! Application configuration from environment variables

use std::path::PathBuf;
use std::time::Duration;

/// Default delay of the simulated sign-in call.
pub const DEFAULT_SIGN_IN_DELAY_MS: u64 = 1200;

/// Default location of the theme palette file.
pub const DEFAULT_THEME_FILE: &str = "./viptutors-theme.json";

/// Runtime configuration for the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// How long the simulated sign-in keeps the form busy
    pub sign_in_delay: Duration,
    /// Theme palette file (JSON)
    pub theme_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sign_in_delay: Duration::from_millis(DEFAULT_SIGN_IN_DELAY_MS),
            theme_file: PathBuf::from(DEFAULT_THEME_FILE),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `VIPTUTORS_SIGNIN_DELAY_MS`: simulated sign-in delay (default 1200)
    /// - `VIPTUTORS_THEME_FILE`: theme palette path (default `./viptutors-theme.json`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Invalid values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let sign_in_delay = match lookup("VIPTUTORS_SIGNIN_DELAY_MS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "Invalid VIPTUTORS_SIGNIN_DELAY_MS, using default");
                    defaults.sign_in_delay
                }
            },
            None => defaults.sign_in_delay,
        };

        let theme_file = lookup("VIPTUTORS_THEME_FILE")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.theme_file);

        Self {
            sign_in_delay,
            theme_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.sign_in_delay, Duration::from_millis(1200));
    }

    #[test]
    fn test_delay_override() {
        let config = AppConfig::from_lookup(lookup_from(&[("VIPTUTORS_SIGNIN_DELAY_MS", "250")]));
        assert_eq!(config.sign_in_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_delay_falls_back() {
        let config = AppConfig::from_lookup(lookup_from(&[("VIPTUTORS_SIGNIN_DELAY_MS", "soon")]));
        assert_eq!(config.sign_in_delay, Duration::from_millis(DEFAULT_SIGN_IN_DELAY_MS));
    }

    #[test]
    fn test_theme_file_override() {
        let config = AppConfig::from_lookup(lookup_from(&[("VIPTUTORS_THEME_FILE", "/tmp/palette.json")]));
        assert_eq!(config.theme_file, PathBuf::from("/tmp/palette.json"));

        let empty = AppConfig::from_lookup(lookup_from(&[("VIPTUTORS_THEME_FILE", "")]));
        assert_eq!(empty.theme_file, PathBuf::from(DEFAULT_THEME_FILE));
    }
}
