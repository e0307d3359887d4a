//! Runtime configuration.
//!
//! Defaults match the classic behaviour: tabs every 8 columns, three quit confirmations on a
//! dirty buffer and status messages that fade after five seconds. With the `config` feature a
//! TOML file can override any of them.

use crate::error::{EditorError, Result};
use std::time::Duration;

/// Default distance between tab stops.
pub const DEFAULT_TAB_STOP: usize = 8;
/// Quit requests rejected on a dirty buffer before quitting is allowed.
pub const DEFAULT_QUIT_TIMES: u32 = 3;
/// Seconds a status message stays on the message bar.
pub const DEFAULT_MESSAGE_TIMEOUT_SECS: u64 = 5;

/// Settings consulted by the buffer, the compositor and the key dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub tab_stop: usize,
    pub quit_times: u32,
    pub message_timeout: Duration,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: DEFAULT_TAB_STOP,
            quit_times: DEFAULT_QUIT_TIMES,
            message_timeout: Duration::from_secs(DEFAULT_MESSAGE_TIMEOUT_SECS),
        }
    }
}

impl EditorConfig {
    /// Override the tab stop, rejecting zero.
    pub fn with_tab_stop(mut self, tab_stop: usize) -> Result<Self> {
        if tab_stop == 0 {
            return Err(EditorError::invalid_argument("tab stop must be at least 1"));
        }
        self.tab_stop = tab_stop;
        Ok(self)
    }
}

#[cfg(feature = "config")]
mod file {
    use super::EditorConfig;
    use crate::error::{EditorError, Result};
    use serde::Deserialize;
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    /// On-disk shape of the configuration file; every key is optional.
    #[derive(Debug, Default, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct ConfigFile {
        tab_stop: Option<usize>,
        quit_times: Option<u32>,
        message_timeout_secs: Option<u64>,
    }

    impl EditorConfig {
        /// Load configuration from `explicit`, or from the per-user default location.
        ///
        /// A missing default file yields the defaults; a missing explicit file is an error.
        pub fn load(explicit: Option<&Path>) -> Result<Self> {
            let path = match explicit {
                Some(path) => {
                    if !path.is_file() {
                        return Err(EditorError::config(format!(
                            "config file not found: {}",
                            path.display()
                        )));
                    }
                    path.to_path_buf()
                }
                None => match Self::default_path() {
                    Some(path) if path.is_file() => path,
                    _ => return Ok(Self::default()),
                },
            };

            let text = std::fs::read_to_string(&path).map_err(|err| {
                EditorError::config(format!("cannot read {}: {}", path.display(), err))
            })?;
            log::debug!("loading configuration from {}", path.display());
            Self::from_toml_str(&text)
        }

        /// `<config_dir>/kedit/config.toml`, when the platform has a config directory.
        pub fn default_path() -> Option<PathBuf> {
            dirs::config_dir().map(|dir| dir.join("kedit").join("config.toml"))
        }

        /// Parse a TOML document on top of the defaults.
        pub fn from_toml_str(text: &str) -> Result<Self> {
            let parsed: ConfigFile =
                toml::from_str(text).map_err(|err| EditorError::config(err.to_string()))?;

            let mut config = Self::default();
            if let Some(tab_stop) = parsed.tab_stop {
                if tab_stop == 0 {
                    return Err(EditorError::config("tab_stop must be at least 1"));
                }
                config.tab_stop = tab_stop;
            }
            if let Some(quit_times) = parsed.quit_times {
                config.quit_times = quit_times;
            }
            if let Some(secs) = parsed.message_timeout_secs {
                config.message_timeout = Duration::from_secs(secs);
            }
            Ok(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.tab_stop, 8);
        assert_eq!(config.quit_times, 3);
        assert_eq!(config.message_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_tab_stop_override() {
        let config = EditorConfig::default().with_tab_stop(4).unwrap();
        assert_eq!(config.tab_stop, 4);
        assert!(EditorConfig::default().with_tab_stop(0).is_err());
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EditorConfig::from_toml_str("tab_stop = 4\n").unwrap();
        assert_eq!(config.tab_stop, 4);
        assert_eq!(config.quit_times, DEFAULT_QUIT_TIMES);

        let config = EditorConfig::from_toml_str("quit_times = 1\nmessage_timeout_secs = 2\n")
            .unwrap();
        assert_eq!(config.tab_stop, DEFAULT_TAB_STOP);
        assert_eq!(config.quit_times, 1);
        assert_eq!(config.message_timeout, Duration::from_secs(2));
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_invalid_toml_is_config_error() {
        assert!(matches!(
            EditorConfig::from_toml_str("tab_stop = 0"),
            Err(EditorError::ConfigError { .. })
        ));
        assert!(matches!(
            EditorConfig::from_toml_str("colour = \"red\""),
            Err(EditorError::ConfigError { .. })
        ));
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_load_explicit_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "tab_stop = 2\n").unwrap();
        let config = EditorConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.tab_stop, 2);

        let missing = file.path().with_extension("missing");
        assert!(EditorConfig::load(Some(&missing)).is_err());
    }
}
