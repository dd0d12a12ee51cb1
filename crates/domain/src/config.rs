//! Configuration management

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{ENV_ALLOW_TEST_MODE, ENV_DATA_DIR, SAVE_DEBOUNCE_MS, TIMER_TICK_INTERVAL_MS};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub timer: TimerConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the JSON data files.
    pub data_dir: PathBuf,
    /// Debounce window for coalescing writes, in milliseconds.
    pub save_debounce_ms: u64,
    /// Capability flag: whether test mode may ever be enabled.
    /// Independent of the persisted test-mode setting.
    pub allow_test_mode: bool,
}

/// Timer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    pub tick_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                data_dir: PathBuf::from("hourglass-data"),
                save_debounce_ms: SAVE_DEBOUNCE_MS,
                allow_test_mode: false,
            },
            timer: TimerConfig { tick_interval_ms: TIMER_TICK_INTERVAL_MS },
        }
    }
}

impl Config {
    /// Default configuration with environment overrides applied.
    ///
    /// `HOURGLASS_DATA_DIR` relocates the data directory and
    /// `HOURGLASS_ALLOW_TEST_MODE=true` unlocks the test-mode capability.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
            if !dir.is_empty() {
                config.storage.data_dir = PathBuf::from(dir);
            }
        }
        if let Ok(flag) = std::env::var(ENV_ALLOW_TEST_MODE) {
            config.storage.allow_test_mode = flag.eq_ignore_ascii_case("true") || flag == "1";
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_locks_test_mode() {
        let config = Config::default();
        assert!(!config.storage.allow_test_mode);
        assert_eq!(config.storage.save_debounce_ms, 1_000);
        assert_eq!(config.timer.tick_interval_ms, 1_000);
    }
}
