//! User settings and dataset mode

use serde::{Deserialize, Serialize};

use crate::impl_mode_conversions;

/// Theme preference persisted for the host shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl_mode_conversions!(ThemeMode {
    Light => "light",
    Dark => "dark",
});

impl Default for ThemeMode {
    fn default() -> Self {
        Self::Light
    }
}

/// Which data universe is exposed to the application.
///
/// Production and test data are never merged; exactly one universe is
/// visible and writable at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataMode {
    Production,
    Test,
}

impl_mode_conversions!(DataMode {
    Production => "production",
    Test => "test",
});

impl Default for DataMode {
    fn default() -> Self {
        Self::Production
    }
}

/// Settings persisted through the backend contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub theme: ThemeMode,
    pub last_active_page: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self { theme: ThemeMode::default(), last_active_page: "dashboard".to_string() }
    }
}
