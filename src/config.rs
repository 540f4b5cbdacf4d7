//! Page-level configuration.
//!
//! The server template may embed a JSON block:
//!
//! ```html
//! <script type="application/json" id="xavier-ui-config">
//!   { "storage_key": "xavier-theme", "log_level": "debug" }
//! </script>
//! ```
//!
//! Every field is optional; absent fields keep their defaults.

use serde::Deserialize;

use crate::consts::THEME_STORAGE_KEY;
use crate::error::UiError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Runtime settings for the enhancement layer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// `localStorage` key holding the theme preference.
    pub storage_key: String,
    /// Console log level: `error`, `warn`, `info`, `debug`, or `trace`.
    pub log_level: String,
    /// Coalesce navbar scroll handling to one update per animation frame.
    pub throttle_scroll: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_owned(),
            log_level: "info".to_owned(),
            throttle_scroll: true,
        }
    }
}

impl UiConfig {
    /// Parse the inline config block.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] when `raw` is not a JSON object matching
    /// the config shape.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// The configured log level, falling back to `Info` for unknown names.
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
