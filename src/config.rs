//! Frontend Configuration
//!
//! Read from the `config` object of the page payload. Every field has a default,
//! so an absent or partial object is fine.

use serde::{Deserialize, Serialize};

use list_filter::DEFAULT_DEBOUNCE_MS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Delay before a search-box edit refilters; 0 filters on every keystroke
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u32,
    /// `log` level name: off, error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_debounce_ms() -> u32 {
    DEFAULT_DEBOUNCE_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            log_level: default_log_level(),
        }
    }
}
