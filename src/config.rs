//! Process-wide logger configuration
//!
//! [`LoggerConfig`] carries the settings a host program chooses once and may
//! mutate at any time through the [`Logger`](crate::logger::Logger): the
//! enabled-category allow-list, timestamp behavior, and the duration format
//! flag. The sink is not part of the serialized config; it is an external
//! collaborator supplied by the host.
//!
//! # Example TOML
//!
//! ```toml
//! enabled_categories = ["Main Events", "Parsing"]
//! print_timestamp = true
//! full_timer_format = false
//! timestamp_format = "%Y-%m-%d %H:%M:%S"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::emitter::DEFAULT_TIMESTAMP_FORMAT;

/// Runtime configuration for a [`Logger`](crate::logger::Logger).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggerConfig {
    /// Categories that produce output; everything else stays inert
    #[serde(default)]
    pub enabled_categories: Vec<String>,

    /// Populate the timestamp field of every line
    #[serde(default = "default_true")]
    pub print_timestamp: bool,

    /// Render zero-valued leading duration components instead of eliding them
    #[serde(default)]
    pub full_timer_format: bool,

    /// strftime pattern for the timestamp field
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_true() -> bool {
    true
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            enabled_categories: Vec::new(),
            print_timestamp: true,
            full_timer_format: false,
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl LoggerConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse logger config TOML")
    }
}
