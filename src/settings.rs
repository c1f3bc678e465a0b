//! Startup configuration read from config.json in the app data directory.
//!
//! The file is optional and only ever read. Nothing the user changes in the
//! window (theme, selections, amount) is written back.

use crate::constants::{DEFAULT_SOURCE, DEFAULT_TARGET, FLAGS_BASE_URL, RATES_BASE_URL};
use crate::converter::CompletionOrder;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Endpoints
    pub rates_base_url: String,
    pub flags_base_url: String,

    // Initial selection
    pub default_source: String,
    pub default_target: String,

    /// Apply only the newest request's response when fetches overlap
    pub sequence_requests: bool,

    // Window geometry
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rates_base_url: RATES_BASE_URL.to_string(),
            flags_base_url: FLAGS_BASE_URL.to_string(),
            default_source: DEFAULT_SOURCE.to_string(),
            default_target: DEFAULT_TARGET.to_string(),
            sequence_requests: true,
            window_width: 460.0,
            window_height: 560.0,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(CONFIG_FILE);
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Configuration loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse configuration, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No configuration file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn completion_order(&self) -> CompletionOrder {
        if self.sequence_requests {
            CompletionOrder::Sequenced
        } else {
            CompletionOrder::Legacy
        }
    }
}
