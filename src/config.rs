//! Marker configuration.
//!
//! Defaults applied to new markers and interaction tuning. Loaded from JSON;
//! every field is optional and falls back to the built-in default.

use crate::constants::{DEFAULT_MARKER_COLOR, DRAG_THROTTLE_MS};
use crate::error::MarkerResult;
use crate::types::{MarkerPosition, TextPosition};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Color for markers added without one
    pub default_color: String,
    pub default_position: MarkerPosition,
    pub default_text_position: TextPosition,
    /// Minimum gap between `marker-drag` notifications
    pub drag_throttle_ms: u64,
    /// Reject specs and patches whose lower limit exceeds the upper limit.
    /// When false such markers are accepted and clamping pins them to the
    /// upper limit.
    pub reject_inverted_limits: bool,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_MARKER_COLOR.to_string(),
            default_position: MarkerPosition::default(),
            default_text_position: TextPosition::default(),
            drag_throttle_ms: DRAG_THROTTLE_MS,
            reject_inverted_limits: true,
        }
    }
}

impl MarkerConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> MarkerResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        debug!(path = %path.display(), "Loaded marker config");
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> MarkerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn throttle_interval(&self) -> Duration {
        Duration::from_millis(self.drag_throttle_ms)
    }
}
