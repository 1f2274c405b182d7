//! Error types for marker operations
//!
//! Most interaction failures are not errors at all: unknown targets and
//! releases without a selection degrade to no-ops. `MarkerError` covers the
//! cases a caller can act on.

use thiserror::Error;

/// Errors that can occur while configuring or mutating markers
#[derive(Error, Debug)]
pub enum MarkerError {
    /// Marker time is negative, NaN or infinite
    #[error("Invalid marker time: {0}")]
    InvalidTime(f64),

    /// A limit is negative, NaN or infinite
    #[error("Invalid marker limit: {0}")]
    InvalidLimit(f64),

    /// Lower limit is greater than upper limit
    #[error("Inverted limits: lower {lower} > upper {upper}")]
    InvertedLimits { lower: f64, upper: f64 },

    /// Duration or visible width can't be mapped to pixels
    #[error("Degenerate timeline geometry: duration {duration}s, width {width}px")]
    DegenerateGeometry { duration: f64, width: f64 },

    /// Operation on a timeline that has been torn down
    #[error("Timeline has been destroyed")]
    Destroyed,

    /// IO error while reading configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type alias for marker operations
pub type MarkerResult<T> = Result<T, MarkerError>;

impl MarkerError {
    /// Whether the error leaves the timeline fully usable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, MarkerError::Destroyed)
    }
}
