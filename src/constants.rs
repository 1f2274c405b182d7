//! Crate-wide constants.
//!
//! Centralizes defaults and timing values so the marker defaults, the drag
//! throttle and the headless backend agree on the same numbers.

// ============================================================================
// Marker Defaults
// ============================================================================

/// Fill color given to markers that don't specify one
pub const DEFAULT_MARKER_COLOR: &str = "#D8D8D8";

/// Width of the default marker pointer icon in pixels
pub const DEFAULT_POINTER_WIDTH: f64 = 11.0;

/// Height of the default marker pointer icon in pixels
pub const DEFAULT_POINTER_HEIGHT: f64 = 22.0;

/// Approximate width of one label character for headless layout
pub const HEADLESS_LABEL_CHAR_WIDTH: f64 = 7.0;

/// Horizontal padding between pointer and label for headless layout
pub const HEADLESS_LABEL_PADDING: f64 = 4.0;

// ============================================================================
// Interaction & Timing
// ============================================================================

/// Minimum interval between two `marker-drag` notifications in milliseconds
pub const DRAG_THROTTLE_MS: u64 = 50;

/// Reposition passes slower than this are reported when profiling
pub const REPOSITION_WARN_MS: f64 = 4.0;

// ============================================================================
// Logging
// ============================================================================

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "timeline_markers=info";
