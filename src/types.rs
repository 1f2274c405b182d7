//! Core marker types.
//!
//! Defines the stored [`Marker`] record, the value objects used to create
//! ([`MarkerSpec`]) and modify ([`MarkerPatch`]) markers, and the pointer
//! event the host forwards during interaction.

use crate::config::MarkerConfig;
use crate::error::{MarkerError, MarkerResult};
use serde::{Deserialize, Serialize};
use std::time::Instant;

// ============================================================================
// Identity
// ============================================================================

/// Stable handle to a stored marker.
///
/// Unlike positional indices, a key stays valid when earlier markers are
/// removed. Keys are never reused within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerKey(pub(crate) u64);

impl MarkerKey {
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Which marker an update addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerTarget {
    /// First marker in store order whose `id` matches
    ById(String),
    /// Marker at this position in store order (0 is a valid index)
    ByIndex(usize),
}

// ============================================================================
// Styling
// ============================================================================

/// Vertical lane the marker pointer sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerPosition {
    Top,
    #[default]
    Bottom,
}

/// Side of the pointer the label is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPosition {
    Left,
    #[default]
    Right,
}

/// The fields a visual factory needs to build a marker's node.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub label: Option<String>,
    pub color: String,
    pub position: MarkerPosition,
    pub text_position: TextPosition,
    pub draggable: bool,
}

// ============================================================================
// Marker
// ============================================================================

/// A time-anchored annotation as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: Option<String>,
    /// Time in seconds
    pub time: f64,
    pub label: Option<String>,
    pub color: String,
    pub position: MarkerPosition,
    pub text_position: TextPosition,
    pub draggable: bool,
    pub prevent_context_menu: bool,
    pub lower_limit: Option<f64>,
    pub upper_limit: Option<f64>,
    /// Half the pointer width, kept in sync with the marker's visual node
    pub offset: f64,
}

impl Marker {
    /// Build a marker from a spec, filling unset fields from `config`.
    pub fn from_spec(spec: MarkerSpec, config: &MarkerConfig) -> MarkerResult<Self> {
        validate_time(spec.time)?;
        Ok(Self {
            id: spec.id,
            time: spec.time,
            label: spec.label,
            color: spec.color.unwrap_or_else(|| config.default_color.clone()),
            position: spec.position.unwrap_or(config.default_position),
            text_position: spec.text_position.unwrap_or(config.default_text_position),
            draggable: spec.draggable.unwrap_or(false),
            prevent_context_menu: spec.prevent_context_menu.unwrap_or(false),
            lower_limit: spec.lower_limit,
            upper_limit: spec.upper_limit,
            offset: 0.0,
        })
    }

    pub fn style(&self) -> MarkerStyle {
        MarkerStyle {
            label: self.label.clone(),
            color: self.color.clone(),
            position: self.position,
            text_position: self.text_position,
            draggable: self.draggable,
        }
    }

    /// Overwrite every field present on `patch`.
    ///
    /// Returns true when a styling field changed and the visual node has to
    /// be rebuilt.
    pub fn apply(&mut self, patch: MarkerPatch) -> bool {
        let before = self.style();

        if let Some(id) = patch.id {
            self.id = Some(id);
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(label) = patch.label {
            self.label = Some(label);
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(text_position) = patch.text_position {
            self.text_position = text_position;
        }
        if let Some(draggable) = patch.draggable {
            self.draggable = draggable;
        }
        if let Some(prevent) = patch.prevent_context_menu {
            self.prevent_context_menu = prevent;
        }
        if let Some(lower) = patch.lower_limit {
            self.lower_limit = Some(lower);
        }
        if let Some(upper) = patch.upper_limit {
            self.upper_limit = Some(upper);
        }

        self.style() != before
    }

    pub fn has_limits(&self) -> bool {
        self.lower_limit.is_some() || self.upper_limit.is_some()
    }
}

/// Times must be finite and non-negative.
pub(crate) fn validate_time(time: f64) -> MarkerResult<()> {
    if time.is_finite() && time >= 0.0 {
        Ok(())
    } else {
        Err(MarkerError::InvalidTime(time))
    }
}

// ============================================================================
// Spec & Patch
// ============================================================================

/// Description of a marker to add. Unset fields take configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkerSpec {
    pub time: f64,
    pub id: Option<String>,
    pub label: Option<String>,
    pub color: Option<String>,
    pub position: Option<MarkerPosition>,
    pub text_position: Option<TextPosition>,
    pub draggable: Option<bool>,
    pub prevent_context_menu: Option<bool>,
    pub lower_limit: Option<f64>,
    pub upper_limit: Option<f64>,
}

impl MarkerSpec {
    /// Spec for a marker at `time` seconds.
    pub fn at(time: f64) -> Self {
        Self {
            time,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_position(mut self, position: MarkerPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_text_position(mut self, text_position: TextPosition) -> Self {
        self.text_position = Some(text_position);
        self
    }

    pub fn draggable(mut self) -> Self {
        self.draggable = Some(true);
        self
    }

    pub fn prevent_context_menu(mut self) -> Self {
        self.prevent_context_menu = Some(true);
        self
    }

    pub fn with_limits(mut self, lower: Option<f64>, upper: Option<f64>) -> Self {
        self.lower_limit = lower;
        self.upper_limit = upper;
        self
    }
}

/// Partial update of a stored marker. Only `Some` fields change.
///
/// Limits can be set but not unset; remove and re-add the marker to drop a
/// limit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkerPatch {
    pub id: Option<String>,
    pub time: Option<f64>,
    pub label: Option<String>,
    pub color: Option<String>,
    pub position: Option<MarkerPosition>,
    pub text_position: Option<TextPosition>,
    pub draggable: Option<bool>,
    pub prevent_context_menu: Option<bool>,
    pub lower_limit: Option<f64>,
    pub upper_limit: Option<f64>,
}

impl MarkerPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time(mut self, time: f64) -> Self {
        self.time = Some(time);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn text_position(mut self, text_position: TextPosition) -> Self {
        self.text_position = Some(text_position);
        self
    }

    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = Some(draggable);
        self
    }

    pub fn limits(mut self, lower: Option<f64>, upper: Option<f64>) -> Self {
        self.lower_limit = lower;
        self.upper_limit = upper;
        self
    }
}

// ============================================================================
// Pointer input
// ============================================================================

/// A mouse event as forwarded by the host.
///
/// `x` is in the host's own coordinate space; the host translates it into a
/// timeline fraction through [`crate::TimelineHost::pointer_fraction`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub timestamp: Instant,
}

impl PointerEvent {
    pub fn new(x: f64, y: f64, timestamp: Instant) -> Self {
        Self { x, y, timestamp }
    }

    /// Event at horizontal position `x`, stamped now.
    pub fn at(x: f64) -> Self {
        Self::new(x, 0.0, Instant::now())
    }
}
