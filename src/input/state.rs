//! Drag state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Pressed   (press on a draggable marker)
//! Pressed  -> Dragging  (first pointer move)
//! Dragging -> Dragging  (further pointer moves)
//! Pressed  -> Settling  (release)
//! Dragging -> Settling  (release)
//! Settling -> Idle      (next scheduler tick)
//! ```
//!
//! `Settling` keeps the gesture visible for the rest of the tick that
//! delivered the release, so a click racing the release can see that a drag
//! just ended and suppress itself.

use crate::types::MarkerKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No gesture in progress
    #[default]
    Idle,

    /// A draggable marker was pressed; no move yet
    Pressed { marker: MarkerKey },

    /// The selected marker follows the pointer
    Dragging { marker: MarkerKey },

    /// Released this tick; cleared by the next tick
    Settling { marker: MarkerKey },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self, Self::Pressed { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn is_settling(&self) -> bool {
        matches!(self, Self::Settling { .. })
    }

    /// Marker currently selected for a gesture (pressed or dragging)
    pub fn selected_marker(&self) -> Option<MarkerKey> {
        match self {
            Self::Pressed { marker } | Self::Dragging { marker } => Some(*marker),
            _ => None,
        }
    }

    /// Marker involved in any non-idle state
    pub fn marker(&self) -> Option<MarkerKey> {
        match self {
            Self::Idle => None,
            Self::Pressed { marker } | Self::Dragging { marker } | Self::Settling { marker } => {
                Some(*marker)
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
