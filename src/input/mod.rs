//! Drag interaction for markers.
//!
//! ## Architecture
//!
//! The drag system uses an explicit state machine (`DragState`) to track the
//! single selected marker through a press/move/release gesture. The
//! controller decides what each input means and returns a `DragOutcome`;
//! the timeline applies it (writes the time, repositions, notifies).
//!
//! ## Modules
//!
//! - `state` - Drag state machine enum and helper methods
//! - `throttle` - Rate limit for `marker-drag` notifications
//! - `drag` - Press/move/release/tick transitions

mod drag;
mod state;
mod throttle;

pub use drag::{DragController, DragOutcome};
pub use state::DragState;
pub use throttle::Throttle;
