//! Time-anchored markers for media timelines.
//!
//! A [`MarkerTimeline`] owns an ordered set of markers, maps each marker's
//! time to a horizontal pixel offset, and runs the press/move/release drag
//! protocol that lets a user move draggable markers within their limits.
//!
//! Rendering and playback stay outside the crate. The host supplies timeline
//! geometry through [`TimelineHost`] and builds visual nodes through a
//! [`VisualFactory`]; application code listens for `marker-click`,
//! `marker-drag`, `marker-drop` and `marker-contextmenu` notifications on the
//! timeline's [`EventBus`].
//!
//! ## Modules
//!
//! - `coords` - time <-> pixel mapping
//! - `limits` - per-marker limit clamping
//! - `store` - ordered marker registry
//! - `input` - drag state machine and move throttling
//! - `events` - notifications and host lifecycle signals
//! - `timeline` - the plugin instance tying everything together

pub mod config;
pub mod constants;
pub mod coords;
pub mod error;
pub mod events;
pub mod host;
pub mod input;
pub mod limits;
pub mod logging;
pub mod perf;
pub mod spatial_index;
pub mod store;
pub mod timeline;
pub mod types;
pub mod visual;

pub use config::MarkerConfig;
pub use coords::{CoordinateMapper, Placement, TimelineGeometry, VisualWidths};
pub use error::{MarkerError, MarkerResult};
pub use events::{EventBus, MarkerEvent, MarkerEventKind, SubscriptionId, TimelineSignal};
pub use host::{FixedHost, TimelineHost};
pub use input::{DragController, DragOutcome, DragState, Throttle};
pub use limits::LimitPolicy;
pub use store::MarkerStore;
pub use timeline::{MarkerTimeline, SharedTimeline};
pub use types::{
    Marker, MarkerKey, MarkerPatch, MarkerPosition, MarkerSpec, MarkerStyle, MarkerTarget,
    PointerEvent, TextPosition,
};
pub use visual::{HeadlessFactory, HeadlessNode, VisualFactory, VisualNode};
