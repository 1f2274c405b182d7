//! Press/move/release handling for marker drags.
//!
//! ## Performance Notes
//!
//! Pointer moves arrive at device rate (often 100+ per second). Every move
//! repositions the marker so the visual tracks the pointer exactly; only the
//! `marker-drag` notification is throttled.

use crate::input::state::DragState;
use crate::input::throttle::Throttle;
use crate::limits::LimitPolicy;
use crate::store::MarkerStore;
use crate::types::MarkerKey;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// What an input means for the timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Nothing to do
    Ignored,
    /// A draggable marker became the selected marker
    Selected(MarkerKey),
    /// Direct click on a non-draggable marker
    Click(MarkerKey),
    /// Selected marker moves to `time`; `notify` says whether to emit
    /// `marker-drag`
    Moved { key: MarkerKey, time: f64, notify: bool },
    /// Gesture finished at `time`
    Dropped { key: MarkerKey, time: f64 },
}

#[derive(Debug)]
pub struct DragController {
    state: DragState,
    throttle: Throttle,
}

impl DragController {
    pub fn new(throttle_interval: Duration) -> Self {
        Self {
            state: DragState::Idle,
            throttle: Throttle::new(throttle_interval),
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Press on the anchor of marker `key`.
    ///
    /// Draggable markers are selected when no other gesture is active.
    /// Non-draggable markers click, unless a gesture is active or has just
    /// ended.
    pub fn press(&mut self, store: &MarkerStore, key: MarkerKey) -> DragOutcome {
        let Some(marker) = store.get(key) else {
            debug!(key = key.raw(), "press on unknown marker");
            return DragOutcome::Ignored;
        };

        if !marker.draggable {
            if self.state.is_idle() {
                return DragOutcome::Click(key);
            }
            debug!(key = key.raw(), state = ?self.state, "click suppressed during drag");
            return DragOutcome::Ignored;
        }

        if self.state.is_settling() {
            self.tick();
        }

        if let Some(selected) = self.state.selected_marker() {
            debug!(
                key = key.raw(),
                selected = selected.raw(),
                "press ignored, another marker is selected"
            );
            return DragOutcome::Ignored;
        }

        self.state = DragState::Pressed { marker: key };
        debug!(key = key.raw(), "marker selected");
        DragOutcome::Selected(key)
    }

    /// Pointer moved; `candidate` is the unclamped time under the pointer.
    pub fn pointer_move(&mut self, store: &MarkerStore, candidate: f64, at: Instant) -> DragOutcome {
        let Some(key) = self.state.selected_marker() else {
            return DragOutcome::Ignored;
        };
        let Some(marker) = store.get(key) else {
            debug!(key = key.raw(), "selected marker vanished, ending gesture");
            self.state.reset();
            return DragOutcome::Ignored;
        };

        let time = LimitPolicy::clamp(candidate, marker);
        let notify = if self.state.is_pressed() {
            self.state = DragState::Dragging { marker: key };
            self.throttle.mark(at);
            debug!(key = key.raw(), time, "drag started");
            true
        } else {
            self.throttle.try_fire(at)
        };

        trace!(key = key.raw(), time, notify, "drag move");
        DragOutcome::Moved { key, time, notify }
    }

    /// Pointer released anywhere.
    ///
    /// `candidate` is `None` when the timeline geometry can't be mapped; the
    /// marker then keeps its current time but the gesture still ends.
    pub fn release(&mut self, store: &MarkerStore, candidate: Option<f64>) -> DragOutcome {
        let Some(key) = self.state.selected_marker() else {
            return DragOutcome::Ignored;
        };
        let Some(marker) = store.get(key) else {
            self.state.reset();
            return DragOutcome::Ignored;
        };

        let time = match candidate {
            Some(candidate) => LimitPolicy::clamp(candidate, marker),
            None => marker.time,
        };
        self.state = DragState::Settling { marker: key };
        self.throttle.reset();
        debug!(key = key.raw(), time, "marker dropped");
        DragOutcome::Dropped { key, time }
    }

    /// Next scheduler tick: a settling gesture becomes idle.
    pub fn tick(&mut self) -> bool {
        if self.state.is_settling() {
            self.state.reset();
            true
        } else {
            false
        }
    }

    /// Drop any gesture involving `key`, e.g. after the marker was removed.
    pub fn forget(&mut self, key: MarkerKey) {
        if self.state.marker() == Some(key) {
            self.state.reset();
            self.throttle.reset();
        }
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.throttle.reset();
    }
}
