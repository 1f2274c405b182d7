//! Pointer input - presses on marker anchors and the document-wide
//! move/release stream that drives drags.

use super::MarkerTimeline;
use crate::coords::CoordinateMapper;
use crate::events::MarkerEventKind;
use crate::host::TimelineHost;
use crate::input::DragOutcome;
use crate::profile_scope;
use crate::types::{MarkerKey, PointerEvent};
use crate::visual::VisualFactory;
use tracing::{debug, warn};

impl<H: TimelineHost, F: VisualFactory> MarkerTimeline<H, F> {
    /// Press on the anchor of marker `key`.
    ///
    /// Selects a draggable marker, or emits `marker-click` for a
    /// non-draggable one.
    pub fn press(&mut self, key: MarkerKey, event: &PointerEvent) -> DragOutcome {
        if self.destroyed {
            return DragOutcome::Ignored;
        }
        let outcome = self.drag.press(&self.store, key);
        if let DragOutcome::Click(key) = outcome {
            self.emit(MarkerEventKind::Click, key, event);
        }
        outcome
    }

    /// Press at a pixel position; resolves the marker through the hit index.
    pub fn press_at(&mut self, x: f64, event: &PointerEvent) -> DragOutcome {
        match self.marker_at(x) {
            Some(key) => self.press(key, event),
            None => DragOutcome::Ignored,
        }
    }

    /// Document-wide pointer move.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> DragOutcome {
        profile_scope!("pointer_move");

        if self.destroyed || self.drag.state().selected_marker().is_none() {
            return DragOutcome::Ignored;
        }
        let Some(candidate) = self.pointer_time(event) else {
            return DragOutcome::Ignored;
        };

        let outcome = self.drag.pointer_move(&self.store, candidate, event.timestamp);
        if let DragOutcome::Moved { key, time, notify } = outcome {
            self.write_time(key, time);
            if notify {
                self.emit(MarkerEventKind::Drag, key, event);
            }
        }
        outcome
    }

    /// Document-wide pointer release. Always ends an active gesture.
    pub fn release(&mut self, event: &PointerEvent) -> DragOutcome {
        if self.destroyed || self.drag.state().selected_marker().is_none() {
            return DragOutcome::Ignored;
        }
        let candidate = self.pointer_time(event);

        let outcome = self.drag.release(&self.store, candidate);
        if let DragOutcome::Dropped { key, time } = outcome {
            self.write_time(key, time);
            self.emit(MarkerEventKind::Drop, key, event);
        }
        outcome
    }

    /// Next scheduler tick. Completes the deselection begun by `release`.
    pub fn tick(&mut self) -> bool {
        self.drag.tick()
    }

    /// Context-menu gesture on marker `key`.
    ///
    /// Emits `marker-contextmenu` and returns whether the host should
    /// suppress its native menu.
    pub fn context_menu(&mut self, key: MarkerKey, event: &PointerEvent) -> bool {
        if self.destroyed {
            return false;
        }
        let Some(prevent) = self.store.get(key).map(|m| m.prevent_context_menu) else {
            return false;
        };
        self.emit(MarkerEventKind::ContextMenu, key, event);
        prevent
    }

    /// Time under the pointer, unclamped by marker limits.
    ///
    /// `None` when the geometry is degenerate or the host reports a
    /// non-finite fraction; callers keep the marker where it is.
    fn pointer_time(&self, event: &PointerEvent) -> Option<f64> {
        let geometry = match self.geometry() {
            Ok(geometry) => geometry,
            Err(e) => {
                warn!(error = %e, "Ignoring pointer position");
                return None;
            }
        };
        let fraction = self.host.pointer_fraction(event);
        if !fraction.is_finite() {
            warn!(fraction, x = event.x, "Ignoring non-finite pointer fraction");
            return None;
        }
        Some(CoordinateMapper::fraction_to_time(fraction.clamp(0.0, 1.0), &geometry))
    }

    fn write_time(&mut self, key: MarkerKey, time: f64) {
        match self.store.get_mut(key) {
            Some(marker) => marker.time = time,
            None => {
                debug!(key = key.raw(), "write to removed marker");
                return;
            }
        }
        self.reposition();
    }
}
