//! The marker plugin instance.
//!
//! `MarkerTimeline` owns the store, the drag controller, the event bus and
//! the hit index, and talks to the host and the visual factory. Work is split
//! by concern:
//!
//! - `lifecycle` - construction, host signals, teardown
//! - `markers` - add/update/remove/clear and the reposition pass
//! - `pointer` - press/move/release/tick and context menus
//! - `shared` - mutex-wrapped handle for multi-threaded hosts

mod lifecycle;
mod markers;
mod pointer;
mod shared;

pub use shared::SharedTimeline;

use crate::config::MarkerConfig;
use crate::coords::TimelineGeometry;
use crate::error::MarkerResult;
use crate::events::{EventBus, MarkerEvent, MarkerEventKind, SubscriptionId};
use crate::host::TimelineHost;
use crate::input::{DragController, DragState};
use crate::spatial_index::HitIndex;
use crate::store::MarkerStore;
use crate::types::{MarkerKey, MarkerSpec, PointerEvent};
use crate::visual::VisualFactory;

pub struct MarkerTimeline<H: TimelineHost, F: VisualFactory> {
    host: H,
    factory: F,
    config: MarkerConfig,
    store: MarkerStore,
    drag: DragController,
    bus: EventBus,
    hit_index: HitIndex,
    /// Specs waiting for `BackendReady`
    pending: Vec<MarkerSpec>,
    backend_ready: bool,
    /// Document-wide pointer listeners are installed
    tracking_attached: bool,
    destroyed: bool,
}

impl<H: TimelineHost, F: VisualFactory> MarkerTimeline<H, F> {
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access. Call [`Self::handle_signal`] afterwards if the
    /// geometry changed.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn config(&self) -> &MarkerConfig {
        &self.config
    }

    pub fn store(&self) -> &MarkerStore {
        &self.store
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    pub fn is_backend_ready(&self) -> bool {
        self.backend_ready
    }

    pub fn is_tracking_pointer(&self) -> bool {
        self.tracking_attached
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Current geometry, or an error when the host reports a degenerate one.
    pub fn geometry(&self) -> MarkerResult<TimelineGeometry> {
        TimelineGeometry::new(self.host.duration(), self.host.visible_width())
    }

    pub fn on<C>(&mut self, kind: MarkerEventKind, handler: C) -> SubscriptionId
    where
        C: FnMut(&MarkerEvent) + Send + 'static,
    {
        self.bus.subscribe(kind, handler)
    }

    pub fn on_any<C>(&mut self, handler: C) -> SubscriptionId
    where
        C: FnMut(&MarkerEvent) + Send + 'static,
    {
        self.bus.subscribe_all(handler)
    }

    pub fn off(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    fn emit(&mut self, kind: MarkerEventKind, key: MarkerKey, pointer: &PointerEvent) {
        let Some(marker) = self.store.get(key) else {
            return;
        };
        let event = MarkerEvent {
            kind,
            key,
            marker: marker.clone(),
            pointer: *pointer,
        };
        self.bus.emit(&event);
    }

    fn ensure_pointer_tracking(&mut self) {
        if !self.tracking_attached {
            self.host.attach_pointer_tracking();
            self.tracking_attached = true;
            tracing::debug!("Pointer tracking attached");
        }
    }
}
