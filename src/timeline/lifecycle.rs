//! Timeline lifecycle - construction, host signals and teardown.

use super::MarkerTimeline;
use crate::config::MarkerConfig;
use crate::events::{EventBus, TimelineSignal};
use crate::host::TimelineHost;
use crate::input::DragController;
use crate::spatial_index::HitIndex;
use crate::store::MarkerStore;
use crate::types::MarkerSpec;
use crate::visual::VisualFactory;
use tracing::{debug, info, warn};

impl<H: TimelineHost, F: VisualFactory> MarkerTimeline<H, F> {
    pub fn new(host: H, factory: F) -> Self {
        Self::with_config(host, factory, MarkerConfig::default())
    }

    pub fn with_config(host: H, factory: F, config: MarkerConfig) -> Self {
        Self {
            host,
            factory,
            drag: DragController::new(config.throttle_interval()),
            config,
            store: MarkerStore::new(),
            bus: EventBus::new(),
            hit_index: HitIndex::new(),
            pending: Vec::new(),
            backend_ready: false,
            tracking_attached: false,
            destroyed: false,
        }
    }

    /// Queue markers to be added once the backend reports ready.
    pub fn with_initial_markers(mut self, specs: impl IntoIterator<Item = MarkerSpec>) -> Self {
        self.pending.extend(specs);
        self
    }

    /// React to a structural event from the host.
    pub fn handle_signal(&mut self, signal: TimelineSignal) {
        if self.destroyed {
            return;
        }
        debug!(?signal, "Timeline signal");

        if signal == TimelineSignal::BackendReady && !self.backend_ready {
            self.backend_ready = true;
            let pending = std::mem::take(&mut self.pending);
            if !pending.is_empty() {
                info!(count = pending.len(), "Adding initial markers");
            }
            for spec in pending {
                if let Err(e) = self.add(spec) {
                    warn!(error = %e, "Skipping invalid initial marker");
                }
            }
        }

        self.reposition();
    }

    /// Release every marker, subscriber and pointer listener.
    /// Calling it again does nothing.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        if self.tracking_attached {
            self.host.detach_pointer_tracking();
            self.tracking_attached = false;
        }
        self.drag.reset();
        let removed = self.store.clear();
        self.hit_index.clear();
        self.bus.clear();
        self.pending.clear();
        self.destroyed = true;
        debug!(removed, "Timeline destroyed");
    }
}

impl<H: TimelineHost, F: VisualFactory> Drop for MarkerTimeline<H, F> {
    fn drop(&mut self) {
        self.destroy();
    }
}
