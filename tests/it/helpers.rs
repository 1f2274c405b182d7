//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestTimelineBuilder` - Builder for timelines on a fixed host with a
//!   headless visual factory
//! - `EventRecorder` - Captures every notification a timeline emits
//! - `Clock` - Deterministic pointer event timestamps

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use timeline_markers::{
    FixedHost, HeadlessFactory, MarkerConfig, MarkerEvent, MarkerEventKind, MarkerKey,
    MarkerSpec, MarkerTimeline, PointerEvent, TimelineSignal,
};

pub type TestTimeline = MarkerTimeline<FixedHost, HeadlessFactory>;

// ============================================================================
// TestTimelineBuilder
// ============================================================================

/// Builder for test timelines.
///
/// Defaults: 20 s duration, 1000 px width, 10 px pointers (offset 5) and
/// zero-width label characters, backend already reported ready.
pub struct TestTimelineBuilder {
    duration: f64,
    width: f64,
    pointer_width: f64,
    char_width: f64,
    config: MarkerConfig,
    markers: Vec<MarkerSpec>,
    backend_ready: bool,
}

impl Default for TestTimelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTimelineBuilder {
    pub fn new() -> Self {
        Self {
            duration: 20.0,
            width: 1000.0,
            pointer_width: 10.0,
            char_width: 0.0,
            config: MarkerConfig::default(),
            markers: Vec::new(),
            backend_ready: true,
        }
    }

    pub fn with_geometry(mut self, duration: f64, width: f64) -> Self {
        self.duration = duration;
        self.width = width;
        self
    }

    pub fn with_widths(mut self, pointer_width: f64, char_width: f64) -> Self {
        self.pointer_width = pointer_width;
        self.char_width = char_width;
        self
    }

    pub fn with_config(mut self, config: MarkerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_marker(mut self, spec: MarkerSpec) -> Self {
        self.markers.push(spec);
        self
    }

    pub fn backend_pending(mut self) -> Self {
        self.backend_ready = false;
        self
    }

    /// Build the timeline; returns the factory handle for inspecting nodes.
    pub fn build(self) -> (TestTimeline, HeadlessFactory) {
        let factory = HeadlessFactory::new(self.pointer_width, self.char_width);
        let mut timeline = MarkerTimeline::with_config(
            FixedHost::new(self.duration, self.width),
            factory.clone(),
            self.config,
        );
        if self.backend_ready {
            timeline.handle_signal(TimelineSignal::BackendReady);
        }
        for spec in self.markers {
            timeline.add(spec).expect("valid test marker");
        }
        (timeline, factory)
    }
}

/// Key of the marker at `index`.
pub fn key_at(timeline: &TestTimeline, index: usize) -> MarkerKey {
    timeline.store().key_at(index).expect("marker at index")
}

/// Current time of the marker with `key`.
pub fn time_of(timeline: &TestTimeline, key: MarkerKey) -> f64 {
    timeline.marker(key).expect("marker exists").time
}

// ============================================================================
// EventRecorder
// ============================================================================

#[derive(Clone, Default)]
pub struct EventRecorder {
    events: Arc<Mutex<Vec<MarkerEvent>>>,
}

impl EventRecorder {
    /// Subscribe a new recorder to every notification of `timeline`.
    pub fn attach(timeline: &mut TestTimeline) -> Self {
        let recorder = Self::default();
        let events = Arc::clone(&recorder.events);
        timeline.on_any(move |event| events.lock().push(event.clone()));
        recorder
    }

    pub fn events(&self) -> Vec<MarkerEvent> {
        self.events.lock().clone()
    }

    pub fn kinds(&self) -> Vec<MarkerEventKind> {
        self.events.lock().iter().map(|e| e.kind).collect()
    }

    pub fn count(&self, kind: MarkerEventKind) -> usize {
        self.events.lock().iter().filter(|e| e.kind == kind).count()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

// ============================================================================
// Clock
// ============================================================================

/// Produces pointer events at fixed offsets from one start instant.
pub struct Clock {
    start: Instant,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn at(&self, ms: u64) -> Instant {
        self.start + Duration::from_millis(ms)
    }

    /// Pointer event at pixel `x`, `ms` milliseconds after start.
    pub fn pointer(&self, x: f64, ms: u64) -> PointerEvent {
        PointerEvent::new(x, 0.0, self.at(ms))
    }
}
