//! Thread-safe timeline handle.
//!
//! One mutex guards the whole timeline, so store mutations, reposition
//! passes and drag transitions are serialized. Event handlers run with the
//! lock held and must not call back into the same handle.

use super::MarkerTimeline;
use crate::host::TimelineHost;
use crate::visual::VisualFactory;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

pub struct SharedTimeline<H: TimelineHost, F: VisualFactory> {
    inner: Arc<Mutex<MarkerTimeline<H, F>>>,
}

impl<H: TimelineHost, F: VisualFactory> Clone for SharedTimeline<H, F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H: TimelineHost, F: VisualFactory> SharedTimeline<H, F> {
    pub fn new(timeline: MarkerTimeline<H, F>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(timeline)),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, MarkerTimeline<H, F>> {
        self.inner.lock()
    }

    /// Run `f` with exclusive access to the timeline.
    pub fn with<R>(&self, f: impl FnOnce(&mut MarkerTimeline<H, F>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl<H: TimelineHost, F: VisualFactory> From<MarkerTimeline<H, F>> for SharedTimeline<H, F> {
    fn from(timeline: MarkerTimeline<H, F>) -> Self {
        Self::new(timeline)
    }
}
