//! The media/timeline backend as seen by the marker core.

use crate::types::PointerEvent;

/// Geometry and pointer translation supplied by the host.
pub trait TimelineHost: Send {
    /// Media duration in seconds
    fn duration(&self) -> f64;

    /// Width of the drawn timeline in pixels
    fn visible_width(&self) -> f64;

    /// Horizontal position of `event` as a fraction of the whole timeline,
    /// accounting for scroll and zoom. Expected in `[0, 1]`.
    fn pointer_fraction(&self, event: &PointerEvent) -> f64;

    /// Start delivering document-wide pointer moves and releases.
    fn attach_pointer_tracking(&mut self) {}

    /// Stop delivering document-wide pointer events.
    fn detach_pointer_tracking(&mut self) {}
}

/// Host with fixed, directly settable geometry.
///
/// `width` is the full drawn width. Pointer `x` is relative to the viewport,
/// which is scrolled by `scroll_left`, so it maps to
/// `(x + scroll_left) / width`.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedHost {
    pub duration: f64,
    pub width: f64,
    pub scroll_left: f64,
    pub tracking: bool,
    pub attach_calls: usize,
    pub detach_calls: usize,
}

impl FixedHost {
    pub fn new(duration: f64, width: f64) -> Self {
        Self {
            duration,
            width,
            scroll_left: 0.0,
            tracking: false,
            attach_calls: 0,
            detach_calls: 0,
        }
    }
}

impl TimelineHost for FixedHost {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn visible_width(&self) -> f64 {
        self.width
    }

    fn pointer_fraction(&self, event: &PointerEvent) -> f64 {
        if self.width <= 0.0 {
            return 0.0;
        }
        ((event.x + self.scroll_left) / self.width).clamp(0.0, 1.0)
    }

    fn attach_pointer_tracking(&mut self) {
        self.tracking = true;
        self.attach_calls += 1;
    }

    fn detach_pointer_tracking(&mut self) {
        self.tracking = false;
        self.detach_calls += 1;
    }
}
