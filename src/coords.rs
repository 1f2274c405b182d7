//! Coordinate conversion between timeline time and pixel space.
//!
//! This module centralizes the time <-> pixel formulas so the reposition
//! pass and the drag path agree on them. Nothing here clamps pixel values:
//! a marker at time 0 or at the very end may hang partially off the edge.

use crate::error::{MarkerError, MarkerResult};
use crate::types::{Marker, TextPosition};

/// Validated timeline geometry needed for conversions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineGeometry {
    duration: f64,
    visible_width: f64,
}

impl TimelineGeometry {
    /// Duration must be finite and positive, width finite and positive.
    pub fn new(duration: f64, visible_width: f64) -> MarkerResult<Self> {
        let valid = duration.is_finite()
            && duration > 0.0
            && visible_width.is_finite()
            && visible_width > 0.0;
        if !valid {
            return Err(MarkerError::DegenerateGeometry {
                duration,
                width: visible_width,
            });
        }
        Ok(Self {
            duration,
            visible_width,
        })
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[inline]
    pub fn visible_width(&self) -> f64 {
        self.visible_width
    }
}

/// Widths reported by a marker's visual node
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisualWidths {
    /// Width of the pointer icon
    pub pointer: f64,
    /// Width of the whole node, pointer plus label
    pub rendered: f64,
}

/// Where a visual node is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    /// Room left between `left` and the end of the timeline
    pub max_width: f64,
}

pub struct CoordinateMapper;

impl CoordinateMapper {
    /// Unadjusted pixel offset of `time`, capped at the timeline end.
    #[inline]
    pub fn time_to_offset(time: f64, geometry: &TimelineGeometry) -> f64 {
        let position_pct = (time / geometry.duration).min(1.0);
        geometry.visible_width * position_pct
    }

    /// Left edge of the marker's node so that its pointer centers on its time.
    ///
    /// Left-text nodes are mirrored: the label comes first, so the node is
    /// shifted left by the label's share of the rendered width.
    #[inline]
    pub fn time_to_pixel(marker: &Marker, widths: VisualWidths, geometry: &TimelineGeometry) -> f64 {
        let mut left = Self::time_to_offset(marker.time, geometry) - marker.offset;
        if marker.text_position == TextPosition::Left {
            left -= widths.rendered - widths.pointer;
        }
        left
    }

    pub fn placement(marker: &Marker, widths: VisualWidths, geometry: &TimelineGeometry) -> Placement {
        let left = Self::time_to_pixel(marker, widths, geometry);
        Placement {
            left,
            max_width: geometry.visible_width - left,
        }
    }

    /// Convert a normalized pointer position to a time.
    #[inline]
    pub fn fraction_to_time(fraction: f64, geometry: &TimelineGeometry) -> f64 {
        fraction * geometry.duration
    }

    /// Convert a pixel offset to a normalized position.
    #[inline]
    pub fn pixel_to_fraction(px: f64, geometry: &TimelineGeometry) -> f64 {
        px / geometry.visible_width
    }
}
