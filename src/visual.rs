//! Visual node capability.
//!
//! The timeline never draws. It asks an injected [`VisualFactory`] for one
//! node per marker, reads the node's widths for the coordinate math, and
//! tells it where to sit. [`HeadlessFactory`] is a drawing-free backend used
//! by servers, the demo binary, and tests.

use crate::constants::{
    DEFAULT_POINTER_WIDTH, HEADLESS_LABEL_CHAR_WIDTH, HEADLESS_LABEL_PADDING,
};
use crate::coords::{Placement, VisualWidths};
use crate::types::MarkerStyle;
use parking_lot::Mutex;
use std::sync::Arc;

/// An attachable visual element owned by one marker.
pub trait VisualNode: Send {
    /// Width of the pointer icon; half of it is the marker's offset
    fn pointer_width(&self) -> f64;
    /// Width of the whole element including its label
    fn rendered_width(&self) -> f64;
    fn place(&mut self, placement: Placement);
    /// Detach the element. Called exactly once before the node is dropped.
    fn release(&mut self);

    fn widths(&self) -> VisualWidths {
        VisualWidths {
            pointer: self.pointer_width(),
            rendered: self.rendered_width(),
        }
    }
}

/// Builds visual nodes from marker styling.
pub trait VisualFactory: Send {
    fn create(&mut self, style: &MarkerStyle) -> Box<dyn VisualNode>;
}

impl<F> VisualFactory for F
where
    F: FnMut(&MarkerStyle) -> Box<dyn VisualNode> + Send,
{
    fn create(&mut self, style: &MarkerStyle) -> Box<dyn VisualNode> {
        self(style)
    }
}

// ============================================================================
// Headless backend
// ============================================================================

/// What a headless node has been told so far
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessRecord {
    pub style: MarkerStyle,
    pub widths: VisualWidths,
    pub placement: Option<Placement>,
    pub placements: usize,
    pub released: bool,
}

/// Factory laying out nodes with a fixed pointer width and a per-character
/// label width. Every node it creates is recorded and can be inspected.
#[derive(Clone)]
pub struct HeadlessFactory {
    pointer_width: f64,
    char_width: f64,
    records: Arc<Mutex<Vec<HeadlessRecord>>>,
}

impl Default for HeadlessFactory {
    fn default() -> Self {
        Self::new(DEFAULT_POINTER_WIDTH, HEADLESS_LABEL_CHAR_WIDTH)
    }
}

impl HeadlessFactory {
    pub fn new(pointer_width: f64, char_width: f64) -> Self {
        Self {
            pointer_width,
            char_width,
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn rendered_width(&self, style: &MarkerStyle) -> f64 {
        match style.label.as_deref() {
            Some(label) if !label.is_empty() => {
                self.pointer_width
                    + HEADLESS_LABEL_PADDING
                    + label.chars().count() as f64 * self.char_width
            }
            _ => self.pointer_width,
        }
    }

    /// Snapshot of every node created so far, in creation order.
    pub fn records(&self) -> Vec<HeadlessRecord> {
        self.records.lock().clone()
    }

    /// Number of nodes created and not yet released.
    pub fn live_count(&self) -> usize {
        self.records.lock().iter().filter(|r| !r.released).count()
    }
}

impl VisualFactory for HeadlessFactory {
    fn create(&mut self, style: &MarkerStyle) -> Box<dyn VisualNode> {
        let widths = VisualWidths {
            pointer: self.pointer_width,
            rendered: self.rendered_width(style),
        };
        let mut records = self.records.lock();
        records.push(HeadlessRecord {
            style: style.clone(),
            widths,
            placement: None,
            placements: 0,
            released: false,
        });
        Box::new(HeadlessNode {
            slot: records.len() - 1,
            widths,
            records: Arc::clone(&self.records),
        })
    }
}

pub struct HeadlessNode {
    slot: usize,
    widths: VisualWidths,
    records: Arc<Mutex<Vec<HeadlessRecord>>>,
}

impl VisualNode for HeadlessNode {
    fn pointer_width(&self) -> f64 {
        self.widths.pointer
    }

    fn rendered_width(&self) -> f64 {
        self.widths.rendered
    }

    fn place(&mut self, placement: Placement) {
        if let Some(record) = self.records.lock().get_mut(self.slot) {
            record.placement = Some(placement);
            record.placements += 1;
        }
    }

    fn release(&mut self) {
        if let Some(record) = self.records.lock().get_mut(self.slot) {
            record.released = true;
        }
    }
}
