//! Spatial Index Module
//!
//! R-tree over the horizontal extents of placed marker nodes, rebuilt after
//! every reposition pass. Lets a host resolve a pointer position to the
//! marker drawn under it without scanning the whole store.

use crate::types::MarkerKey;
use rstar::{AABB, RTree, RTreeObject};

/// Horizontal extent of one placed marker node.
#[derive(Debug, Clone, Copy)]
pub struct AnchorEntry {
    pub key: MarkerKey,
    /// Paint order; later entries are drawn on top
    pub order: usize,
    pub min_x: f64,
    pub max_x: f64,
}

impl AnchorEntry {
    pub fn new(key: MarkerKey, order: usize, left: f64, width: f64) -> Self {
        Self {
            key,
            order,
            min_x: left,
            max_x: left + width.max(0.0),
        }
    }

    #[inline]
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.min_x && x <= self.max_x
    }
}

impl RTreeObject for AnchorEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, 0.0], [self.max_x, 0.0])
    }
}

impl PartialEq for AnchorEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

pub struct HitIndex {
    tree: RTree<AnchorEntry>,
}

impl HitIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    pub fn rebuild(&mut self, entries: Vec<AnchorEntry>) {
        self.tree = RTree::bulk_load(entries);
    }

    /// Topmost marker whose node covers `x`.
    pub fn hit_test(&self, x: f64) -> Option<MarkerKey> {
        let point = AABB::from_point([x, 0.0]);
        self.tree
            .locate_in_envelope_intersecting(&point)
            .filter(|entry| entry.contains_x(x))
            .max_by_key(|entry| entry.order)
            .map(|entry| entry.key)
    }

    /// All markers whose nodes intersect `[min_x, max_x]`, in paint order.
    pub fn query_range(&self, min_x: f64, max_x: f64) -> Vec<MarkerKey> {
        let envelope = AABB::from_corners([min_x, 0.0], [max_x, 0.0]);
        let mut hits: Vec<&AnchorEntry> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .collect();
        hits.sort_by_key(|entry| entry.order);
        hits.into_iter().map(|entry| entry.key).collect()
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
    }
}

impl Default for HitIndex {
    fn default() -> Self {
        Self::new()
    }
}
