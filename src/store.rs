//! Ordered marker registry.
//!
//! Store order is append order and doubles as paint order. Each entry owns
//! its marker record and the visual node drawn for it; removing an entry
//! releases the node before dropping it.

use crate::types::{Marker, MarkerKey, MarkerPatch, MarkerTarget};
use crate::visual::VisualNode;
use tracing::debug;

struct MarkerEntry {
    key: MarkerKey,
    marker: Marker,
    visual: Box<dyn VisualNode>,
}

impl MarkerEntry {
    fn sync_offset(&mut self) {
        self.marker.offset = self.visual.pointer_width() / 2.0;
    }
}

/// Result of applying a patch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchApplied {
    pub key: MarkerKey,
    /// A styling field changed; the visual node should be rebuilt
    pub restyle: bool,
}

pub struct MarkerStore {
    entries: Vec<MarkerEntry>,
    next_key: u64,
}

impl Default for MarkerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_key: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a marker with its visual node.
    pub fn push(&mut self, marker: Marker, visual: Box<dyn VisualNode>) -> MarkerKey {
        let key = MarkerKey(self.next_key);
        self.next_key += 1;

        let mut entry = MarkerEntry {
            key,
            marker,
            visual,
        };
        entry.sync_offset();
        self.entries.push(entry);
        key
    }

    /// Remove the marker at `index`, shifting later markers down.
    /// Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<(MarkerKey, Marker)> {
        if index >= self.entries.len() {
            debug!(index, len = self.entries.len(), "remove: index out of range");
            return None;
        }
        let mut entry = self.entries.remove(index);
        entry.visual.release();
        Some((entry.key, entry.marker))
    }

    pub fn remove_key(&mut self, key: MarkerKey) -> Option<Marker> {
        let index = self.position_of(key)?;
        self.remove(index).map(|(_, marker)| marker)
    }

    /// Index of the marker a target refers to. Ids match the first marker in
    /// store order.
    pub fn resolve(&self, target: &MarkerTarget) -> Option<usize> {
        match target {
            MarkerTarget::ByIndex(index) => (*index < self.entries.len()).then_some(*index),
            MarkerTarget::ById(id) => self
                .entries
                .iter()
                .position(|e| e.marker.id.as_deref() == Some(id.as_str())),
        }
    }

    /// Shallow-merge `patch` into the targeted marker.
    pub fn update(&mut self, target: &MarkerTarget, patch: MarkerPatch) -> Option<PatchApplied> {
        let Some(index) = self.resolve(target) else {
            debug!(?target, "update: no matching marker");
            return None;
        };
        let entry = &mut self.entries[index];
        let restyle = entry.marker.apply(patch);
        Some(PatchApplied {
            key: entry.key,
            restyle,
        })
    }

    /// Swap in a new visual node, releasing the old one.
    pub fn replace_visual(&mut self, key: MarkerKey, visual: Box<dyn VisualNode>) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) else {
            return false;
        };
        let mut old = std::mem::replace(&mut entry.visual, visual);
        old.release();
        entry.sync_offset();
        true
    }

    /// Remove every marker in store order. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        for mut entry in self.entries.drain(..) {
            entry.visual.release();
        }
        count
    }

    pub fn find<P>(&self, mut predicate: P) -> Option<(MarkerKey, &Marker)>
    where
        P: FnMut(&Marker) -> bool,
    {
        self.entries
            .iter()
            .find(|e| predicate(&e.marker))
            .map(|e| (e.key, &e.marker))
    }

    pub fn get(&self, key: MarkerKey) -> Option<&Marker> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.marker)
    }

    pub(crate) fn get_mut(&mut self, key: MarkerKey) -> Option<&mut Marker> {
        self.entries
            .iter_mut()
            .find(|e| e.key == key)
            .map(|e| &mut e.marker)
    }

    pub fn position_of(&self, key: MarkerKey) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    pub fn key_at(&self, index: usize) -> Option<MarkerKey> {
        self.entries.get(index).map(|e| e.key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MarkerKey, &Marker)> {
        self.entries.iter().map(|e| (e.key, &e.marker))
    }

    /// Markers with mutable access to their visual nodes, in paint order.
    pub(crate) fn visuals_mut(
        &mut self,
    ) -> impl Iterator<Item = (MarkerKey, &Marker, &mut Box<dyn VisualNode>)> {
        self.entries
            .iter_mut()
            .map(|e| (e.key, &e.marker, &mut e.visual))
    }

    /// Number of visual nodes currently held (one per marker).
    pub fn attached_visuals(&self) -> usize {
        self.entries.len()
    }
}
