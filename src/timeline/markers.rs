//! Marker management and the reposition pass.

use super::MarkerTimeline;
use crate::coords::CoordinateMapper;
use crate::error::{MarkerError, MarkerResult};
use crate::host::TimelineHost;
use crate::limits::LimitPolicy;
use crate::profile_scope;
use crate::spatial_index::AnchorEntry;
use crate::types::{Marker, MarkerKey, MarkerPatch, MarkerSpec, MarkerTarget, validate_time};
use crate::visual::VisualFactory;
use tracing::{debug, warn};

impl<H: TimelineHost, F: VisualFactory> MarkerTimeline<H, F> {
    /// Add a marker, filling unset fields from the config.
    ///
    /// The returned key stays valid until the marker is removed.
    pub fn add(&mut self, spec: MarkerSpec) -> MarkerResult<MarkerKey> {
        if self.destroyed {
            return Err(MarkerError::Destroyed);
        }
        self.check_limits(spec.lower_limit, spec.upper_limit)?;

        let marker = Marker::from_spec(spec, &self.config)?;
        let draggable = marker.draggable;
        let visual = self.factory.create(&marker.style());
        let key = self.store.push(marker, visual);
        debug!(key = key.raw(), draggable, "Marker added");

        if draggable {
            self.ensure_pointer_tracking();
        }
        self.reposition();
        Ok(key)
    }

    /// Add several markers with a single reposition pass at the end.
    /// Stops at the first invalid spec; markers before it stay added.
    pub fn add_all(
        &mut self,
        specs: impl IntoIterator<Item = MarkerSpec>,
    ) -> MarkerResult<Vec<MarkerKey>> {
        if self.destroyed {
            return Err(MarkerError::Destroyed);
        }
        let mut keys = Vec::new();
        let mut any_draggable = false;
        let mut result = Ok(());

        for spec in specs {
            if let Err(e) = self.check_limits(spec.lower_limit, spec.upper_limit) {
                result = Err(e);
                break;
            }
            let marker = match Marker::from_spec(spec, &self.config) {
                Ok(marker) => marker,
                Err(e) => {
                    result = Err(e);
                    break;
                }
            };
            any_draggable |= marker.draggable;
            let visual = self.factory.create(&marker.style());
            keys.push(self.store.push(marker, visual));
        }

        if any_draggable {
            self.ensure_pointer_tracking();
        }
        self.reposition();
        result.map(|_| keys)
    }

    /// Merge `patch` into the targeted marker. Not limit-checked.
    ///
    /// Returns `Ok(false)` when nothing matches the target.
    pub fn update(&mut self, target: MarkerTarget, patch: MarkerPatch) -> MarkerResult<bool> {
        if self.destroyed {
            return Err(MarkerError::Destroyed);
        }
        if let Some(time) = patch.time {
            validate_time(time)?;
        }
        let Some(index) = self.store.resolve(&target) else {
            debug!(?target, "update: no matching marker");
            return Ok(false);
        };
        if let Some(current) = self.store.key_at(index).and_then(|key| self.store.get(key)) {
            let lower = patch.lower_limit.or(current.lower_limit);
            let upper = patch.upper_limit.or(current.upper_limit);
            self.check_limits(lower, upper)?;
        }

        let Some(applied) = self.store.update(&MarkerTarget::ByIndex(index), patch) else {
            return Ok(false);
        };
        let Some(marker) = self.store.get(applied.key) else {
            return Ok(false);
        };
        let draggable = marker.draggable;
        if applied.restyle {
            let visual = self.factory.create(&marker.style());
            self.store.replace_visual(applied.key, visual);
        }

        if draggable {
            self.ensure_pointer_tracking();
        }
        self.reposition();
        Ok(true)
    }

    pub fn update_by_id(&mut self, id: impl Into<String>, patch: MarkerPatch) -> MarkerResult<bool> {
        self.update(MarkerTarget::ById(id.into()), patch)
    }

    pub fn update_at(&mut self, index: usize, patch: MarkerPatch) -> MarkerResult<bool> {
        self.update(MarkerTarget::ByIndex(index), patch)
    }

    /// Remove the marker at `index`. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> bool {
        let Some((key, _)) = self.store.remove(index) else {
            return false;
        };
        self.drag.forget(key);
        debug!(key = key.raw(), index, "Marker removed");
        self.reposition();
        true
    }

    /// Remove a marker by key.
    pub fn remove_marker(&mut self, key: MarkerKey) -> bool {
        match self.store.position_of(key) {
            Some(index) => self.remove(index),
            None => false,
        }
    }

    /// Remove every marker. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        if self.store.is_empty() {
            return 0;
        }
        self.drag.reset();
        let removed = self.store.clear();
        debug!(removed, "Markers cleared");
        self.reposition();
        removed
    }

    pub fn marker(&self, key: MarkerKey) -> Option<&Marker> {
        self.store.get(key)
    }

    pub fn markers(&self) -> impl Iterator<Item = (MarkerKey, &Marker)> {
        self.store.iter()
    }

    pub fn find<P>(&self, predicate: P) -> Option<(MarkerKey, &Marker)>
    where
        P: FnMut(&Marker) -> bool,
    {
        self.store.find(predicate)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Topmost marker drawn at pixel `x`, as of the last reposition pass.
    pub fn marker_at(&self, x: f64) -> Option<MarkerKey> {
        self.hit_index.hit_test(x)
    }

    /// Markers drawn within `[min_x, max_x]`, in paint order.
    pub fn markers_between(&self, min_x: f64, max_x: f64) -> Vec<MarkerKey> {
        self.hit_index.query_range(min_x, max_x)
    }

    /// Map every marker to its pixel placement, in store order.
    ///
    /// Skipped with a warning when the host geometry is degenerate; the
    /// previous placements stay in effect. Returns whether the pass ran.
    pub fn reposition(&mut self) -> bool {
        profile_scope!("reposition");

        let geometry = match self.geometry() {
            Ok(geometry) => geometry,
            Err(e) => {
                if !self.store.is_empty() {
                    warn!(error = %e, "Skipping marker reposition");
                }
                return false;
            }
        };

        let mut anchors = Vec::with_capacity(self.store.len());
        for (order, (key, marker, visual)) in self.store.visuals_mut().enumerate() {
            let widths = visual.widths();
            let placement = CoordinateMapper::placement(marker, widths, &geometry);
            visual.place(placement);
            anchors.push(AnchorEntry::new(key, order, placement.left, widths.rendered));
        }
        self.hit_index.rebuild(anchors);
        true
    }

    fn check_limits(&self, lower: Option<f64>, upper: Option<f64>) -> MarkerResult<()> {
        match LimitPolicy::validate(lower, upper) {
            Err(e @ MarkerError::InvertedLimits { .. })
                if !self.config.reject_inverted_limits =>
            {
                warn!(error = %e, "Accepting inverted limits; drags will pin to one bound");
                Ok(())
            }
            result => result,
        }
    }
}
