//! Segment store
//!
//! Process-wide, append-only collection of fitted segments. Each
//! operation takes the one lock for its whole duration, so concurrent
//! strokes never lose an append and readers never see a half-reset store.

use std::sync::Arc;

use strokefit_core::{thread_safe_vec, CurveSegment, ThreadSafeVec};

/// Shared handle to the fitted-segment collection
///
/// Cloning the handle shares the underlying collection.
#[derive(Debug, Clone)]
pub struct SegmentStore {
    segments: ThreadSafeVec<CurveSegment>,
}

impl SegmentStore {
    pub fn new() -> Self {
        Self {
            segments: thread_safe_vec(),
        }
    }

    /// Drop every stored segment.
    pub fn reset(&self) {
        let mut segments = self.segments.lock();
        let cleared = segments.len();
        *segments = Vec::new();
        tracing::debug!("Segment store reset, {} segments dropped", cleared);
    }

    pub fn append(&self, segment: CurveSegment) {
        self.segments.lock().push(segment);
    }

    /// Append a batch under a single lock acquisition.
    pub fn append_all(&self, batch: impl IntoIterator<Item = CurveSegment>) {
        self.segments.lock().extend(batch);
    }

    /// Snapshot of all segments in insertion order.
    pub fn list_all(&self) -> Vec<CurveSegment> {
        self.segments.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.segments.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.lock().is_empty()
    }

    /// Whether two handles point at the same collection.
    pub fn shares_with(&self, other: &SegmentStore) -> bool {
        Arc::ptr_eq(&self.segments, &other.segments)
    }
}

impl Default for SegmentStore {
    fn default() -> Self {
        Self::new()
    }
}
