//! Diagnostic hook reporting how each ring-slice query was decomposed.
//!
//! The engine holds no rendering state. Callers that want to draw the
//! executed boxes pass an observer to
//! [`RingQuery::query_observed`](crate::RingQuery::query_observed).

use smallvec::SmallVec;

use crate::bounding_box::BoundingBox;

/// Boxes (distance on `x`, angle on `y`) executed by one query, at most two
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryShape {
    boxes: SmallVec<[BoundingBox; 2]>,
}

impl QueryShape {
    pub(crate) fn single(area: BoundingBox) -> Self {
        let mut boxes = SmallVec::new();
        boxes.push(area);
        Self { boxes }
    }

    pub(crate) fn wrapped(upper: BoundingBox, lower: BoundingBox) -> Self {
        let mut boxes = SmallVec::new();
        boxes.push(upper);
        boxes.push(lower);
        Self { boxes }
    }

    /// Executed boxes, the `[start, 2π)` part first when wrapped
    #[must_use]
    pub fn boxes(&self) -> &[BoundingBox] {
        &self.boxes
    }

    /// True when the slice crossed the 0/2π seam and was split in two
    #[must_use]
    pub fn is_wrapped(&self) -> bool {
        self.boxes.len() == 2
    }

    /// True when no box covers any area, so the query could match nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.iter().all(BoundingBox::is_zero_area)
    }
}

/// Receives the shape of every observed query
pub trait QueryObserver {
    /// Called once per query, before the index is searched
    fn observe(&mut self, shape: &QueryShape);
}

/// Observer that ignores every shape
#[derive(Clone, Copy, Debug, Default)]
pub struct NoObserver;

impl QueryObserver for NoObserver {
    fn observe(&mut self, _shape: &QueryShape) {}
}

impl<F: FnMut(&QueryShape)> QueryObserver for F {
    fn observe(&mut self, shape: &QueryShape) {
        self(shape);
    }
}

/// Keeps the most recent query shape for a renderer to pick up.
///
/// Always exposes two boxes; the second is a zero-area box at the origin
/// when the last query was not wrapped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LastQueryShape {
    shape: Option<QueryShape>,
}

impl LastQueryShape {
    /// Creates an observer with no recorded shape
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shape of the last observed query, if any
    #[must_use]
    pub fn get(&self) -> Option<&QueryShape> {
        self.shape.as_ref()
    }

    /// The last query as exactly two boxes, padding with [`BoundingBox::empty`]
    #[must_use]
    pub fn as_pair(&self) -> [BoundingBox; 2] {
        let boxes = self.shape.as_ref().map_or(&[][..], QueryShape::boxes);
        [
            boxes.first().copied().unwrap_or_else(BoundingBox::empty),
            boxes.get(1).copied().unwrap_or_else(BoundingBox::empty),
        ]
    }

    /// Forgets the recorded shape
    pub fn clear(&mut self) {
        self.shape = None;
    }
}

impl QueryObserver for LastQueryShape {
    fn observe(&mut self, shape: &QueryShape) {
        self.shape = Some(shape.clone());
    }
}
