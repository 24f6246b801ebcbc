//! Common contract for the point indexes behind [`RingQuery`](crate::RingQuery).
//!
//! An index stores `(point, item)` entries in insertion order. Queries report
//! matching entries by their insertion position, appended to a caller-owned
//! buffer so it can be reused across queries.

use crate::bounding_box::BoundingBox;
use crate::config::IndexBackend;
use crate::grid_index::GridIndex;
use crate::linear_index::LinearIndex;
use crate::polar::Point2D;

/// One indexed point and the item it belongs to
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry<T> {
    /// Indexed position
    pub point: Point2D,
    /// Payload returned to the caller
    pub item: T,
}

/// Append-only 2D point index.
///
/// `query` must report every entry whose own point lies in the closed box
/// `[x, x + width] x [y, y + height]`, each at most once, and nothing else.
/// Implementations are free to use the insertion bounds for bucketing, but
/// the bounds never widen or narrow the match.
pub trait SpatialIndex<T> {
    /// Adds `item` at `point`, bucketed by `bounds`
    fn insert(&mut self, point: Point2D, bounds: BoundingBox, item: T);

    /// Appends the insertion positions of all entries inside `area` to `results`
    fn query(&self, area: BoundingBox, results: &mut Vec<usize>);

    /// All entries in insertion order
    fn entries(&self) -> &[Entry<T>];

    /// Entry at insertion position `index`
    fn get(&self, index: usize) -> Option<&Entry<T>> {
        self.entries().get(index)
    }

    /// Number of inserted entries
    fn len(&self) -> usize {
        self.entries().len()
    }

    /// True when nothing has been inserted
    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// Backend chosen at runtime from an [`IndexBackend`]
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum AnyIndex<T> {
    /// Uniform grid buckets
    Grid(GridIndex<T>),
    /// Exhaustive scan
    Linear(LinearIndex<T>),
}

impl<T> AnyIndex<T> {
    /// Creates an empty index of the configured kind
    #[must_use]
    pub fn new(backend: IndexBackend) -> Self {
        Self::with_capacity(backend, 0)
    }

    /// Creates an empty index with room for `capacity` entries
    #[must_use]
    pub fn with_capacity(backend: IndexBackend, capacity: usize) -> Self {
        match backend {
            IndexBackend::Grid(config) => Self::Grid(GridIndex::with_capacity(config, capacity)),
            IndexBackend::Linear => Self::Linear(LinearIndex::with_capacity(capacity)),
        }
    }

    /// Short backend label used in log events
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Grid(_) => "grid",
            Self::Linear(_) => "linear",
        }
    }
}

impl<T> Default for AnyIndex<T> {
    fn default() -> Self {
        Self::new(IndexBackend::default())
    }
}

impl<T> SpatialIndex<T> for AnyIndex<T> {
    fn insert(&mut self, point: Point2D, bounds: BoundingBox, item: T) {
        match self {
            Self::Grid(index) => index.insert(point, bounds, item),
            Self::Linear(index) => index.insert(point, bounds, item),
        }
    }

    fn query(&self, area: BoundingBox, results: &mut Vec<usize>) {
        match self {
            Self::Grid(index) => index.query(area, results),
            Self::Linear(index) => index.query(area, results),
        }
    }

    fn entries(&self) -> &[Entry<T>] {
        match self {
            Self::Grid(index) => index.entries(),
            Self::Linear(index) => index.entries(),
        }
    }
}
