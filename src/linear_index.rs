//! Exhaustive-scan backend.

use crate::bounding_box::BoundingBox;
use crate::polar::Point2D;
use crate::spatial_index::{Entry, SpatialIndex};

/// Exhaustive-scan point index
///
/// Stores entries in a flat vector and tests every one of them per query.
/// O(1) amortized insert, O(n) query. Serves as the correctness baseline for
/// [`GridIndex`](crate::GridIndex).
///
/// # Examples
/// ```
/// use ringslice::prelude::*;
///
/// let mut index = LinearIndex::new();
/// index.insert(Point2D::new(1.0, 1.0), BoundingBox::point(1.0, 1.0), "a");
/// index.insert(Point2D::new(5.0, 5.0), BoundingBox::point(5.0, 5.0), "b");
///
/// let mut results = Vec::new();
/// index.query(BoundingBox::new(0.0, 0.0, 2.0, 2.0), &mut results);
/// assert_eq!(results, vec![0]);
/// ```
#[derive(Clone, Debug)]
pub struct LinearIndex<T> {
    pub(crate) entries: Vec<Entry<T>>,
}

impl<T> LinearIndex<T> {
    /// Creates a new empty index
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new index with preallocated capacity
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }
}

impl<T> Default for LinearIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SpatialIndex<T> for LinearIndex<T> {
    fn insert(&mut self, point: Point2D, _bounds: BoundingBox, item: T) {
        self.entries.push(Entry { point, item });
    }

    fn query(&self, area: BoundingBox, results: &mut Vec<usize>) {
        for (idx, entry) in self.entries.iter().enumerate() {
            if area.contains(entry.point) {
                results.push(idx);
            }
        }
    }

    fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert_point(index: &mut LinearIndex<usize>, x: f64, y: f64) {
        let id = index.len();
        index.insert(Point2D::new(x, y), BoundingBox::point(x, y), id);
    }

    #[test]
    fn test_linear_index_new() {
        let index: LinearIndex<()> = LinearIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn test_linear_index_insertion_order() {
        let mut index = LinearIndex::with_capacity(3);
        insert_point(&mut index, 3.0, 0.0);
        insert_point(&mut index, 1.0, 0.0);
        insert_point(&mut index, 2.0, 0.0);

        let items: Vec<usize> = index.entries().iter().map(|e| e.item).collect();
        assert_eq!(items, vec![0, 1, 2]);
        assert_eq!(index.get(1).map(|e| e.point), Some(Point2D::new(1.0, 0.0)));
        assert!(index.get(3).is_none());
    }

    #[test]
    fn test_linear_index_closed_bounds() {
        let mut index = LinearIndex::new();
        insert_point(&mut index, 0.0, 0.0);
        insert_point(&mut index, 10.0, 10.0);
        insert_point(&mut index, 10.1, 10.0);

        let mut results = Vec::new();
        index.query(BoundingBox::new(0.0, 0.0, 10.0, 10.0), &mut results);
        assert_eq!(results, vec![0, 1]);
    }

    #[test]
    fn test_linear_index_duplicate_points() {
        let mut index = LinearIndex::new();
        insert_point(&mut index, 4.0, 4.0);
        insert_point(&mut index, 4.0, 4.0);

        let mut results = Vec::new();
        index.query(BoundingBox::new(3.0, 3.0, 2.0, 2.0), &mut results);
        assert_eq!(results, vec![0, 1], "coincident points are kept separately");
    }

    #[test]
    fn test_linear_index_appends_to_results() {
        let mut index = LinearIndex::new();
        insert_point(&mut index, 1.0, 1.0);

        let mut results = vec![99];
        index.query(BoundingBox::new(0.0, 0.0, 2.0, 2.0), &mut results);
        assert_eq!(results, vec![99, 0]);
    }
}
