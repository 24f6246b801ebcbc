//! Uniform grid backend (broad phase plus exact filter).
//!
//! The plane is cut into `distance_cell x angle_cell` cells. Every entry is
//! bucketed into the cells its insertion bounds overlap, and always into the
//! cell holding its own point. A query visits the cells overlapping the query
//! box and then applies the exact closed-box test to each candidate, so cell
//! granularity can only cost time, never correctness.
//!
//! Entries bucketed into several cells are reported from a single "home" cell
//! per query: the minimum corner of the intersection between the entry's cell
//! span and the visited span. That cell is always visited and always holds the
//! entry, so results need no deduplication pass.

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::bounding_box::BoundingBox;
use crate::config::GridConfig;
use crate::polar::Point2D;
use crate::spatial_index::{Entry, SpatialIndex};

/// Integer cell coordinates `(distance column, angle row)`
pub type CellKey = (i64, i64);

type Bucket = SmallVec<[usize; 4]>;

/// Entries whose bounds would cover more cells than this are bucketed only
/// at their own point.
const MAX_CELLS_PER_ENTRY: i128 = 64;

/// Inclusive rectangle of cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CellSpan {
    min_x: i64,
    min_y: i64,
    max_x: i64,
    max_y: i64,
}

impl CellSpan {
    fn single((x, y): CellKey) -> Self {
        Self { min_x: x, min_y: y, max_x: x, max_y: y }
    }

    fn from_corners(a: CellKey, b: CellKey) -> Self {
        Self { min_x: a.0.min(b.0), min_y: a.1.min(b.1), max_x: a.0.max(b.0), max_y: a.1.max(b.1) }
    }

    fn union(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    fn intersect(self, other: Self) -> Option<Self> {
        let span = Self {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y),
        };
        (span.min_x <= span.max_x && span.min_y <= span.max_y).then_some(span)
    }

    fn contains(self, (x, y): CellKey) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    fn cell_count(self) -> i128 {
        // each side fits in i128, the product of two full i64 ranges does not
        (i128::from(self.max_x) - i128::from(self.min_x) + 1)
            .saturating_mul(i128::from(self.max_y) - i128::from(self.min_y) + 1)
    }
}

/// Grid-bucket point index
///
/// Average insert and query cost approach O(1) in the number of entries for
/// cell sizes matched to the data; heavy clustering degrades toward O(n).
/// A query never visits more cells than are occupied, so huge or unbounded
/// query boxes stay bounded by the index size.
///
/// # Examples
/// ```
/// use ringslice::prelude::*;
///
/// let mut grid = GridIndex::new(GridConfig::default());
/// grid.insert(Point2D::new(10.0, 0.5), BoundingBox::point(10.0, 0.5), 'a');
/// grid.insert(Point2D::new(80.0, 3.0), BoundingBox::point(80.0, 3.0), 'b');
///
/// let mut results = Vec::new();
/// grid.query(BoundingBox::new(0.0, 0.0, 50.0, 1.0), &mut results);
/// assert_eq!(results, vec![0]);
/// ```
#[derive(Clone, Debug)]
pub struct GridIndex<T> {
    config: GridConfig,
    entries: Vec<Entry<T>>,
    /// Cell span each entry is bucketed into, parallel to `entries`
    spans: Vec<CellSpan>,
    cells: HashMap<CellKey, Bucket>,
    /// Union of all entry spans
    occupied: Option<CellSpan>,
}

impl<T> GridIndex<T> {
    /// Creates a new empty grid
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self::with_capacity(config, 0)
    }

    /// Creates a new grid with room for `capacity` entries
    #[must_use]
    pub fn with_capacity(config: GridConfig, capacity: usize) -> Self {
        Self {
            config,
            entries: Vec::with_capacity(capacity),
            spans: Vec::with_capacity(capacity),
            cells: HashMap::new(),
            occupied: None,
        }
    }

    /// Cell sizes this grid was built with
    #[must_use]
    pub fn config(&self) -> GridConfig {
        self.config
    }

    /// Number of non-empty cells
    #[must_use]
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    /// Cell holding the coordinate `(x, y)`
    ///
    /// NaN maps to cell 0 and infinities saturate, like any `f64 as i64` cast.
    #[inline]
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "saturating float to cell cast")]
    pub fn cell_of(&self, x: f64, y: f64) -> CellKey {
        (
            (x / self.config.distance_cell()).floor() as i64,
            (y / self.config.angle_cell()).floor() as i64,
        )
    }

    fn span_of(&self, area: BoundingBox) -> CellSpan {
        CellSpan::from_corners(self.cell_of(area.x, area.y), self.cell_of(area.max_x(), area.max_y()))
    }

    /// Pushes the entries of `bucket` whose home cell is `cell` and whose point lies in `area`
    fn collect(&self, cell: CellKey, bucket: &Bucket, visit: CellSpan, area: BoundingBox, results: &mut Vec<usize>) {
        for &idx in bucket {
            let span = self.spans[idx];
            let home = (span.min_x.max(visit.min_x), span.min_y.max(visit.min_y));
            if home == cell && area.contains(self.entries[idx].point) {
                results.push(idx);
            }
        }
    }
}

impl<T> Default for GridIndex<T> {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl<T> SpatialIndex<T> for GridIndex<T> {
    fn insert(&mut self, point: Point2D, bounds: BoundingBox, item: T) {
        let own = CellSpan::single(self.cell_of(point.x, point.y));
        let mut span = own.union(self.span_of(bounds));
        if span.cell_count() > MAX_CELLS_PER_ENTRY {
            span = own;
        }

        let idx = self.entries.len();
        for cx in span.min_x..=span.max_x {
            for cy in span.min_y..=span.max_y {
                self.cells.entry((cx, cy)).or_default().push(idx);
            }
        }

        self.occupied = Some(self.occupied.map_or(span, |occupied| occupied.union(span)));
        self.spans.push(span);
        self.entries.push(Entry { point, item });
    }

    fn query(&self, area: BoundingBox, results: &mut Vec<usize>) {
        // negative or NaN extents contain nothing
        if !(area.width >= 0.0 && area.height >= 0.0) {
            return;
        }
        let Some(occupied) = self.occupied else {
            return;
        };
        let Some(visit) = self.span_of(area).intersect(occupied) else {
            return;
        };

        if visit.cell_count() <= self.cells.len() as i128 {
            for cx in visit.min_x..=visit.max_x {
                for cy in visit.min_y..=visit.max_y {
                    if let Some(bucket) = self.cells.get(&(cx, cy)) {
                        self.collect((cx, cy), bucket, visit, area, results);
                    }
                }
            }
        } else {
            // sparse grid: walking the occupied cells is cheaper than the span
            for (&cell, bucket) in &self.cells {
                if visit.contains(cell) {
                    self.collect(cell, bucket, visit, area, results);
                }
            }
        }
    }

    fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }
}
