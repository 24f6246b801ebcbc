//! Ring-slice (annular sector) queries over a polar snapshot of entities.
//!
//! Every entity is projected once, at construction, into `(distance, angle)`
//! space around the origin and stored in a [`SpatialIndex`] with distance on
//! the `x` axis and angle on the `y` axis. A ring slice then becomes one box in
//! that space, or two when the angular range crosses the 0/2π seam.
//!
//! Boundary convention: distance is closed, `[start, start + |end - start|]`;
//! angle is half-open, `[start, end)`. A slice ending at `2π` therefore never
//! includes angle `0`, and two slices sharing an edge never share an entity.

use std::f64::consts::TAU;
use std::marker::PhantomData;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::bounding_box::BoundingBox;
use crate::config::IndexBackend;
use crate::observer::{NoObserver, QueryObserver, QueryShape};
use crate::polar::{normalize_angle, project, Point2D, PolarPoint, Positioned};
use crate::spatial_index::{AnyIndex, Entry, SpatialIndex};

/// One query result: the source entity and its polar position
#[derive(Debug, PartialEq)]
pub struct Hit<'a, E> {
    /// The matched entity, borrowed from the snapshot
    pub entity: &'a E,
    /// Its position relative to the query origin
    pub polar: PolarPoint,
}

impl<E> Clone for Hit<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Hit<'_, E> {}

impl<'a, E> Hit<'a, E> {
    fn from_entry(entry: &Entry<&'a E>) -> Self {
        Self {
            entity: entry.item,
            polar: PolarPoint { distance: entry.point.x, angle: entry.point.y },
        }
    }
}

/// Extent from `start` whose closed top edge reaches at least `end`
///
/// `end - start` can round so that `start + height` lands one ulp short of
/// `end`; a single step up always closes that gap.
fn covering_height(start: f64, end: f64) -> f64 {
    let height = end - start;
    if start + height < end { height.next_up() } else { height }
}

/// Boxes to run for one slice, each with the exclusive angle limit applied on top
struct SlicePlan {
    shape: QueryShape,
    angle_limits: SmallVec<[f64; 2]>,
}

impl SlicePlan {
    fn new(distance_start: f64, distance_end: f64, angle_start: f64, angle_end: f64) -> Self {
        let width = (distance_end - distance_start).abs();
        let start = normalize_angle(angle_start);
        if angle_start == angle_end || !angle_start.is_finite() || !angle_end.is_finite() {
            return Self::single(BoundingBox::new(distance_start, start, width, 0.0), start);
        }
        let sweep = angle_end - angle_start;
        // a sweep of at least a full counter-clockwise turn covers everything
        let end = if sweep >= TAU { start } else { normalize_angle(angle_end) };
        // equal after folding: a full turn only when the raw inputs are a turn
        // apart (0 and 2π), otherwise a sliver that rounded away
        if start == end && sweep.abs() < TAU / 2.0 {
            return Self::single(BoundingBox::new(distance_start, start, width, 0.0), start);
        }

        if start < end {
            return Self::single(BoundingBox::new(distance_start, start, width, covering_height(start, end)), end);
        }

        // Crosses the seam: [start, 2π) then [0, remainder). The leftover width
        // 2π - |start - end| - (2π - start) reduces to `end` when end <= start.
        let upper = BoundingBox::new(distance_start, start, width, covering_height(start, TAU));
        let lower = BoundingBox::new(distance_start, 0.0, width, end);
        let mut angle_limits = SmallVec::new();
        angle_limits.push(TAU);
        angle_limits.push(end);
        Self { shape: QueryShape::wrapped(upper, lower), angle_limits }
    }

    fn single(area: BoundingBox, angle_limit: f64) -> Self {
        let mut angle_limits = SmallVec::new();
        angle_limits.push(angle_limit);
        Self { shape: QueryShape::single(area), angle_limits }
    }
}

/// Build-once, query-many ring-slice engine
///
/// Borrows the entity slice for its whole lifetime and never mutates it.
/// Entities added to or moved in the caller's collection afterwards are not
/// seen; build a new engine to pick them up.
///
/// # Examples
/// ```
/// use ringslice::prelude::*;
/// use std::f64::consts::PI;
///
/// let entities = [Point2D::new(10.0, 0.0), Point2D::new(0.0, 10.0), Point2D::new(-10.0, 0.0)];
/// let rings = RingQuery::new(&entities, Point2D::new(0.0, 0.0));
///
/// // half-open on angle: the entity at exactly π is excluded
/// let hits = rings.query(5.0, 15.0, 0.0, PI);
/// assert_eq!(hits.len(), 2);
/// ```
#[derive(Debug)]
pub struct RingQuery<'a, E, I = AnyIndex<&'a E>> {
    origin: Point2D,
    index: I,
    _entities: PhantomData<&'a [E]>,
}

impl<'a, E: Positioned> RingQuery<'a, E> {
    /// Builds an engine over the default grid backend
    #[must_use]
    pub fn new(entities: &'a [E], origin: Point2D) -> Self {
        Self::with_backend(entities, origin, IndexBackend::default())
    }

    /// Builds an engine over the configured backend
    #[must_use]
    pub fn with_backend(entities: &'a [E], origin: Point2D, backend: IndexBackend) -> Self {
        let index = AnyIndex::with_capacity(backend, entities.len());
        debug!(backend = index.backend_name(), entities = entities.len(), "building ring query");
        Self::with_index(entities, origin, index)
    }
}

impl<'a, E: Positioned, I: SpatialIndex<&'a E>> RingQuery<'a, E, I> {
    /// Builds an engine by filling `index`, which is expected to be empty
    pub fn with_index(entities: &'a [E], origin: Point2D, mut index: I) -> Self {
        debug_assert!(index.is_empty(), "ring query index must start empty");
        for entity in entities {
            let polar = project(entity.position(), origin);
            index.insert(
                Point2D::new(polar.distance, polar.angle),
                BoundingBox::point(polar.distance, polar.angle),
                entity,
            );
        }
        debug!(
            indexed = index.len(),
            origin_x = origin.x,
            origin_y = origin.y,
            "ring query snapshot built"
        );
        Self { origin, index, _entities: PhantomData }
    }

    /// Entities within the ring slice, each with its polar position
    ///
    /// Angles may be any finite value; they are folded into `[0, 2π)`. The
    /// slice runs counter-clockwise from `angle_start` to `angle_end` and is
    /// split in two when that crosses angle 0. Distance bounds are not
    /// reordered: the band is `[distance_start, distance_start + |distance_end - distance_start|]`.
    #[must_use]
    pub fn query(&self, distance_start: f64, distance_end: f64, angle_start: f64, angle_end: f64) -> Vec<Hit<'a, E>> {
        let mut results = Vec::new();
        self.query_into(distance_start, distance_end, angle_start, angle_end, &mut NoObserver, &mut results);
        results
    }

    /// Like [`query`](Self::query), reporting the executed boxes to `observer`
    pub fn query_observed<O: QueryObserver + ?Sized>(
        &self,
        distance_start: f64,
        distance_end: f64,
        angle_start: f64,
        angle_end: f64,
        observer: &mut O,
    ) -> Vec<Hit<'a, E>> {
        let mut results = Vec::new();
        self.query_into(distance_start, distance_end, angle_start, angle_end, observer, &mut results);
        results
    }

    /// Appends the hits of a ring-slice query to `results`
    pub fn query_into<O: QueryObserver + ?Sized>(
        &self,
        distance_start: f64,
        distance_end: f64,
        angle_start: f64,
        angle_end: f64,
        observer: &mut O,
        results: &mut Vec<Hit<'a, E>>,
    ) {
        let plan = SlicePlan::new(distance_start, distance_end, angle_start, angle_end);
        observer.observe(&plan.shape);

        let before = results.len();
        let mut candidates = Vec::new();
        for (area, &angle_limit) in plan.shape.boxes().iter().zip(&plan.angle_limits) {
            if area.is_zero_area() {
                continue;
            }
            candidates.clear();
            self.index.query(*area, &mut candidates);
            for &idx in &candidates {
                if let Some(entry) = self.index.get(idx)
                    && entry.point.y < angle_limit
                {
                    results.push(Hit::from_entry(entry));
                }
            }
        }

        trace!(
            distance_start,
            distance_end,
            angle_start,
            angle_end,
            wrapped = plan.shape.is_wrapped(),
            boxes = ?plan.shape.boxes(),
            hits = results.len() - before,
            "ring slice query"
        );
    }

    /// Every indexed entity with its polar position, in input order
    pub fn all(&self) -> impl Iterator<Item = Hit<'a, E>> + '_ {
        self.index.entries().iter().map(Hit::from_entry)
    }

    /// Raw index entries: `(distance, angle)` points and their entities
    #[must_use]
    pub fn entries(&self) -> &[Entry<&'a E>] {
        self.index.entries()
    }

    /// Origin every distance and angle is measured from
    #[must_use]
    pub fn origin(&self) -> Point2D {
        self.origin
    }

    /// The underlying spatial index
    #[must_use]
    pub fn index(&self) -> &I {
        &self.index
    }

    /// Number of indexed entities
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when the snapshot held no entities
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
