//! # ringslice - Annular Sector Queries over 2D Points
//!
//! A small library answering "which points lie within a ring slice around an
//! origin": a range query over a distance interval and an angle interval, as
//! used for radar and field-of-view style lookups.
//!
//! ## Features
//!
//! - **Polar Snapshot**: Entities are projected once into `(distance, angle)` space
//! - **Seam Handling**: Slices crossing angle 0 are split into two box queries
//! - **Pluggable Index**: Grid-bucket broad phase or exact linear scan, behind one trait
//! - **Diagnostics Hook**: Optional observer receives the executed query boxes
//!
//! ## Quick Start
//!
//! ```rust
//! use ringslice::prelude::*;
//! use std::f64::consts::PI;
//!
//! let entities = vec![
//!     Point2D::new(410.0, 400.0), // east of the origin, distance 10
//!     Point2D::new(400.0, 420.0), // angle π/2, distance 20
//!     Point2D::new(300.0, 400.0), // angle π, distance 100
//! ];
//!
//! // Build once over a snapshot of the entities
//! let rings = RingQuery::new(&entities, Point2D::new(400.0, 400.0));
//!
//! // Everything between 5 and 50 units away, in the upper half plane
//! let hits = rings.query(5.0, 50.0, 0.0, PI);
//! assert_eq!(hits.len(), 2);
//!
//! // A slice from 7π/4 to π/4 crosses angle 0 and is split internally
//! let hits = rings.query(0.0, 50.0, 7.0 * PI / 4.0, PI / 4.0);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(*hits[0].entity, entities[0]);
//! ```
//!
//! ## How It Works
//!
//! Each entity becomes a point with distance on the `x` axis and angle on the
//! `y` axis. A ring slice is then an axis-aligned box in that space. When the
//! angular range wraps past `2π` the query runs as `[start, 2π)` plus
//! `[0, end)`. Distance bounds are closed and angle bounds are half-open, so
//! adjacent slices never report the same entity twice.
//!
//! The default [`GridIndex`] buckets points into uniform cells and re-checks
//! every candidate against the exact box, so it may look at extra points but
//! never misses one. [`LinearIndex`] scans everything and is the reference the
//! grid is tested against.

pub mod bounding_box;
pub mod config;
pub mod grid_index;
pub mod linear_index;
pub mod observer;
pub mod polar;
pub mod prelude;
pub mod ring_query;
pub mod spatial_index;

pub use bounding_box::BoundingBox;
pub use config::{ConfigError, GridConfig, IndexBackend};
pub use grid_index::GridIndex;
pub use linear_index::LinearIndex;
pub use observer::{LastQueryShape, NoObserver, QueryObserver, QueryShape};
pub use polar::{normalize_angle, project, Point2D, PolarPoint, Positioned};
pub use ring_query::{Hit, RingQuery};
pub use spatial_index::{AnyIndex, Entry, SpatialIndex};

mod comparison_tests;
