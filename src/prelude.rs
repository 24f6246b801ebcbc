//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use ringslice::prelude::*;
//! ```

pub use crate::{
    AnyIndex, BoundingBox, GridConfig, GridIndex, Hit, IndexBackend, LastQueryShape, LinearIndex,
    Point2D, PolarPoint, Positioned, QueryObserver, QueryShape, RingQuery, SpatialIndex,
};
