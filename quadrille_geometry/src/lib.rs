// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrille Geometry: planar value types and exact geometric predicates.
//!
//! This crate is the foundation of the Quadrille region quadtree and is usable on its own
//! for segment and polygon reasoning.
//!
//! - Value types: [`Point`], [`Vector`], [`Rect`], [`Square`], [`Segment`],
//!   [`SimplePolygon`] and [`Polygon`] (a boundary with holes).
//! - The [`AxisAligned`] capability trait: anything exposing a bottom-left corner, a width
//!   and a height. Box predicates and the quadtree only need this.
//! - [`predicates`]: box overlap and containment, orientation, segment intersection,
//!   point-in-polygon by ray casting, and polygon intersection by separating axes.
//!
//! Everything is generic over a [`Scalar`] coordinate (`i32`, `i64`, `f64`). Products are
//! evaluated in a widened accumulator (`i32`→`i64`, `i64`→`i128`), so integer predicates
//! are exact for coordinates up to about half of the scalar's range.
//!
//! # Example
//!
//! ```rust
//! use quadrille_geometry::{Point, Polygon, Segment, SimplePolygon};
//! use quadrille_geometry::predicates::{polygon_contains, segments_intersect};
//!
//! let a = Segment::new(Point::new(1, 1), Point::new(4, 4));
//! let b = Segment::new(Point::new(1, 4), Point::new(4, 1));
//! assert!(segments_intersect(&a, &b));
//!
//! let outer = SimplePolygon::new(vec![
//!     Point::new(0, 0),
//!     Point::new(10, 0),
//!     Point::new(10, 10),
//!     Point::new(0, 10),
//! ]);
//! let hole = SimplePolygon::new(vec![
//!     Point::new(3, 3),
//!     Point::new(6, 3),
//!     Point::new(6, 6),
//!     Point::new(3, 6),
//! ]);
//! let polygon = Polygon::new(outer, vec![hole]);
//! assert!(polygon_contains(&polygon, Point::new(1, 1)));
//! assert!(!polygon_contains(&polygon, Point::new(4, 4)));
//! ```
//!
//! ## Coordinate conventions
//!
//! The y axis points up: a rectangle's position is its bottom-left corner. Box predicates
//! use closed intervals, so boxes that merely touch overlap.
//!
//! ## Features
//!
//! - `std` *(default)*: forwarded to optional dependencies.
//! - `libm`: `no_std` math for optional dependencies.
//! - `kurbo`: `From` conversions between `Point<f64>`/`Rect<f64>` and Kurbo's types.

#![no_std]

extern crate alloc;

pub mod error;
pub mod polygon;
pub mod predicates;
pub mod scalar;
pub mod types;

#[cfg(feature = "kurbo")]
mod kurbo_compat;

pub use error::GeometryError;
pub use polygon::{Polygon, SimplePolygon};
pub use predicates::Orientation;
pub use scalar::{Scalar, ScalarAcc};
pub use types::{AxisAligned, Point, Rect, Segment, Square, Vector};
