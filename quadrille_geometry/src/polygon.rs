// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygon value types.

use alloc::vec::Vec;
use core::fmt;

use crate::error::GeometryError;
use crate::scalar::{Scalar, max_t, min_t};
use crate::types::{Point, Rect, Segment};

/// A polygon bounded by one closed, non-self-intersecting vertex chain.
///
/// The last vertex implicitly connects back to the first.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SimplePolygon<T> {
    vertices: Vec<Point<T>>,
}

impl<T> SimplePolygon<T> {
    /// Create a polygon from its boundary vertices.
    pub fn new(vertices: Vec<Point<T>>) -> Self {
        Self { vertices }
    }

    /// True if the polygon has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of boundary vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// The boundary vertices.
    ///
    /// Fails with [`GeometryError::EmptyPolygon`] when the polygon has no vertices;
    /// callers can check [`SimplePolygon::is_empty`] first.
    pub fn boundary(&self) -> Result<&[Point<T>], GeometryError> {
        if self.vertices.is_empty() {
            return Err(GeometryError::EmptyPolygon);
        }
        Ok(&self.vertices)
    }

    /// Mutable access to the boundary vertices. Fails like [`SimplePolygon::boundary`].
    pub fn boundary_mut(&mut self) -> Result<&mut Vec<Point<T>>, GeometryError> {
        if self.vertices.is_empty() {
            return Err(GeometryError::EmptyPolygon);
        }
        Ok(&mut self.vertices)
    }
}

impl<T: Scalar> SimplePolygon<T> {
    /// Boundary edges in vertex order.
    ///
    /// Includes the closing edge from the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = Segment<T>> + '_ {
        let next = self.vertices.iter().cycle().skip(1);
        self.vertices
            .iter()
            .zip(next)
            .map(|(&a, &b)| Segment::new(a, b))
    }

    /// The smallest rectangle containing every vertex, or `None` for an empty polygon.
    pub fn bounding_box(&self) -> Option<Rect<T>> {
        let (first, rest) = self.vertices.split_first()?;
        let (mut min, mut max) = (*first, *first);
        for p in rest {
            min = Point::new(min_t(min.x, p.x), min_t(min.y, p.y));
            max = Point::new(max_t(max.x, p.x), max_t(max.y, p.y));
        }
        Some(Rect::new(min, T::sub(max.x, min.x), T::sub(max.y, min.y)))
    }

    /// Move every vertex by the given offsets.
    pub fn translate(&mut self, dx: T, dy: T) {
        for p in &mut self.vertices {
            p.translate(dx, dy);
        }
    }
}

impl<T: fmt::Display> fmt::Display for SimplePolygon<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SimplePolygon { ")?;
        for p in &self.vertices {
            write!(f, "{p}, ")?;
        }
        f.write_str("}")
    }
}

/// A polygon with an outer boundary and zero or more holes.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Polygon<T> {
    // The outer boundary first, then the holes.
    contours: Vec<SimplePolygon<T>>,
}

impl<T> Polygon<T> {
    /// Create a polygon from its outer boundary and holes.
    pub fn new(boundary: SimplePolygon<T>, holes: Vec<SimplePolygon<T>>) -> Self {
        let mut contours = Vec::with_capacity(holes.len() + 1);
        contours.push(boundary);
        contours.extend(holes);
        Self { contours }
    }

    /// True if the polygon has no contours at all.
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// The outer boundary. Fails with [`GeometryError::EmptyPolygon`] on an empty polygon.
    pub fn boundary(&self) -> Result<&SimplePolygon<T>, GeometryError> {
        self.contours.first().ok_or(GeometryError::EmptyPolygon)
    }

    /// Mutable access to the outer boundary. Fails like [`Polygon::boundary`].
    pub fn boundary_mut(&mut self) -> Result<&mut SimplePolygon<T>, GeometryError> {
        self.contours.first_mut().ok_or(GeometryError::EmptyPolygon)
    }

    /// True if the polygon has at least one hole.
    pub fn has_holes(&self) -> bool {
        self.contours.len() > 1
    }

    /// The holes; empty when there are none.
    pub fn holes(&self) -> &[SimplePolygon<T>] {
        self.contours.get(1..).unwrap_or(&[])
    }
}

impl<T: Scalar> Polygon<T> {
    /// Bounding box of the outer boundary.
    pub fn bounding_box(&self) -> Option<Rect<T>> {
        self.boundary().ok()?.bounding_box()
    }

    /// Move the boundary and every hole by the given offsets.
    pub fn translate(&mut self, dx: T, dy: T) {
        for contour in &mut self.contours {
            contour.translate(dx, dy);
        }
    }
}

impl<T: fmt::Display> fmt::Display for Polygon<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Polygon { Boundary: { ")?;
        if let Some(boundary) = self.contours.first() {
            write!(f, "{boundary}")?;
        }
        for hole in self.contours.iter().skip(1) {
            write!(f, " }} Hole: {{ {hole}")?;
        }
        f.write_str(" } }")
    }
}
