// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact geometric predicates.
//!
//! All predicates are pure and total. Degenerate input (zero-length segments,
//! polygons with fewer than three vertices, empty polygons) yields `false`.
//!
//! Box predicates use closed intervals: boxes that only touch along an edge or
//! at a corner overlap. The quadtree relies on this to decide which cells a box
//! on a cell boundary belongs to.

use core::ops::Sub;

use crate::polygon::{Polygon, SimplePolygon};
use crate::scalar::{Scalar, ScalarAcc, max_t, min_t};
use crate::types::{AxisAligned, Point, Segment, Vector};

/// True if the two boxes share at least one point. Touching edges count.
pub fn overlaps<A, B>(a: &A, b: &B) -> bool
where
    A: AxisAligned,
    B: AxisAligned<Scalar = A::Scalar>,
{
    let (a_min, a_max) = (a.bottom_left(), a.top_right());
    let (b_min, b_max) = (b.bottom_left(), b.top_right());
    a_max.x >= b_min.x && b_max.x >= a_min.x && a_max.y >= b_min.y && b_max.y >= a_min.y
}

/// True if the interiors of the two boxes intersect. Touching edges do not count.
pub fn overlaps_interior<A, B>(a: &A, b: &B) -> bool
where
    A: AxisAligned,
    B: AxisAligned<Scalar = A::Scalar>,
{
    let (a_min, a_max) = (a.bottom_left(), a.top_right());
    let (b_min, b_max) = (b.bottom_left(), b.top_right());
    a_max.x > b_min.x && b_max.x > a_min.x && a_max.y > b_min.y && b_max.y > a_min.y
}

/// True if the point lies inside or on the edge of the box.
pub fn contains_point<A: AxisAligned>(outer: &A, point: &Point<A::Scalar>) -> bool {
    let (min, max) = (outer.bottom_left(), outer.top_right());
    min.x <= point.x && point.x <= max.x && min.y <= point.y && point.y <= max.y
}

/// True if `outer` contains both the bottom-left and top-right corners of `inner`.
///
/// This is exact for axis-aligned `inner` only.
pub fn contains<A, B>(outer: &A, inner: &B) -> bool
where
    A: AxisAligned,
    B: AxisAligned<Scalar = A::Scalar>,
{
    contains_point(outer, &inner.bottom_left()) && contains_point(outer, &inner.top_right())
}

/// Turn direction of an ordered point triple.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The three points lie on one line.
    Collinear,
    /// Right turn.
    Clockwise,
    /// Left turn.
    CounterClockwise,
}

/// Orientation of the triple `(p, q, r)`: the sign of `(q - p) × (r - q)`.
pub fn orientation<T: Scalar>(p: Point<T>, q: Point<T>, r: Point<T>) -> Orientation {
    let w = T::widen;
    let cross = (w(q.x) - w(p.x)) * (w(r.y) - w(q.y)) - (w(q.y) - w(p.y)) * (w(r.x) - w(q.x));
    let zero = T::acc_zero();
    if cross > zero {
        Orientation::CounterClockwise
    } else if cross < zero {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// True if `q` lies within the bounding box of the segment `p`–`r`.
///
/// Combined with a collinearity check this tells whether `q` is on the segment.
pub fn on_segment<T: Scalar>(p: Point<T>, q: Point<T>, r: Point<T>) -> bool {
    q.x <= max_t(p.x, r.x)
        && q.x >= min_t(p.x, r.x)
        && q.y <= max_t(p.y, r.y)
        && q.y >= min_t(p.y, r.y)
}

/// True if the two closed segments share at least one point.
///
/// Zero-length segments are degenerate and never intersect anything.
pub fn segments_intersect<T: Scalar>(s1: &Segment<T>, s2: &Segment<T>) -> bool {
    if s1.is_degenerate() || s2.is_degenerate() {
        return false;
    }
    let (p1, q1) = (s1.first, s1.second);
    let (p2, q2) = (s2.first, s2.second);

    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    // An endpoint of one segment on the other, including collinear overlaps.
    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}

/// Even-odd point-in-polygon test. Points on the boundary are inside.
///
/// A horizontal ray is cast from `point` to one unit past the polygon's bounding box and
/// every boundary edge it hits is counted. An edge collinear with the point decides the
/// answer on its own: inside if the edge contains the point, outside otherwise.
///
/// When the ray passes exactly through a vertex, the vertex is counted with the edge that
/// ends there, and only if the previous and the next vertex lie on different sides of
/// the ray as seen from `point`. A boundary that only touches the ray is not counted.
pub fn point_in_simple_polygon<T: Scalar>(polygon: &SimplePolygon<T>, point: Point<T>) -> bool {
    let Ok(vertices) = polygon.boundary() else {
        return false;
    };
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let Some(bounds) = polygon.bounding_box() else {
        return false;
    };
    let far = Point::new(T::add(bounds.top_right().x, T::one()), point.y);
    let ray = Segment::new(point, far);

    let mut crossings = 0_usize;
    for i in 0..n {
        let (a, b) = (vertices[i], vertices[(i + 1) % n]);
        if !segments_intersect(&Segment::new(a, b), &ray) {
            continue;
        }
        if orientation(a, point, b) == Orientation::Collinear {
            return on_segment(a, point, b);
        }
        if a.y == point.y {
            // Already decided by the edge ending at `a`.
            continue;
        }
        if b.y == point.y {
            let next = vertices[(i + 2) % n];
            if orientation(point, b, a) == orientation(point, b, next) {
                continue;
            }
        }
        crossings += 1;
    }
    crossings % 2 == 1
}

/// Project vertices onto `axis`, returning the `(min, max)` interval of dot products.
///
/// Returns `None` for an empty vertex list.
pub fn project_polygon<T: Scalar>(
    axis: Vector<T>,
    vertices: &[Point<T>],
) -> Option<(ScalarAcc<T>, ScalarAcc<T>)> {
    let mut dots = vertices.iter().map(|p| axis.dot(Vector::from_point(*p)));
    let first = dots.next()?;
    let (mut lo, mut hi) = (first, first);
    for d in dots {
        lo = min_t(lo, d);
        hi = max_t(hi, d);
    }
    Some((lo, hi))
}

/// Gap between two projected intervals. Positive means they are disjoint.
pub fn interval_distance<A>(a: (A, A), b: (A, A)) -> A
where
    A: PartialOrd + Sub<Output = A>,
{
    if a.0 < b.0 { b.0 - a.1 } else { a.0 - b.1 }
}

/// Separating axis test between two simple polygons.
///
/// Every edge normal of both polygons is tried as a separating axis. The result is
/// exact for convex polygons. For concave polygons it may report an intersection
/// where there is none, since a concave pair can be disjoint without any of those
/// axes separating them.
pub fn polygons_intersect<T: Scalar>(first: &SimplePolygon<T>, second: &SimplePolygon<T>) -> bool {
    let (Ok(a), Ok(b)) = (first.boundary(), second.boundary()) else {
        return false;
    };
    if a.len() < 3 || b.len() < 3 {
        return false;
    }
    !has_separating_axis(first, a, b) && !has_separating_axis(second, a, b)
}

fn has_separating_axis<T: Scalar>(
    source: &SimplePolygon<T>,
    a: &[Point<T>],
    b: &[Point<T>],
) -> bool {
    source.edges().any(|edge| {
        let axis = edge.direction().perpendicular();
        match (project_polygon(axis, a), project_polygon(axis, b)) {
            (Some(pa), Some(pb)) => interval_distance(pa, pb) > T::acc_zero(),
            _ => false,
        }
    })
}

/// True if the point is inside the outer boundary and outside every hole.
///
/// Points on a hole's boundary are outside the polygon.
pub fn polygon_contains<T: Scalar>(polygon: &Polygon<T>, point: Point<T>) -> bool {
    let Ok(boundary) = polygon.boundary() else {
        return false;
    };
    point_in_simple_polygon(boundary, point)
        && !polygon
            .holes()
            .iter()
            .any(|hole| point_in_simple_polygon(hole, point))
}
