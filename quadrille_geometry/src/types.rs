// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry value types.

use core::fmt;

use crate::scalar::Scalar;

/// A point in the plane.
///
/// Points order lexicographically by `(x, y)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point<T> {
    /// The x-axis coordinate.
    pub x: T,
    /// The y-axis coordinate.
    pub y: T,
}

impl<T> Point<T> {
    /// Create a new point.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Point<T> {
    /// The origin `(0, 0)`.
    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Move the point by the given offsets.
    pub fn translate(&mut self, dx: T, dy: T) {
        self.x = T::add(self.x, dx);
        self.y = T::add(self.y, dy);
    }

    /// Return a copy moved by the given offsets.
    pub fn translated(mut self, dx: T, dy: T) -> Self {
        self.translate(dx, dy);
        self
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point {{ {}, {} }}", self.x, self.y)
    }
}

/// A free vector in the plane.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector<T> {
    /// The x component.
    pub x: T,
    /// The y component.
    pub y: T,
}

impl<T> Vector<T> {
    /// Create a new vector.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Vector<T> {
    /// The vector pointing from `from` to `to`.
    pub fn between(from: Point<T>, to: Point<T>) -> Self {
        Self::new(T::sub(to.x, from.x), T::sub(to.y, from.y))
    }

    /// The vector from the origin to `p`.
    pub fn from_point(p: Point<T>) -> Self {
        Self::new(p.x, p.y)
    }

    /// Dot product, evaluated in the widened accumulator.
    pub fn dot(self, other: Self) -> T::Acc {
        T::widen(self.x) * T::widen(other.x) + T::widen(self.y) * T::widen(other.y)
    }

    /// The vector rotated a quarter turn counterclockwise: `(-y, x)`.
    ///
    /// Not normalized; callers comparing projections on the same axis do not need unit length.
    pub fn perpendicular(self) -> Self {
        Self::new(T::sub(T::zero(), self.y), self.x)
    }
}

impl<T: Scalar> core::ops::Add for Vector<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(T::add(self.x, rhs.x), T::add(self.y, rhs.y))
    }
}

impl<T: Scalar> core::ops::Sub for Vector<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(T::sub(self.x, rhs.x), T::sub(self.y, rhs.y))
    }
}

/// An axis-aligned box exposing its corners.
///
/// This is the whole contract the box predicates and the quadtree rely on.
/// The y axis points up: `bottom_left` is the minimum corner and `top_right` the maximum.
pub trait AxisAligned {
    /// Coordinate type.
    type Scalar: Scalar;

    /// Minimum corner (the box position).
    fn bottom_left(&self) -> Point<Self::Scalar>;

    /// Extent along x.
    fn width(&self) -> Self::Scalar;

    /// Extent along y.
    fn height(&self) -> Self::Scalar;

    /// Maximum corner.
    fn top_right(&self) -> Point<Self::Scalar> {
        let bl = self.bottom_left();
        Point::new(
            Self::Scalar::add(bl.x, self.width()),
            Self::Scalar::add(bl.y, self.height()),
        )
    }

    /// Corner at `(max x, min y)`.
    fn bottom_right(&self) -> Point<Self::Scalar> {
        let bl = self.bottom_left();
        Point::new(Self::Scalar::add(bl.x, self.width()), bl.y)
    }

    /// Corner at `(min x, max y)`.
    fn top_left(&self) -> Point<Self::Scalar> {
        let bl = self.bottom_left();
        Point::new(bl.x, Self::Scalar::add(bl.y, self.height()))
    }
}

/// Axis-aligned rectangle given by its bottom-left position, width and height.
///
/// Width and height are expected to be non-negative; this is not enforced.
/// Rectangles order lexicographically by `(pos, width, height)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rect<T> {
    /// Bottom-left corner.
    pub pos: Point<T>,
    /// Extent along x.
    pub width: T,
    /// Extent along y.
    pub height: T,
}

impl<T> Rect<T> {
    /// Create a rectangle from its position and size.
    pub const fn new(pos: Point<T>, width: T, height: T) -> Self {
        Self { pos, width, height }
    }

    /// Create a rectangle from origin and size.
    pub const fn from_xywh(x: T, y: T, width: T, height: T) -> Self {
        Self {
            pos: Point::new(x, y),
            width,
            height,
        }
    }
}

impl<T: Scalar> Rect<T> {
    /// Move the rectangle by the given offsets.
    pub fn translate(&mut self, dx: T, dy: T) {
        self.pos.translate(dx, dy);
    }
}

impl<T: Scalar> AxisAligned for Rect<T> {
    type Scalar = T;

    #[inline]
    fn bottom_left(&self) -> Point<T> {
        self.pos
    }

    #[inline]
    fn width(&self) -> T {
        self.width
    }

    #[inline]
    fn height(&self) -> T {
        self.height
    }
}

impl<T: fmt::Display> fmt::Display for Rect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect {{ {}, {}, {}, {} }}",
            self.pos.x, self.pos.y, self.width, self.height
        )
    }
}

/// Axis-aligned square. The quadtree uses squares for node regions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square<T> {
    /// Bottom-left corner.
    pub pos: Point<T>,
    /// Side length.
    pub size: T,
}

impl<T> Square<T> {
    /// Create a square from its position and side length.
    pub const fn new(pos: Point<T>, size: T) -> Self {
        Self { pos, size }
    }
}

impl<T: Scalar> Square<T> {
    /// Move the square by the given offsets.
    pub fn translate(&mut self, dx: T, dy: T) {
        self.pos.translate(dx, dy);
    }
}

impl<T: Scalar> AxisAligned for Square<T> {
    type Scalar = T;

    #[inline]
    fn bottom_left(&self) -> Point<T> {
        self.pos
    }

    #[inline]
    fn width(&self) -> T {
        self.size
    }

    #[inline]
    fn height(&self) -> T {
        self.size
    }
}

impl<T: fmt::Display> fmt::Display for Square<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Square {{ {{ {}, {} }}, {} }}",
            self.pos.x, self.pos.y, self.size
        )
    }
}

/// A closed line segment between two points.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Segment<T> {
    /// Start point.
    pub first: Point<T>,
    /// End point.
    pub second: Point<T>,
}

impl<T> Segment<T> {
    /// Create a segment between two points.
    pub const fn new(first: Point<T>, second: Point<T>) -> Self {
        Self { first, second }
    }
}

impl<T: Scalar> Segment<T> {
    /// True when both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.first == self.second
    }

    /// Direction vector from `first` to `second`.
    pub fn direction(&self) -> Vector<T> {
        Vector::between(self.first, self.second)
    }
}

impl<T: fmt::Display> fmt::Display for Segment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment {{ {}, {} }}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn rect_corners() {
        let r = Rect::from_xywh(2_i32, 3, 10, 20);
        assert_eq!(r.bottom_left(), Point::new(2, 3));
        assert_eq!(r.bottom_right(), Point::new(12, 3));
        assert_eq!(r.top_left(), Point::new(2, 23));
        assert_eq!(r.top_right(), Point::new(12, 23));
    }

    #[test]
    fn square_corners() {
        let s = Square::new(Point::new(4_i64, 4), 4);
        assert_eq!(s.top_right(), Point::new(8, 8));
        assert_eq!(s.bottom_right(), Point::new(8, 4));
        assert_eq!(s.width(), s.height());
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Point::new(1, 9) < Point::new(2, 0));
        assert!(Point::new(1, 1) < Point::new(1, 2));
        assert!(Rect::from_xywh(0, 0, 5, 1) < Rect::from_xywh(0, 0, 5, 2));
        let raised = Rect::from_xywh(0, 1, 0, 0);
        assert!(raised > Rect::from_xywh(0, 0, 100, 100));
    }

    #[test]
    fn translate_moves_position_only() {
        let mut r = Rect::from_xywh(1_i32, 1, 3, 4);
        r.translate(10, -1);
        assert_eq!(r, Rect::from_xywh(11, 0, 3, 4));
        assert_eq!(Point::new(0_i32, 0).translated(2, 3), Point::new(2, 3));
    }

    #[test]
    fn vector_ops() {
        let v = Vector::between(Point::new(1_i32, 1), Point::new(4, 5));
        assert_eq!(v, Vector::new(3, 4));
        assert_eq!(v.dot(v), 25);
        assert_eq!(v.perpendicular(), Vector::new(-4, 3));
        assert_eq!(v.perpendicular().dot(v), 0);
        assert_eq!(v + Vector::new(1, 1) - Vector::new(4, 5), Vector::new(0, 0));
    }

    #[test]
    fn display_formats() {
        assert_eq!(format!("{}", Point::new(1, 2)), "Point { 1, 2 }");
        let r = Rect::from_xywh(1, 2, 3, 4);
        assert_eq!(format!("{r}"), "Rect { 1, 2, 3, 4 }");
        assert_eq!(
            format!("{}", Square::new(Point::new(0, 8), 8)),
            "Square { { 0, 8 }, 8 }"
        );
        assert_eq!(
            format!("{}", Segment::new(Point::new(0, 0), Point::new(1, 1))),
            "Segment { Point { 0, 0 }, Point { 1, 1 } }"
        );
    }
}
