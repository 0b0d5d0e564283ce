// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions to and from Kurbo geometry (feature `kurbo`).
//!
//! Kurbo rectangles are stored as two corners; Quadrille rectangles as a minimum
//! corner plus extents. Converting from Kurbo normalizes inverted rectangles.

use crate::types::{Point, Rect};

impl From<kurbo::Point> for Point<f64> {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point<f64>> for kurbo::Point {
    fn from(p: Point<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<kurbo::Rect> for Rect<f64> {
    fn from(r: kurbo::Rect) -> Self {
        let x = r.x0.min(r.x1);
        let y = r.y0.min(r.y1);
        Self::from_xywh(x, y, r.x0.max(r.x1) - x, r.y0.max(r.y1) - y)
    }
}

impl From<Rect<f64>> for kurbo::Rect {
    fn from(r: Rect<f64>) -> Self {
        Self::new(r.pos.x, r.pos.y, r.pos.x + r.width, r.pos.y + r.height)
    }
}
