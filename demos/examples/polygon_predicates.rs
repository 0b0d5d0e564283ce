// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygon predicates.
//!
//! Segment crossings, point-in-polygon with holes, and separating-axis tests.
//!
//! Run:
//! - `cargo run -p quadrille_demos --example polygon_predicates`

use quadrille_geometry::predicates::{
    Orientation, orientation, point_in_simple_polygon, polygon_contains, polygons_intersect,
    segments_intersect,
};
use quadrille_geometry::{Point, Polygon, Segment, SimplePolygon};

fn square(x: i32, y: i32, side: i32) -> SimplePolygon<i32> {
    SimplePolygon::new(vec![
        Point::new(x, y),
        Point::new(x + side, y),
        Point::new(x + side, y + side),
        Point::new(x, y + side),
    ])
}

fn main() {
    let a = Segment::new(Point::new(1, 1), Point::new(4, 4));
    let b = Segment::new(Point::new(1, 4), Point::new(4, 1));
    println!("{a} x {b}: {}", segments_intersect(&a, &b));
    assert_eq!(
        orientation(a.first, a.second, b.first),
        Orientation::CounterClockwise
    );

    let outer = square(0, 0, 10);
    for p in [
        Point::new(5, 5),
        Point::new(10, 10),
        Point::new(20, 20),
        Point::new(-1, 10),
    ] {
        println!("{p} in {outer}: {}", point_in_simple_polygon(&outer, p));
    }

    let framed = Polygon::new(outer, vec![square(3, 3, 3)]);
    println!("{framed}");
    println!(
        "  contains (1, 1): {}",
        polygon_contains(&framed, Point::new(1, 1))
    );
    println!(
        "  contains (4, 4): {}",
        polygon_contains(&framed, Point::new(4, 4))
    );

    let left = square(0, 0, 4);
    let touching = square(4, 0, 4);
    let apart = square(5, 0, 4);
    println!(
        "touching squares intersect: {}",
        polygons_intersect(&left, &touching)
    );
    println!(
        "separated squares intersect: {}",
        polygons_intersect(&left, &apart)
    );
}
