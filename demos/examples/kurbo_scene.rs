// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index Kurbo rectangles.
//!
//! Converts `kurbo::Rect`s into quadtree keys and hit-tests a `kurbo::Point`.
//!
//! Run:
//! - `cargo run -p quadrille_demos --example kurbo_scene`

use core::cmp::Ordering;

use kurbo::{Point, Rect};
use quadrille_geometry::AxisAligned;
use quadrille_tree::QuadTree;

/// A scene item: a named rectangle ordered by its name.
#[derive(Clone, Debug)]
struct Item {
    name: &'static str,
    bounds: quadrille_geometry::Rect<f64>,
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Item {}

impl PartialOrd for Item {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Item {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(other.name)
    }
}

impl AxisAligned for Item {
    type Scalar = f64;

    fn bottom_left(&self) -> quadrille_geometry::Point<f64> {
        self.bounds.pos
    }

    fn width(&self) -> f64 {
        self.bounds.width
    }

    fn height(&self) -> f64 {
        self.bounds.height
    }
}

fn main() {
    let scene = [
        ("background", Rect::new(0.0, 0.0, 400.0, 300.0)),
        ("button", Rect::new(20.0, 20.0, 120.0, 60.0)),
        // Corners given in reverse are normalized by the conversion.
        ("badge", Rect::new(110.0, 55.0, 100.0, 45.0)),
    ];
    let tree: QuadTree<Item> = scene
        .iter()
        .map(|&(name, rect)| Item {
            name,
            bounds: rect.into(),
        })
        .collect();
    println!("{tree:?}");

    let cursor = Point::new(105.0, 50.0);
    let mut hits: Vec<_> = tree
        .query_point(cursor.into())
        .map(|item| item.name)
        .collect();
    hits.sort_unstable();
    println!("under {cursor:?}: {hits:?}");
    assert_eq!(hits, ["background", "badge", "button"]);

    for item in &tree {
        let back: Rect = item.bounds.into();
        println!("{:>10}: {back:?}", item.name);
    }
}
