// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Insert a few boxes, watch the root grow, query by area and point, then remove.
//!
//! Run:
//! - `cargo run -p quadrille_demos --example quadtree_basics`

use quadrille_geometry::{Point, Rect};
use quadrille_tree::{InsertError, QuadTree};

fn main() {
    let mut tree = QuadTree::new();
    let a = Rect::from_xywh(0, 0, 10, 10);
    let b = Rect::from_xywh(50, 50, 5, 5);

    tree.insert(a);
    println!("after first insert: {:?}", tree.root_region());
    tree.insert(b);
    println!("after growing: {:?}", tree.root_region());
    println!("{tree:?} with {} nodes", tree.node_count());

    // Area queries include boxes that only touch the area.
    let near_origin: Vec<_> = tree.query(Rect::from_xywh(0, 0, 12, 12)).collect();
    println!("near origin: {near_origin:?}");
    assert_eq!(near_origin, [&a]);

    let everything = tree.query(Rect::from_xywh(0, 0, 100, 100)).count();
    assert_eq!(everything, 2, "both boxes overlap the big area");

    let at_point: Vec<_> = tree.query_point(Point::new(52, 52)).collect();
    println!("at (52, 52): {at_point:?}");

    // Negative coordinates are rejected rather than silently misplaced.
    match tree.try_insert(Rect::from_xywh(-5, 0, 1, 1)) {
        Err(InsertError::NegativeCoordinate) => println!("rejected negative box"),
        other => println!("unexpected: {other:?}"),
    }

    assert!(tree.remove(&a));
    assert!(!tree.contains(&a));
    println!(
        "after remove: len = {}, nodes = {}",
        tree.len(),
        tree.node_count()
    );
}
