// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrille Tree: a dynamic region quadtree over axis-aligned boxes.
//!
//! - Insert, remove and look up any key implementing
//!   [`AxisAligned`](quadrille_geometry::AxisAligned) + [`Ord`].
//! - Query lazily by overlapping area or by point.
//! - The root grows on demand; children are created only where keys land.
//!
//! Each key lives in the shallowest node whose split lines it crosses, so a key is found
//! by walking one root-to-node path and an overlap query only visits regions touching the
//! query area.
//!
//! # Example
//!
//! ```rust
//! use quadrille_geometry::{Point, Rect};
//! use quadrille_tree::QuadTree;
//!
//! let mut tree = QuadTree::new();
//! tree.insert(Rect::from_xywh(0, 0, 10, 10));
//! tree.insert(Rect::from_xywh(50, 50, 5, 5));
//!
//! let hits: Vec<_> = tree.query(Rect::from_xywh(48, 48, 10, 10)).collect();
//! assert_eq!(hits, [&Rect::from_xywh(50, 50, 5, 5)]);
//!
//! assert_eq!(tree.query_point(Point::new(5, 5)).count(), 1);
//! assert!(tree.remove(&Rect::from_xywh(0, 0, 10, 10)));
//! assert_eq!(tree.len(), 1);
//! ```
//!
//! Coordinates must be non-negative: regions are anchored at the origin. Use
//! [`QuadTree::try_insert`] to get an [`InsertError`] instead of a panic.
//!
//! Structural changes (root creation, root growth, pruning) are reported as `tracing`
//! events at the `TRACE` level.

#![no_std]

extern crate alloc;

mod error;
mod tree;

pub use error::InsertError;
pub use tree::{Iter, QuadTree, Query, ZOrder, child_region};
