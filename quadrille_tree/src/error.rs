// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion errors.

use thiserror::Error;

/// Reasons a box cannot be placed in a [`QuadTree`](crate::QuadTree).
///
/// The tree is left untouched when one of these is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InsertError {
    /// The box has a negative x or y coordinate; regions are anchored at the origin.
    #[error("quadtree keys must have non-negative coordinates")]
    NegativeCoordinate,
    /// Covering the box would need a root region larger than the scalar type can represent.
    #[error("quadtree region size overflows the coordinate type")]
    RegionOverflow,
}
