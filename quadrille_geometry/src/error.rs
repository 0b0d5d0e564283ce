// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry error types.

use thiserror::Error;

/// Errors raised by geometry accessors.
///
/// Predicates never return these; degenerate input there simply yields `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The polygon has no boundary points.
    #[error("the polygon is empty")]
    EmptyPolygon,
}
