// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate scalar abstraction.

use core::cmp::Ordering;
use core::fmt::{Debug, Display};

/// Numeric coordinate type used by every geometry value in this crate.
///
/// Besides plain arithmetic, a scalar names a widened accumulator type
/// (e.g., `i32`→`i64`, `i64`→`i128`) in which cross and dot products are
/// evaluated, so the orientation and projection predicates stay exact for
/// coordinates well inside the scalar's range.
///
/// The region helpers (`half`, `half_up`, `checked_double`) are what the
/// quadtree uses to subdivide and grow its square regions.
pub trait Scalar: Copy + PartialOrd + Debug + Display {
    /// Widened accumulator type for products.
    type Acc: Copy
        + PartialOrd
        + core::ops::Add<Output = Self::Acc>
        + core::ops::Sub<Output = Self::Acc>
        + core::ops::Mul<Output = Self::Acc>
        + Debug;

    /// Add two scalar values.
    fn add(a: Self, b: Self) -> Self;

    /// Subtract two scalar values: a - b.
    fn sub(a: Self, b: Self) -> Self;

    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// The unit cell size.
    fn one() -> Self;

    /// Half of `v`, truncated. Used for region midlines.
    fn half(v: Self) -> Self;

    /// Half of `v`, rounded half up. Used for child region sizes.
    fn half_up(v: Self) -> Self;

    /// `2 * v`, or `None` if the result is not representable.
    fn checked_double(v: Self) -> Option<Self>;

    /// Convert a scalar to the accumulator type.
    fn widen(v: Self) -> Self::Acc;

    /// Zero value for the accumulator type.
    fn acc_zero() -> Self::Acc;
}

impl Scalar for i32 {
    type Acc = i64;

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a.saturating_sub(b)
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }

    #[inline]
    fn half(v: Self) -> Self {
        v / 2
    }

    #[inline]
    fn half_up(v: Self) -> Self {
        (v >> 1) + (v & 1)
    }

    #[inline]
    fn checked_double(v: Self) -> Option<Self> {
        v.checked_mul(2)
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v.into()
    }

    #[inline]
    fn acc_zero() -> Self::Acc {
        0
    }
}

impl Scalar for i64 {
    type Acc = i128;

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a.saturating_sub(b)
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }

    #[inline]
    fn half(v: Self) -> Self {
        v / 2
    }

    #[inline]
    fn half_up(v: Self) -> Self {
        (v >> 1) + (v & 1)
    }

    #[inline]
    fn checked_double(v: Self) -> Option<Self> {
        v.checked_mul(2)
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v.into()
    }

    #[inline]
    fn acc_zero() -> Self::Acc {
        0
    }
}

impl Scalar for f64 {
    type Acc = Self;

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    // Region sizes are powers of two, so halving is exact and needs no rounding.
    #[inline]
    fn half(v: Self) -> Self {
        0.5 * v
    }

    #[inline]
    fn half_up(v: Self) -> Self {
        0.5 * v
    }

    #[inline]
    fn checked_double(v: Self) -> Option<Self> {
        let d = v + v;
        d.is_finite().then_some(d)
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v
    }

    #[inline]
    fn acc_zero() -> Self::Acc {
        0.0
    }
}

/// Helper alias for the widened accumulator type associated with a scalar `T`.
pub type ScalarAcc<T> = <T as Scalar>::Acc;

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}
