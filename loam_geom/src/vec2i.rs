// Copyright 2026 the Loam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable integer 2-vector.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Immutable vector in two-dimensional space with integer components.
///
/// `Vec2I` is a plain value type: equality, ordering into maps, and copying
/// are all by component. All arithmetic produces a new vector.
///
/// The named methods ([`add`](Self::add), [`sub`](Self::sub),
/// [`scale`](Self::scale), [`div`](Self::div), [`dot`](Self::dot)) are the
/// contract; the operator impls are sugar over them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2I {
    /// X-component of this vector.
    pub x: i32,
    /// Y-component of this vector.
    pub y: i32,
}

#[allow(
    clippy::should_implement_trait,
    reason = "the named methods are the contract; the operator impls delegate to them"
)]
impl Vec2I {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0, 0);

    /// Vector with both components set to one.
    pub const ONE: Self = Self::new(1, 1);

    /// Create a new vector with the given components.
    #[inline(always)]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise sum of two vectors.
    #[inline]
    #[must_use]
    pub const fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference of two vectors: `self - other`.
    #[inline]
    #[must_use]
    pub const fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Multiply both components by a scalar.
    #[inline]
    #[must_use]
    pub const fn scale(self, factor: i32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Divide both components by a scalar, truncating toward zero.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero, like any integer division.
    #[inline]
    #[must_use]
    pub const fn div(self, divisor: i32) -> Self {
        Self::new(self.x / divisor, self.y / divisor)
    }

    /// Dot product of two vectors.
    #[inline]
    #[must_use]
    pub const fn dot(self, other: Self) -> i32 {
        self.x * other.x + self.y * other.y
    }
}

impl Add for Vec2I {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::add(self, rhs)
    }
}

impl Sub for Vec2I {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::sub(self, rhs)
    }
}

impl Mul<i32> for Vec2I {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i32) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vec2I> for i32 {
    type Output = Vec2I;

    #[inline]
    fn mul(self, rhs: Vec2I) -> Vec2I {
        rhs.scale(self)
    }
}

impl Div<i32> for Vec2I {
    type Output = Self;

    #[inline]
    fn div(self, rhs: i32) -> Self {
        Self::div(self, rhs)
    }
}

impl Neg for Vec2I {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.scale(-1)
    }
}

impl fmt::Display for Vec2I {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
