// Copyright (c) 2022-2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

//! Lagrange interpolation at zero over the integers.
//!
//! The value `P(0)` of the unique degree `k - 1` polynomial through `k`
//! points is a rational number. It is kept as an unreduced numerator and
//! denominator for the whole computation, so no precision is ever lost and
//! no division happens until the caller asks for a quotient.

use crate::errors::{InternalError, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use tracing::error;

/// A share: the x-coordinate it was issued for and the polynomial's value
/// there.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    x: BigInt,
    y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn x(&self) -> &BigInt {
        &self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

impl AsRef<Point> for Point {
    fn as_ref(&self) -> &Point {
        self
    }
}

/// An exact, unreduced fraction `numerator / denominator`.
///
/// A zero denominator marks a degenerate interpolation (two points with the
/// same x-coordinate). It is never a meaningful value and every consumer has
/// to check for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RationalResult {
    numerator: BigInt,
    denominator: BigInt,
}

impl RationalResult {
    pub fn new(numerator: BigInt, denominator: BigInt) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    fn zero() -> Self {
        Self::new(BigInt::zero(), BigInt::one())
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn is_degenerate(&self) -> bool {
        self.denominator.is_zero()
    }

    /// The integer value of the fraction, if it has one.
    ///
    /// Returns `None` for a degenerate result or when the division leaves a
    /// remainder (truncating division, as in `num % den == 0`).
    pub fn exact_quotient(&self) -> Option<BigInt> {
        if self.is_degenerate() {
            return None;
        }
        let (quotient, remainder) = self.numerator.div_rem(&self.denominator);
        remainder.is_zero().then_some(quotient)
    }

    /// The quotient rounded toward zero, discarding any remainder.
    pub fn truncated_quotient(&self) -> Result<BigInt> {
        if self.is_degenerate() {
            error!("Tried to take the quotient of a degenerate interpolation result");
            return Err(InternalError::DegenerateInterpolation);
        }
        Ok(&self.numerator / &self.denominator)
    }

    /// Add `term_numerator / term_denominator` by cross-multiplication.
    fn add_term(self, term_numerator: BigInt, term_denominator: BigInt) -> Self {
        let numerator = self.numerator * &term_denominator + term_numerator * &self.denominator;
        let denominator = self.denominator * term_denominator;
        Self::new(numerator, denominator)
    }
}

/// Evaluate the interpolating polynomial through `points` at zero.
///
/// Terms are summed in input order. The fraction is never reduced, so the
/// numerator and denominator grow with the number of points; the value they
/// describe does not depend on the order.
///
/// Points must have pairwise distinct x-coordinates. This is not checked:
/// a repeated x-coordinate produces a zero denominator.
pub fn interpolate_at_zero<P: AsRef<Point>>(points: &[P]) -> RationalResult {
    points
        .iter()
        .enumerate()
        .fold(RationalResult::zero(), |acc, (i, point)| {
            let (basis_numerator, basis_denominator) = lagrange_basis_at_zero(i, points);
            let term = point.as_ref().y() * basis_numerator;
            acc.add_term(term, basis_denominator)
        })
}

/// Numerator and denominator of the `i`-th Lagrange basis polynomial at
/// zero: `prod(-x_j)` over `prod(x_i - x_j)` for all `j != i`.
fn lagrange_basis_at_zero<P: AsRef<Point>>(i: usize, points: &[P]) -> (BigInt, BigInt) {
    let x_i = points[i].as_ref().x();
    points
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != i)
        .fold(
            (BigInt::one(), BigInt::one()),
            |(numerator, denominator), (_, other)| {
                let x_j = other.as_ref().x();
                (numerator * -x_j, denominator * (x_i - x_j))
            },
        )
}
